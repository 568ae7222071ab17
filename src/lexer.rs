/*
 * ==========================================================================
 * RULEX - Rule Expressions, Lexed & Parsed
 * ==========================================================================
 * 
 * Author:   Sam Wilcox
 * 
 * License:
 * This file is part of the RULEX rule language project.
 * 
 * RULEX is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

/// Token model:
/// - `TokenType` closed set of token categories
/// - `Token` type + exact source text + span
pub mod token;

/// The ordered pattern table and keyword lists.
pub mod patterns;

/// The scanner itself and the `tokenize` entry point.
pub mod lexer;

/// Re-export the public entry point so callers can use:
/// `crate::lexer::tokenize(...)`
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenType};
