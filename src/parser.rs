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

/// Core parser:
/// - Owns the `Parser` struct and `ParseState`
/// - Exposes the `parse_rules(tokens)` entry point
pub mod parser;

/// Token cursor helpers:
/// - advance / peek
/// - end-of-input check
pub mod helpers;

/// Re-export the public parse entry point so callers can use:
/// `crate::parser::parse_rules(...)`
pub use parser::{parse_rules, ParseState, Parser};
