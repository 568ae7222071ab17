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

use crate::lexer::token::Token;
use crate::parser::parser::Parser;

impl<'t> Parser<'t> {
    /// Consumes and returns the current token, or `None` at end of input.
    pub fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.current)?;
        self.current += 1;
        Some(token)
    }

    /// Returns the current token without consuming it.
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.current)
    }

    /// Returns true once every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }
}
