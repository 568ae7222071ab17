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

use tracing::{debug, trace};

use crate::error::{Result, RuleError};
use crate::lexer::patterns::match_at_start;
use crate::lexer::token::Token;
use crate::span::Span;

/// Converts raw rule text into an ordered list of tokens.
///
/// This is the public entry point for lexical analysis.
///
/// # Example
/// ```text
/// FIELD("age") RANGE 18
///   → [FIELD  FIELD("age")] [CONDITION RANGE] [VALUE 18]
/// ```
///
/// # Errors
/// Returns [`RuleError::Lex`] carrying the unmatched remainder as soon as no
/// pattern matches. No character is ever skipped silently.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).tokenize()
}

/// Scanner state for a single rule text.
pub struct Lexer<'src> {
    /// The full, untrimmed input.
    source: &'src str,

    /// Current scan position, kept in sync with the byte cursor.
    position: Span,

    /// Tokens emitted so far.
    tokens: Vec<Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source` with the cursor at offset `0`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: Span::start(),
            tokens: Vec::new(),
        }
    }

    /// Runs the scanner to the end of the input.
    ///
    /// # Behavior
    /// - Skips whitespace before every token and at the end of input
    /// - Tries the pattern table in precedence order at each position
    /// - Stops at the first position no pattern accepts
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        while let Some(rest) = self.skip_whitespace() {
            self.scan_token(rest)?;
        }

        debug!(tokens = self.tokens.len(), "tokenized rule");
        Ok(self.tokens)
    }

    /// Moves the cursor over leading whitespace and returns what remains,
    /// or `None` once the input is exhausted.
    fn skip_whitespace(&mut self) -> Option<&'src str> {
        let source = self.source;
        let remaining = &source[self.position.offset..];
        let trimmed = remaining.trim_start();

        self.advance(&remaining[..remaining.len() - trimmed.len()]);

        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Scans exactly one token from the start of `rest`.
    fn scan_token(&mut self, rest: &'src str) -> Result<()> {
        let Some((token_type, lexeme)) = match_at_start(rest) else {
            debug!(offset = self.position.offset, "no lexer pattern matched");
            return Err(RuleError::Lex {
                remainder: rest.trim_end().to_string(),
                span: self.position,
            });
        };

        trace!(%token_type, lexeme, offset = self.position.offset, "token");
        self.tokens.push(Token::with_span(token_type, lexeme, self.position));
        self.advance(lexeme);

        Ok(())
    }

    fn advance(&mut self, text: &str) {
        self.position = self.position.advance(text);
    }
}
