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

use thiserror::Error;

use crate::lexer::token::TokenType;
use crate::span::Span;

/// Smallest number of tokens that can form a clause (`FIELD COND VALUE`).
pub const MIN_CLAUSE_TOKENS: usize = 3;

/// Every way lexing or parsing a rule can fail.
///
/// Errors are returned as a single structured value from the failing call.
/// Nothing is recovered and no partial AST is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// No lexical pattern matched at `span`.
    #[error("unexpected token at: {remainder}")]
    Lex {
        /// The unmatched input, from the failing position to the end.
        remainder: String,
        span: Span,
    },

    /// Fewer tokens than a single clause needs.
    #[error("insufficient tokens: a rule needs at least {min}, found {found}", min = MIN_CLAUSE_TOKENS)]
    InsufficientTokens { found: usize },

    /// A condition keyword was the last token.
    #[error("expected value after condition {condition}")]
    ExpectedValueAfterCondition { condition: String, span: Span },

    /// A token appeared where a FIELD or CONDITION was expected.
    #[error("unexpected token: {value}")]
    UnexpectedToken {
        value: String,
        token_type: TokenType,
        span: Span,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RuleError>;

impl RuleError {
    /// Stable error code, suitable for matching in tooling.
    pub fn code(&self) -> &'static str {
        match self {
            RuleError::Lex { .. } => "E_LEX",
            RuleError::InsufficientTokens { .. } => "E_INSUFFICIENT_TOKENS",
            RuleError::ExpectedValueAfterCondition { .. } => "E_EXPECTED_VALUE",
            RuleError::UnexpectedToken { .. } => "E_UNEXPECTED_TOKEN",
        }
    }

    /// Primary source location, when one is known.
    ///
    /// Parser errors raised on hand-built tokens have no location.
    pub fn span(&self) -> Option<Span> {
        match self {
            RuleError::Lex { span, .. }
            | RuleError::ExpectedValueAfterCondition { span, .. }
            | RuleError::UnexpectedToken { span, .. } => Some(*span).filter(Span::is_known),
            RuleError::InsufficientTokens { .. } => None,
        }
    }

    /// Optional follow-up hint for the rule author.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            RuleError::Lex { .. } => Some(
                "expected FIELD(\"name\"), a condition keyword, a quoted string, a number or a (list)",
            ),
            RuleError::InsufficientTokens { .. } => {
                Some("a rule is written as FIELD(\"name\") CONDITION value")
            }
            RuleError::ExpectedValueAfterCondition { .. } => {
                Some("add a value after the condition, e.g. RANGE 18")
            }
            RuleError::UnexpectedToken {
                token_type: TokenType::Logical | TokenType::Separator,
                ..
            } => Some("combining clauses with AND, OR, NOT or commas is not supported yet"),
            RuleError::UnexpectedToken { .. } => None,
        }
    }
}
