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

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::span::Span;

/// Represents the **category of a lexical token** in a RULEX rule.
///
/// The set is closed. Only `Field`, `Condition`, `Value`, `Logical` and
/// `Separator` are produced by the lexer today; the remaining kinds are
/// reserved by the token model and rejected by the parser.
///
/// # Compiler Pipeline Role
/// ```text
/// Rule Text → Lexer → TokenType → Parser → AST
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    /// A field reference written as `FIELD("name")`.
    Field,

    /// A condition keyword.
    ///
    /// One of `TYPE`, `RANGE`, `MATCHES`, `IN`, `REQUIRED`.
    Condition,

    /// Reserved for comparison operators.
    Operator,

    /// A literal operand.
    ///
    /// Examples:
    /// - `"text"` / `'text'`
    /// - `18`, `2.5`
    /// - `(1, 2, 3)`
    Value,

    /// `AND`, `OR` or `NOT`.
    Logical,

    /// A single comma.
    Separator,

    /// Reserved for value transformations.
    Transform,

    /// Reserved for text that could not be classified.
    Invalid,
}

impl TokenType {
    /// Upper-case name of the token type, as written in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Field => "FIELD",
            TokenType::Condition => "CONDITION",
            TokenType::Operator => "OPERATOR",
            TokenType::Value => "VALUE",
            TokenType::Logical => "LOGICAL",
            TokenType::Separator => "SEPARATOR",
            TokenType::Transform => "TRANSFORM",
            TokenType::Invalid => "INVALID",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a **single lexical token** produced by the RULEX lexer.
///
/// # Example Tokens
/// ```text
/// FIELD("age")  →  { token_type: Field,     value: "FIELD(\"age\")" }
/// RANGE         →  { token_type: Condition, value: "RANGE" }
/// 18            →  { token_type: Value,     value: "18" }
/// ```
///
/// Tokens are created once by the lexer and only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The classified category of the token.
    #[serde(rename = "type")]
    pub token_type: TokenType,

    /// The exact source text that produced this token.
    pub value: String,

    /// Where the token starts in the original input.
    #[serde(default)]
    pub span: Span,
}

impl Token {
    /// Builds a token without a known source location.
    pub fn new(token_type: TokenType, value: impl Into<String>) -> Self {
        Self {
            token_type,
            value: value.into(),
            span: Span::default(),
        }
    }

    /// Builds a token located at `span`.
    pub fn with_span(token_type: TokenType, value: impl Into<String>, span: Span) -> Self {
        Self {
            token_type,
            value: value.into(),
            span,
        }
    }

    /// Returns the field name captured by a `FIELD("name")` literal.
    ///
    /// Tokens that were not built from the literal form (for example tokens
    /// assembled by hand in a caller) yield their raw value unchanged.
    pub fn field_name(&self) -> &str {
        self.value
            .strip_prefix("FIELD(\"")
            .and_then(|rest| rest.strip_suffix("\")"))
            .unwrap_or(&self.value)
    }

    /// Returns `true` if this token is of the given type.
    pub fn is(&self, token_type: TokenType) -> bool {
        self.token_type == token_type
    }
}

impl fmt::Display for Token {
    /// Prints only the token's source text, which is what users want to see
    /// in error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
