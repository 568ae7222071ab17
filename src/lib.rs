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

//! # rulex
//!
//! Lexer and parser for a small declarative field rule language:
//!
//! ```text
//! FIELD("age") RANGE 18
//! FIELD("email") REQUIRED 'true' MATCHES ".+@.+"
//! ```
//!
//! Rule text goes through two pure stages:
//!
//! ```text
//! Rule Text → lexer::tokenize → Vec<Token> → parser::parse_rules → ast::Node
//! ```
//!
//! The resulting tree exposes one [`ast::Clause`] per clause. Interpreting
//! conditions and values is left to the caller.

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

pub use ast::{Clause, Node, NodeType};
pub use error::{Result, RuleError};
pub use lexer::{tokenize, Token, TokenType};
pub use parser::parse_rules;
pub use span::Span;

/// Runs the full pipeline: lexes `input` and parses the resulting tokens.
pub fn compile(input: &str) -> Result<Node> {
    let tokens = tokenize(input)?;
    parse_rules(&tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_a_single_clause() {
        let root = compile("FIELD(\"age\") RANGE 18").unwrap();

        assert_eq!(root.children.len(), 1);
        assert_eq!(
            root.clauses().next(),
            Some(Clause { field: "age", condition: "RANGE", value: "18" })
        );
    }

    #[test]
    fn lex_errors_stop_the_pipeline() {
        assert!(matches!(compile("FIELD(age) RANGE 1"), Err(RuleError::Lex { .. })));
    }
}
