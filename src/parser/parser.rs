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

use crate::ast::Node;
use crate::error::{Result, RuleError, MIN_CLAUSE_TOKENS};
use crate::lexer::token::{Token, TokenType};

/// Builds the rule AST from a token list.
///
/// # Pipeline
/// ```text
/// Rule Text → Lexer → Tokens → Parser → AST → Evaluator
/// ```
///
/// # Errors
/// - [`RuleError::InsufficientTokens`] for fewer than three tokens
/// - [`RuleError::ExpectedValueAfterCondition`] when a condition ends the input
/// - [`RuleError::UnexpectedToken`] for any token that is neither FIELD nor
///   CONDITION where a clause should start, or that is not a VALUE right
///   after a CONDITION
pub fn parse_rules(tokens: &[Token]) -> Result<Node> {
    Parser::new(tokens).parse()
}

/// Parsing context carried from one step to the next.
///
/// A FIELD token replaces the current field; every following CONDITION
/// uses it until the next FIELD. It starts out empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseState {
    pub current_field: String,
}

/// The RULEX parser.
///
/// Holds the token list and a cursor into it. The cursor helpers live in
/// `helpers.rs`.
pub struct Parser<'t> {
    /// Complete list of tokens to be parsed.
    pub(crate) tokens: &'t [Token],

    /// Current cursor position within the token list.
    pub(crate) current: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parses the whole token list into a ROOT node.
    ///
    /// EXPRESSION children appear in the same order as their clauses in the
    /// rule text.
    pub fn parse(&mut self) -> Result<Node> {
        if self.tokens.len() < MIN_CLAUSE_TOKENS {
            return Err(RuleError::InsufficientTokens {
                found: self.tokens.len(),
            });
        }

        let mut root = Node::root();
        let mut state = ParseState::default();

        while !self.is_at_end() {
            let (next, expression) = self.step(state)?;
            if let Some(expression) = expression {
                root.push_expression(expression);
            }
            state = next;
        }

        debug!(expressions = root.children.len(), "parsed rule");
        Ok(root)
    }

    /// Consumes the token(s) of one transition and returns the updated state,
    /// plus the EXPRESSION node the transition produced, if any.
    ///
    /// A CONDITION looks at the following token first and only consumes it
    /// once it is known to be a VALUE, so a failed step leaves the cursor on
    /// the offending token.
    pub fn step(&mut self, state: ParseState) -> Result<(ParseState, Option<Node>)> {
        let Some(token) = self.advance() else {
            return Ok((state, None));
        };

        match token.token_type {
            TokenType::Field => {
                trace!(field = token.field_name(), "current field");
                let next = ParseState {
                    current_field: token.field_name().to_string(),
                };
                Ok((next, None))
            }

            TokenType::Condition => {
                let Some(value) = self.peek() else {
                    return Err(RuleError::ExpectedValueAfterCondition {
                        condition: token.value.clone(),
                        span: token.span,
                    });
                };
                if !value.is(TokenType::Value) {
                    return Err(unexpected(value));
                }
                self.advance();

                debug!(
                    field = %state.current_field,
                    condition = %token.value,
                    value = %value.value,
                    "expression"
                );
                let expression = Node::expression(
                    state.current_field.as_str(),
                    token.value.as_str(),
                    value.value.as_str(),
                );
                Ok((state, Some(expression)))
            }

            TokenType::Operator
            | TokenType::Value
            | TokenType::Logical
            | TokenType::Separator
            | TokenType::Transform
            | TokenType::Invalid => Err(unexpected(token)),
        }
    }
}

fn unexpected(token: &Token) -> RuleError {
    RuleError::UnexpectedToken {
        value: token.value.clone(),
        token_type: token.token_type,
        span: token.span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Clause, NodeType};

    fn tok(token_type: TokenType, value: &str) -> Token {
        Token::new(token_type, value)
    }

    #[test]
    fn rejects_short_input() {
        assert_eq!(
            parse_rules(&[]),
            Err(RuleError::InsufficientTokens { found: 0 })
        );
        assert_eq!(
            parse_rules(&[tok(TokenType::Field, "a"), tok(TokenType::Condition, "TYPE")]),
            Err(RuleError::InsufficientTokens { found: 2 })
        );
    }

    #[test]
    fn builds_expression_from_hand_built_tokens() {
        let tokens = [
            tok(TokenType::Field, "age"),
            tok(TokenType::Condition, "RANGE"),
            tok(TokenType::Value, "18"),
        ];
        let root = parse_rules(&tokens).unwrap();

        assert_eq!(root.node_type, NodeType::Root);
        assert_eq!(
            root.clauses().collect::<Vec<_>>(),
            vec![Clause { field: "age", condition: "RANGE", value: "18" }]
        );
    }

    #[test]
    fn field_carries_over_to_later_conditions() {
        let tokens = [
            tok(TokenType::Field, "FIELD(\"email\")"),
            tok(TokenType::Condition, "REQUIRED"),
            tok(TokenType::Value, "'true'"),
            tok(TokenType::Condition, "MATCHES"),
            tok(TokenType::Value, "\".+@.+\""),
        ];
        let root = parse_rules(&tokens).unwrap();
        let fields: Vec<&str> = root.clauses().map(|c| c.field).collect();

        assert_eq!(fields, vec!["email", "email"]);
    }

    #[test]
    fn condition_before_any_field_uses_empty_field() {
        let tokens = [
            tok(TokenType::Condition, "TYPE"),
            tok(TokenType::Value, "'int'"),
            tok(TokenType::Field, "FIELD(\"x\")"),
        ];
        let root = parse_rules(&tokens).unwrap();

        assert_eq!(root.children.len(), 1);
        assert_eq!(root.clauses().next().unwrap().field, "");
    }

    #[test]
    fn step_threads_state_explicitly() {
        let tokens = [
            tok(TokenType::Field, "FIELD(\"a\")"),
            tok(TokenType::Condition, "IN"),
            tok(TokenType::Value, "(1, 2)"),
        ];
        let mut parser = Parser::new(&tokens);

        let (state, node) = parser.step(ParseState::default()).unwrap();
        assert_eq!(state.current_field, "a");
        assert!(node.is_none());

        let (state, node) = parser.step(state).unwrap();
        assert_eq!(state.current_field, "a");
        assert_eq!(node, Some(Node::expression("a", "IN", "(1, 2)")));
        assert!(parser.is_at_end());
    }

    #[test]
    fn trailing_condition_needs_a_value() {
        let tokens = [
            tok(TokenType::Field, "FIELD(\"a\")"),
            tok(TokenType::Value, "1"),
            tok(TokenType::Condition, "RANGE"),
        ];
        // The VALUE in second position is rejected before the condition is reached.
        assert!(matches!(
            parse_rules(&tokens),
            Err(RuleError::UnexpectedToken { token_type: TokenType::Value, .. })
        ));

        let tokens = [
            tok(TokenType::Field, "FIELD(\"a\")"),
            tok(TokenType::Field, "FIELD(\"b\")"),
            tok(TokenType::Condition, "RANGE"),
        ];
        assert!(matches!(
            parse_rules(&tokens),
            Err(RuleError::ExpectedValueAfterCondition { ref condition, .. }) if condition == "RANGE"
        ));
    }

    #[test]
    fn failed_condition_step_leaves_cursor_on_offender() {
        let tokens = [
            tok(TokenType::Condition, "TYPE"),
            tok(TokenType::Separator, ","),
            tok(TokenType::Value, "1"),
        ];
        let mut parser = Parser::new(&tokens);

        assert!(matches!(
            parser.step(ParseState::default()),
            Err(RuleError::UnexpectedToken { token_type: TokenType::Separator, .. })
        ));
        assert_eq!(parser.peek().map(|t| t.value.as_str()), Some(","));
    }

    #[test]
    fn condition_at_end_reports_missing_value() {
        let tokens = [tok(TokenType::Condition, "RANGE")];
        let mut parser = Parser::new(&tokens);

        assert_eq!(
            parser.step(ParseState::default()),
            Err(RuleError::ExpectedValueAfterCondition {
                condition: "RANGE".into(),
                span: Default::default(),
            })
        );
        assert!(parser.is_at_end());
    }

    #[test]
    fn condition_value_must_be_a_value_token() {
        let tokens = [
            tok(TokenType::Field, "FIELD(\"a\")"),
            tok(TokenType::Condition, "REQUIRED"),
            tok(TokenType::Logical, "AND"),
            tok(TokenType::Field, "FIELD(\"b\")"),
            tok(TokenType::Condition, "RANGE"),
            tok(TokenType::Value, "18"),
        ];

        assert_eq!(
            parse_rules(&tokens),
            Err(RuleError::UnexpectedToken {
                value: "AND".into(),
                token_type: TokenType::Logical,
                span: Default::default(),
            })
        );
    }

    #[test]
    fn reserved_token_types_are_unexpected() {
        for token_type in [TokenType::Operator, TokenType::Transform, TokenType::Invalid] {
            let tokens = [
                tok(TokenType::Field, "FIELD(\"a\")"),
                tok(token_type, "??"),
                tok(TokenType::Value, "1"),
            ];
            assert_eq!(
                parse_rules(&tokens),
                Err(RuleError::UnexpectedToken {
                    value: "??".into(),
                    token_type,
                    span: Default::default(),
                })
            );
        }
    }
}
