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

/// The kind of an AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Root,
    Expression,
    Field,
    Condition,
    Value,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Root => "ROOT",
            NodeType::Expression => "EXPRESSION",
            NodeType::Field => "FIELD",
            NodeType::Condition => "CONDITION",
            NodeType::Value => "VALUE",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the rule AST.
///
/// The tree has a fixed shape:
///
/// ```text
/// ROOT
/// ├── EXPRESSION
/// │   ├── FIELD      age
/// │   ├── CONDITION  RANGE
/// │   └── VALUE      18
/// └── EXPRESSION ...
/// ```
///
/// - ROOT only ever holds EXPRESSION children.
/// - Every EXPRESSION holds exactly FIELD, CONDITION, VALUE, in that order.
///
/// Both invariants are upheld by the constructors; the fields stay public
/// so the tree can be serialized and inspected freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub node_type: NodeType,

    /// Literal text carried by leaf nodes; empty for ROOT and EXPRESSION.
    #[serde(default)]
    pub value: String,

    #[serde(default)]
    pub children: Vec<Node>,
}

/// One `field / condition / value` triple, borrowed from an EXPRESSION node.
///
/// This is what an evaluator consumes. The value is the raw source text:
/// quotes and list parentheses are left in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clause<'a> {
    pub field: &'a str,
    pub condition: &'a str,
    pub value: &'a str,
}

impl Node {
    /// An empty ROOT node.
    pub fn root() -> Self {
        Self::leaf(NodeType::Root, String::new())
    }

    /// Builds an EXPRESSION node with its three children.
    pub fn expression(
        field: impl Into<String>,
        condition: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            node_type: NodeType::Expression,
            value: String::new(),
            children: vec![
                Self::leaf(NodeType::Field, field.into()),
                Self::leaf(NodeType::Condition, condition.into()),
                Self::leaf(NodeType::Value, value.into()),
            ],
        }
    }

    fn leaf(node_type: NodeType, value: String) -> Self {
        Self {
            node_type,
            value,
            children: Vec::new(),
        }
    }

    /// Appends an EXPRESSION to a ROOT node.
    pub(crate) fn push_expression(&mut self, expression: Node) {
        debug_assert_eq!(self.node_type, NodeType::Root);
        debug_assert_eq!(expression.node_type, NodeType::Expression);
        self.children.push(expression);
    }

    /// Views an EXPRESSION node as a [`Clause`].
    ///
    /// Returns `None` for any other node, or for an EXPRESSION whose
    /// children do not have the FIELD, CONDITION, VALUE shape (which can
    /// only happen to a tree deserialized from elsewhere).
    pub fn as_clause(&self) -> Option<Clause<'_>> {
        if self.node_type != NodeType::Expression {
            return None;
        }

        match self.children.as_slice() {
            [field, condition, value]
                if field.node_type == NodeType::Field
                    && condition.node_type == NodeType::Condition
                    && value.node_type == NodeType::Value =>
            {
                Some(Clause {
                    field: &field.value,
                    condition: &condition.value,
                    value: &value.value,
                })
            }
            _ => None,
        }
    }

    /// Iterates the clauses under this node, in source order.
    pub fn clauses(&self) -> impl Iterator<Item = Clause<'_>> {
        self.children.iter().filter_map(Node::as_clause)
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.node_type, indent = depth * 2)?;
        if !self.value.is_empty() {
            write!(f, " {}", self.value)?;
        }
        writeln!(f)?;

        for child in &self.children {
            child.write_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    /// Renders the tree one node per line, children indented two spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

impl fmt::Display for Clause<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.condition, self.value)
    }
}
