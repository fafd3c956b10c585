//! # Syntax Module
//!
//! The labelled parse tree produced by compiled grammars.
//!
//! ## Overview
//!
//! A [`ParseNode`] is a closed sum of two variants: a *rule node*
//! carrying a rule name and an ordered sequence of children, and a
//! *literal node* carrying the text that was matched verbatim. The
//! concatenation of literal leaves in depth first, left to right order
//! is exactly the prefix of the input the parser consumed;
//! [`ParseNode::show`] reconstructs it.

use compact_str::CompactString;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node of a labelled parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ParseNode {
    /// A nonterminal: the name of the grammar rule that matched and
    /// the nodes its winning alternative produced, in order.
    Rule {
        name: CompactString,
        children: Vec<ParseNode>,
    },
    /// A terminal: a literal string matched verbatim.
    Literal(CompactString),
}

impl ParseNode {
    /// Build a rule node.
    #[must_use]
    pub fn rule(name: impl Into<CompactString>, children: Vec<ParseNode>) -> Self {
        Self::Rule {
            name: name.into(),
            children,
        }
    }

    /// Build a literal leaf.
    #[must_use]
    pub fn literal(text: impl Into<CompactString>) -> Self {
        Self::Literal(text.into())
    }

    /// The rule name, for rule nodes.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Rule { name, .. } => Some(name),
            Self::Literal(_) => None,
        }
    }

    /// The node's children; empty for literal leaves.
    #[must_use]
    pub fn children(&self) -> &[ParseNode] {
        match self {
            Self::Rule { children, .. } => children,
            Self::Literal(_) => &[],
        }
    }

    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Reconstruct the matched input: the concatenation of literal
    /// leaves in depth first, left to right order.
    #[must_use]
    pub fn show(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut String) {
        match self {
            Self::Literal(text) => out.push_str(text),
            Self::Rule { children, .. } => {
                for child in children {
                    child.write_into(out);
                }
            }
        }
    }
}

impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParseNode {
        ParseNode::rule(
            "expr",
            vec![
                ParseNode::rule("num", vec![ParseNode::literal("1")]),
                ParseNode::literal("+"),
                ParseNode::rule(
                    "expr",
                    vec![ParseNode::rule("num", vec![ParseNode::literal("2")])],
                ),
            ],
        )
    }

    #[test]
    fn show_concatenates_literal_leaves() {
        assert_eq!(sample().show(), "1+2");
        assert_eq!(ParseNode::literal("abc").show(), "abc");
        assert_eq!(ParseNode::rule("empty", vec![]).show(), "");
    }

    #[test]
    fn display_matches_show() {
        let tree = sample();
        assert_eq!(tree.to_string(), tree.show());
    }

    #[test]
    fn accessors() {
        let tree = sample();
        assert_eq!(tree.name(), Some("expr"));
        assert_eq!(tree.children().len(), 3);
        assert!(!tree.is_literal());

        let leaf = ParseNode::literal("+");
        assert_eq!(leaf.name(), None);
        assert!(leaf.children().is_empty());
        assert!(leaf.is_literal());
    }
}
