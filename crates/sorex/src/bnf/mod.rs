//! # BNF Module
//!
//! Compiling BNF grammar descriptions into live parsers.
//!
//! ## Overview
//!
//! A grammar text is parsed (by a parser written in this crate's own
//! combinators) into a [`RuleMap`], then compiled rule by rule into a
//! `Parser<ParseNode>`:
//!
//! - an expression becomes the longest-matching of its compiled
//!   alternatives, tagged with the rule name;
//! - an alternative becomes the concatenation of its compiled terms;
//! - a rule reference becomes a deferred lookup, so forward and cyclic
//!   references work and an undefined reference fails when the parser
//!   is first applied;
//! - a literal matches itself and becomes a literal leaf.
//!
//! The built-in `EOL` rule (`"\n"` or `"\r\n"`) is always available.
//!
//! ## Usage
//!
//! ```
//! use sorex::from_bnf;
//!
//! let grammar = "<expr> ::= <num> | <num> '+' <expr>\n\
//!                <num>  ::= '0' | '1' | '2'";
//! let parser = from_bnf(grammar, "expr").unwrap();
//!
//! let (tree, rest) = parser.parse_str("1+2+0").unwrap();
//! assert_eq!(tree.show(), "1+2+0");
//! assert_eq!(rest, "");
//! ```
//!
//! Grammars with left recursion, direct or indirect, do not terminate
//! when the compiled parser runs; restructure the rules so every cycle
//! consumes input first.
//!
//! ## Typed surface
//!
//! [`from_bnf`] mirrors the parse contract of the rest of the crate:
//! it returns `None` for a malformed grammar and defers everything
//! else to parse time. [`Grammar`] is the richer form: loading reports
//! a [`GrammarError`], undefined references can be detected eagerly
//! with [`Grammar::validate`], and a missing entry rule is an error
//! rather than a parser that never matches.

mod compiler;
mod grammar;
mod rules;

pub use rules::{Alternative, Alternatives, RuleMap, Term};

use std::sync::Arc;

use crate::error::GrammarError;
use crate::parser::Parser;
use crate::syntax::ParseNode;

/// Compile a BNF grammar text into a parser for its `main_rule`.
///
/// Returns `None` when the grammar text is malformed: a grammar must
/// contain at least one rule and nothing beyond insignificant
/// whitespace may remain after the last one. An undefined `main_rule`
/// (or an undefined reference inside the grammar) is not detected
/// here; it surfaces as parse failure when the returned parser is
/// applied.
#[must_use]
pub fn from_bnf(grammar_text: &str, main_rule: &str) -> Option<Parser<ParseNode>> {
    let grammar = Grammar::parse(grammar_text).ok()?;
    Some(compiler::compile_rule(
        Arc::clone(&grammar.rules),
        main_rule.into(),
    ))
}

/// A loaded grammar: the rule map, ready for compilation.
#[derive(Debug, Clone, PartialEq)]
pub struct Grammar {
    rules: Arc<RuleMap>,
}

impl Grammar {
    /// Parse a grammar text into its rule map.
    ///
    /// # Errors
    ///
    /// [`GrammarError::Empty`] when the text contains no rules,
    /// [`GrammarError::Malformed`] when it is not valid BNF or has
    /// trailing content other than whitespace.
    pub fn parse(text: &str) -> Result<Self, GrammarError> {
        if text.chars().all(char::is_whitespace) {
            return Err(GrammarError::Empty);
        }
        let (rules, rest) = grammar::rule_list()
            .parse_str(text)
            .ok_or(GrammarError::Malformed)?;
        if !rest.chars().all(char::is_whitespace) {
            return Err(GrammarError::Malformed);
        }
        Ok(Self {
            rules: Arc::new(RuleMap::from_rules(rules)),
        })
    }

    /// The rule map, built-in `EOL` rule included.
    #[must_use]
    pub fn rules(&self) -> &RuleMap {
        &self.rules
    }

    /// Eagerly check that every referenced rule is defined.
    ///
    /// Compilation never requires this; an unvalidated grammar simply
    /// fails at parse time on the undefined reference.
    ///
    /// # Errors
    ///
    /// [`GrammarError::UndefinedRule`] naming the first dangling
    /// reference found.
    pub fn validate(&self) -> Result<(), GrammarError> {
        for (name, alternatives) in self.rules.iter() {
            for alternative in alternatives {
                for term in alternative {
                    if let Term::Rule(reference) = term {
                        if !self.rules.contains(reference) {
                            return Err(GrammarError::UndefinedRule {
                                rule: reference.clone(),
                                referenced_from: name.into(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Compile the grammar into a parser rooted at `main_rule`.
    ///
    /// # Errors
    ///
    /// [`GrammarError::MissingRule`] when `main_rule` is not defined.
    pub fn to_parser(&self, main_rule: &str) -> Result<Parser<ParseNode>, GrammarError> {
        if !self.rules.contains(main_rule) {
            return Err(GrammarError::MissingRule {
                rule: main_rule.into(),
            });
        }
        Ok(compiler::compile_rule(
            Arc::clone(&self.rules),
            main_rule.into(),
        ))
    }
}
