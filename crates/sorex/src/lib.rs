//! # Sorex
//!
//! A parser combinator library for recursive-descent parsing over
//! textual input, with a BNF-to-parser compiler on top.
//!
//! ## Overview
//!
//! The crate has two layers:
//!
//! - **Combinator core**: the [`Parser<T>`] abstraction, the
//!   primitives ([`item`], [`satisfy`], [`success`], [`failure`]) and
//!   the combinators that compose them (sequencing, alternation,
//!   repetition). Parsers are pure values: applying one to an input
//!   view either yields a value and the unconsumed suffix, or fails
//!   totally with `None`.
//! - **BNF compiler**: [`from_bnf`] reads a grammar description at
//!   runtime, resolves cross references between rules (forward and
//!   cyclic ones included) and emits a composed parser producing a
//!   labelled [`ParseNode`] tree.
//!
//! Sub-parsers everywhere may be given as zero-argument factories
//! instead of values; they are deferred and memoised on first use,
//! which is what makes mutually recursive definitions constructible.
//!
//! ## Quick Start
//!
//! ```
//! use sorex::{chain, either, integer, text};
//!
//! // A comma separated list of signed integers.
//! let csv = chain(integer(), text::char(','));
//! assert_eq!(csv.parse_str("1,-2,+3;tail"), Some((vec![1, -2, 3], ";tail")));
//!
//! // First-match alternation; failures never consume input.
//! let keyword = either(text::string("let"), text::string("letrec"));
//! assert_eq!(keyword.parse_str("let x"), Some(("let".to_string(), " x")));
//! ```
//!
//! Compiling a grammar:
//!
//! ```
//! use sorex::from_bnf;
//!
//! let parser = from_bnf(
//!     "<expr> ::= <num> | <num> '+' <expr>\n<num> ::= '0' | '1' | '2'",
//!     "expr",
//! )
//! .unwrap();
//!
//! let (tree, rest) = parser.parse_str("1+2+0").unwrap();
//! assert_eq!(tree.show(), "1+2+0");
//! assert_eq!(rest, "");
//! ```
//!
//! ## Modules
//!
//! - [`parser`] - The `Parser<T>` abstraction and primitives
//! - [`combinator`] - Functions that build parsers from parsers
//! - [`text`] - Ready-made character, string, numeric and boolean parsers
//! - [`syntax`] - The labelled parse tree
//! - [`bnf`] - The BNF grammar reader and compiler
//! - [`input`] - Non-owning input views
//! - [`error`] - Errors of the typed grammar surface
//!
//! ## Limits
//!
//! Parsing is synchronous and in-memory; there is no streaming, no
//! error recovery and no left-recursion elimination. A left-recursive
//! grammar recurses until the stack is exhausted.

pub mod bnf;
pub mod combinator;
pub mod error;
pub mod input;
pub mod parser;
pub mod syntax;
pub mod text;

pub use bnf::{from_bnf, Grammar, RuleMap, Term};
pub use combinator::{
    all, best, bind, both, chain, either, keep_left, keep_right, once_or_more, or_default,
    or_value, plus_many, select, select_opt, zero_or_more,
};
pub use error::GrammarError;
pub use input::Input;
pub use parser::{failure, item, satisfy, success, success_with, IntoParser, Parser};
pub use syntax::ParseNode;
pub use text::{boolean, digits, double, integer, string};
