//! Error types for the typed grammar surface.
//!
//! Parsing itself never produces an error value: a parser either
//! yields a value with the unread suffix, or `None`. The errors here
//! are reported by [`Grammar`](crate::bnf::Grammar) when a grammar
//! text is loaded or validated eagerly.

use compact_str::CompactString;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// The grammar text is not valid BNF; nothing beyond insignificant
    /// whitespace may remain after the last rule.
    #[error("malformed grammar text")]
    Malformed,

    /// The grammar text contains no rules.
    #[error("grammar contains no rules")]
    Empty,

    /// The requested entry rule is not defined.
    #[error("rule <{rule}> is not defined")]
    MissingRule { rule: CompactString },

    /// A rule's right hand side references a rule that is not defined.
    #[error("rule <{referenced_from}> references undefined rule <{rule}>")]
    UndefinedRule {
        rule: CompactString,
        referenced_from: CompactString,
    },
}
