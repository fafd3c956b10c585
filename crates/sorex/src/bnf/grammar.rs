//! The parser for BNF grammar texts, written in the crate's own
//! combinators.
//!
//! Accepted syntax:
//!
//! ```text
//! Syntax      := Rule (OptWS EOL Rule)*
//! Rule        := RuleDef OptWS Expression
//! RuleDef     := RuleName "::="
//! RuleName    := OptWS '<' [A-Za-z0-9-]+ '>' OptWS
//! Expression  := List (OptWS '|' OptWS List)*
//! List        := Term (OptWS Term)*
//! Term        := Literal | RuleName
//! Literal     := ''' [^']* ''' | '"' [^"]* '"'
//! OptWS       := (whitespace except \n, \r)*
//! EOL         := "\n" | "\r\n"
//! ```
//!
//! Literals have no escape mechanism; a literal cannot contain its own
//! delimiter, though it may contain the other quote kind.

use compact_str::CompactString;

use crate::combinator::{
    bind, both, chain, either, keep_left, keep_right, once_or_more, plus_many, select,
    zero_or_more,
};
use crate::parser::{satisfy, Parser};
use crate::text::{char, string};

use super::rules::{Alternative, Alternatives, Term};

/// The full grammar text: one or more rules separated by line
/// terminators.
pub(super) fn rule_list() -> Parser<Vec<(CompactString, Alternatives)>> {
    chain(rule(), both(opt_ws(), eol()))
}

fn rule() -> Parser<(CompactString, Alternatives)> {
    bind(rule_def(), |name| {
        select(keep_right(opt_ws(), expression()), move |alternatives| {
            (name.clone(), alternatives)
        })
    })
}

fn rule_def() -> Parser<CompactString> {
    keep_left(rule_name(), string("::="))
}

fn rule_name() -> Parser<CompactString> {
    let body = select(
        once_or_more(satisfy(|c| c.is_ascii_alphanumeric() || c == '-')),
        |chars| chars.into_iter().collect::<CompactString>(),
    );
    keep_right(
        opt_ws(),
        keep_right(char('<'), keep_left(body, both(char('>'), opt_ws()))),
    )
}

fn expression() -> Parser<Alternatives> {
    let divider = keep_right(opt_ws(), keep_left(char('|'), opt_ws()));
    select(chain(term_sequence(), divider), |lists| {
        lists.into_iter().collect()
    })
}

fn term_sequence() -> Parser<Alternative> {
    let more = zero_or_more(keep_right(opt_ws(), term()));
    select(plus_many(term(), more), Alternative::from_vec)
}

fn term() -> Parser<Term> {
    either(
        select(literal(), Term::Literal),
        select(rule_name(), Term::Rule),
    )
}

fn literal() -> Parser<CompactString> {
    either(quoted('\''), quoted('"'))
}

fn quoted(delimiter: char) -> Parser<CompactString> {
    let body = select(zero_or_more(satisfy(move |c| c != delimiter)), |chars| {
        chars.into_iter().collect::<CompactString>()
    });
    keep_right(char(delimiter), keep_left(body, char(delimiter)))
}

fn opt_ws() -> Parser<Vec<char>> {
    zero_or_more(satisfy(is_inline_ws))
}

fn is_inline_ws(c: char) -> bool {
    c.is_whitespace() && c != '\n' && c != '\r'
}

fn eol() -> Parser<String> {
    either(string("\n"), string("\r\n"))
}
