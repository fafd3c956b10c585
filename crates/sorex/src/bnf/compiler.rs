//! Compilation of the rule map into a live parser.
//!
//! Every rule reference compiles to a deferred parser that looks the
//! rule up when first forced. This is what lets forward and cyclic
//! references compile: construction never recurses into referenced
//! rules, and resolution happens at parse time. A reference to a rule
//! the map does not contain becomes a parser that always fails.

use std::sync::Arc;

use compact_str::CompactString;

use crate::combinator::{all, best, select};
use crate::parser::{failure, Parser};
use crate::syntax::ParseNode;
use crate::text::string;

use super::rules::{Alternative, Alternatives, RuleMap, Term};

/// Compile the named rule into a parser producing a rule node.
pub(super) fn compile_rule(map: Arc<RuleMap>, name: CompactString) -> Parser<ParseNode> {
    Parser::lazy(move || match map.get(name.as_str()) {
        Some(alternatives) => compile_expression(&map, &name, alternatives),
        None => failure(),
    })
}

/// An expression is the longest-matching of its alternatives, tagged
/// with the rule name. Classical BNF alternation is unordered, so the
/// order-sensitive first-match strategy is not used here.
fn compile_expression(
    map: &Arc<RuleMap>,
    name: &CompactString,
    alternatives: &Alternatives,
) -> Parser<ParseNode> {
    let candidates: Vec<Parser<Vec<ParseNode>>> = alternatives
        .iter()
        .map(|alternative| compile_alternative(map, alternative))
        .collect();
    let name = name.clone();
    select(best(candidates), move |children| {
        ParseNode::rule(name.clone(), children)
    })
}

/// An alternative is the concatenation of its terms.
fn compile_alternative(map: &Arc<RuleMap>, alternative: &Alternative) -> Parser<Vec<ParseNode>> {
    let terms: Vec<Parser<ParseNode>> = alternative
        .iter()
        .map(|term| compile_term(map, term))
        .collect();
    all(terms)
}

fn compile_term(map: &Arc<RuleMap>, term: &Term) -> Parser<ParseNode> {
    match term {
        Term::Literal(text) => select(string(text), |matched| ParseNode::literal(matched)),
        Term::Rule(rule) => compile_rule(Arc::clone(map), rule.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn map_of(rules: Vec<(&str, Alternatives)>) -> Arc<RuleMap> {
        Arc::new(RuleMap::from_rules(
            rules
                .into_iter()
                .map(|(name, alts)| (CompactString::from(name), alts)),
        ))
    }

    #[test]
    fn literal_terms_produce_literal_leaves() {
        let map = map_of(vec![(
            "greeting",
            smallvec![smallvec![
                Term::Literal("hi".into()),
                Term::Literal("!".into())
            ]],
        )]);
        let parser = compile_rule(map, "greeting".into());
        let (tree, rest) = parser.parse_str("hi!there").unwrap();
        assert_eq!(rest, "there");
        assert_eq!(
            tree,
            ParseNode::rule(
                "greeting",
                vec![ParseNode::literal("hi"), ParseNode::literal("!")]
            )
        );
    }

    #[test]
    fn alternation_is_longest_match() {
        // With first-match semantics the single 'a' would win and the
        // remainder would be "ab".
        let map = map_of(vec![(
            "word",
            smallvec![
                smallvec![Term::Literal("a".into())],
                smallvec![Term::Literal("aab".into())],
                smallvec![Term::Literal("aa".into())],
            ],
        )]);
        let parser = compile_rule(map, "word".into());
        let (tree, rest) = parser.parse_str("aab").unwrap();
        assert_eq!(rest, "");
        assert_eq!(tree.show(), "aab");
    }

    #[test]
    fn undefined_rule_fails_at_parse_time_not_compile_time() {
        let map = map_of(vec![(
            "start",
            smallvec![smallvec![Term::Rule("missing".into())]],
        )]);
        // Compilation succeeds; the lookup is deferred.
        let parser = compile_rule(map, "start".into());
        assert!(parser.parse_str("anything").is_none());
    }

    #[test]
    fn undefined_entry_rule_always_fails() {
        let map = map_of(vec![]);
        let parser = compile_rule(map, "nowhere".into());
        assert!(parser.parse_str("").is_none());
    }

    #[test]
    fn cyclic_references_compile_and_parse() {
        // a ::= 'x' a | 'x'
        let map = map_of(vec![(
            "a",
            smallvec![
                smallvec![Term::Literal("x".into()), Term::Rule("a".into())],
                smallvec![Term::Literal("x".into())],
            ],
        )]);
        let parser = compile_rule(map, "a".into());
        let (tree, rest) = parser.parse_str("xxxy").unwrap();
        assert_eq!(rest, "y");
        assert_eq!(tree.show(), "xxx");
    }

    #[test]
    fn builtin_eol_rule_is_compilable() {
        let map = map_of(vec![]);
        let parser = compile_rule(map, RuleMap::EOL.into());
        let (tree, rest) = parser.parse_str("\r\nrest").unwrap();
        assert_eq!(rest, "rest");
        assert_eq!(tree.show(), "\r\n");
    }
}
