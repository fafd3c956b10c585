//! Compile a small arithmetic grammar at runtime and walk the parse
//! trees it produces.
//!
//! Run with: `cargo run --example bnf_calculator`

use sorex::{from_bnf, ParseNode};

const GRAMMAR: &str = "\
<expr>  ::= <term> | <term> '+' <expr> | <term> '-' <expr>
<term>  ::= <digit> | <digit> <term>
<digit> ::= '0' | '1' | '2' | '3' | '4' | '5' | '6' | '7' | '8' | '9'";

fn evaluate(node: &ParseNode) -> i64 {
    match node.name() {
        Some("digit") => node.show().parse().unwrap_or(0),
        Some("term") => node.show().parse().unwrap_or(0),
        Some("expr") => {
            let children = node.children();
            if children.len() == 3 {
                let left = evaluate(&children[0]);
                let right = evaluate(&children[2]);
                match children[1].show().as_str() {
                    "+" => left + right,
                    _ => left - right,
                }
            } else {
                evaluate(&children[0])
            }
        }
        _ => 0,
    }
}

fn main() {
    let parser = from_bnf(GRAMMAR, "expr").expect("grammar is well formed");

    for input in ["12+34", "100-58+1", "7", "2+2trailing"] {
        match parser.parse_str(input) {
            Some((tree, rest)) => {
                println!(
                    "{input:>12} => {} (consumed {:?}, rest {rest:?})",
                    evaluate(&tree),
                    tree.show(),
                );
            }
            None => println!("{input:>12} => no parse"),
        }
    }
}
