//! # Combinator Module
//!
//! Functions which take parsers and build new ones.
//!
//! ## Overview
//!
//! - **Sequencing**: [`both`], [`bind`], [`select`], [`keep_left`],
//!   [`keep_right`]
//! - **Alternation**: [`either`] (first match), [`best`] (longest
//!   match)
//! - **Repetition**: [`zero_or_more`], [`once_or_more`],
//!   [`plus_many`], [`all`], [`chain`]
//! - **Defaults**: [`or_default`], [`or_value`]
//!
//! Every combinator accepts sub-parsers through [`IntoParser`], so a
//! `Parser`, a `&Parser`, or a zero-argument factory all work; factory
//! arguments are stored as deferred parsers and never forced during
//! construction. Definitions may therefore refer to parsers that do
//! not exist yet, which is what makes mutual and self reference
//! expressible.
//!
//! None of the combinators detects left recursion. A definition that
//! consumes nothing before recursing will recurse until the stack is
//! exhausted.

use crate::input::Input;
use crate::parser::{IntoParser, Parser};

/// Run `p`, discard its value, then run `q` on the remainder and yield
/// `q`'s value. Failure of either is failure of the composite.
///
/// ```
/// use sorex::{both, text};
///
/// let p = both(text::char('<'), text::digits());
/// assert_eq!(p.parse_str("<42>"), Some(("42".to_string(), ">")));
/// ```
pub fn both<T, U, P, Q, PM, QM>(p: P, q: Q) -> Parser<U>
where
    T: 'static,
    U: 'static,
    P: IntoParser<T, PM>,
    Q: IntoParser<U, QM>,
{
    let p = p.into_parser();
    let q = q.into_parser();
    Parser::from_fn(move |input| {
        let (_, rest) = p.parse(input)?;
        q.parse(rest)
    })
}

/// Monadic bind: run `p` to get a value, feed it to `f` to obtain the
/// next parser, and run that on the remainder.
///
/// This is the most general sequencing form; every other sequencing
/// combinator can be expressed with it.
///
/// ```
/// use sorex::{bind, item, text};
///
/// // An opening bracket decides which closing bracket to expect.
/// let p = bind(item(), |open| match open {
///     '(' => text::char(')'),
///     _ => text::char(']'),
/// });
/// assert_eq!(p.parse_str("()"), Some((')', "")));
/// assert_eq!(p.parse_str("[]"), Some((']', "")));
/// assert_eq!(p.parse_str("(]"), None);
/// ```
pub fn bind<T, U, P, F, PM>(p: P, f: F) -> Parser<U>
where
    T: 'static,
    U: 'static,
    P: IntoParser<T, PM>,
    F: Fn(T) -> Parser<U> + Send + Sync + 'static,
{
    let p = p.into_parser();
    Parser::from_fn(move |input| {
        let (value, rest) = p.parse(input)?;
        f(value).parse(rest)
    })
}

/// Run `p` and project its value through `f`.
pub fn select<T, U, P, F, PM>(p: P, f: F) -> Parser<U>
where
    T: 'static,
    U: 'static,
    P: IntoParser<T, PM>,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    let p = p.into_parser();
    Parser::from_fn(move |input| {
        let (value, rest) = p.parse(input)?;
        Some((f(value), rest))
    })
}

/// Run `p` and project its value through `f`, turning a `None`
/// projection into parse failure.
///
/// Useful when the projection itself can reject, e.g. numeric
/// conversion of collected digits.
pub fn select_opt<T, U, P, F, PM>(p: P, f: F) -> Parser<U>
where
    T: 'static,
    U: 'static,
    P: IntoParser<T, PM>,
    F: Fn(T) -> Option<U> + Send + Sync + 'static,
{
    let p = p.into_parser();
    Parser::from_fn(move |input| {
        let (value, rest) = p.parse(input)?;
        f(value).map(|mapped| (mapped, rest))
    })
}

/// Sequence `p` then `q`, yielding `p`'s value.
pub fn keep_left<T, U, P, Q, PM, QM>(p: P, q: Q) -> Parser<T>
where
    T: 'static,
    U: 'static,
    P: IntoParser<T, PM>,
    Q: IntoParser<U, QM>,
{
    let p = p.into_parser();
    let q = q.into_parser();
    Parser::from_fn(move |input| {
        let (value, rest) = p.parse(input)?;
        let (_, rest) = q.parse(rest)?;
        Some((value, rest))
    })
}

/// Sequence `p` then `q`, yielding `q`'s value. Identical to [`both`].
pub fn keep_right<T, U, P, Q, PM, QM>(p: P, q: Q) -> Parser<U>
where
    T: 'static,
    U: 'static,
    P: IntoParser<T, PM>,
    Q: IntoParser<U, QM>,
{
    both(p, q)
}

/// First-match alternation: run `p`; if it fails, run `q` on the
/// original input.
///
/// Failures are total, so `q` always sees the input exactly as `p`
/// did.
///
/// ```
/// use sorex::{either, text};
///
/// let p = either(text::string("ab"), text::string("a"));
/// assert_eq!(p.parse_str("ab"), Some(("ab".to_string(), "")));
/// assert_eq!(p.parse_str("ax"), Some(("a".to_string(), "x")));
/// ```
pub fn either<T, P, Q, PM, QM>(p: P, q: Q) -> Parser<T>
where
    T: 'static,
    P: IntoParser<T, PM>,
    Q: IntoParser<T, QM>,
{
    let p = p.into_parser();
    let q = q.into_parser();
    Parser::from_fn(move |input| p.parse(input).or_else(|| q.parse(input)))
}

/// Longest-match alternation: run every candidate on the original
/// input and yield the result of the one that consumed the most.
///
/// Ties go to the earliest candidate in iteration order. Fails only if
/// every candidate fails.
///
/// Unlike [`either`], this always runs all candidates, so it is
/// expensive; prefer `either` when the alternatives cannot overlap.
pub fn best<T, P, M>(candidates: impl IntoIterator<Item = P>) -> Parser<T>
where
    T: 'static,
    P: IntoParser<T, M>,
{
    let candidates: Vec<Parser<T>> = candidates
        .into_iter()
        .map(|candidate| candidate.into_parser())
        .collect();
    Parser::from_fn(move |input| {
        let mut winner: Option<(T, Input<'_>)> = None;
        for candidate in &candidates {
            if let Some((value, rest)) = candidate.parse(input) {
                let improves = winner
                    .as_ref()
                    .map_or(true, |(_, shortest)| rest.len() < shortest.len());
                if improves {
                    winner = Some((value, rest));
                }
            }
        }
        winner
    })
}

/// Run the parsers in order, collecting their values. Fails if any
/// parser fails; the produced sequence has exactly one value per
/// parser.
pub fn all<T, P, M>(parsers: impl IntoIterator<Item = P>) -> Parser<Vec<T>>
where
    T: 'static,
    P: IntoParser<T, M>,
{
    let parsers: Vec<Parser<T>> = parsers
        .into_iter()
        .map(|parser| parser.into_parser())
        .collect();
    Parser::from_fn(move |input| {
        let mut values = Vec::with_capacity(parsers.len());
        let mut rest = input;
        for parser in &parsers {
            let (value, next) = parser.parse(rest)?;
            values.push(value);
            rest = next;
        }
        Some((values, rest))
    })
}

/// Run `first` once, then `many` (a parser producing a sequence),
/// prepending `first`'s value to the sequence.
pub fn plus_many<T, P, Q, PM, QM>(first: P, many: Q) -> Parser<Vec<T>>
where
    T: 'static,
    P: IntoParser<T, PM>,
    Q: IntoParser<Vec<T>, QM>,
{
    let first = first.into_parser();
    let many = many.into_parser();
    Parser::from_fn(move |input| {
        let (head, rest) = first.parse(input)?;
        let (tail, rest) = many.parse(rest)?;
        let mut values = Vec::with_capacity(tail.len() + 1);
        values.push(head);
        values.extend(tail);
        Some((values, rest))
    })
}

/// Apply `p` as many times as it succeeds, collecting the values.
/// Never fails; zero matches produce the empty sequence.
///
/// Greedy: after it returns, `p` fails on the remainder. A `p` that
/// succeeds without consuming input will loop forever here.
pub fn zero_or_more<T, P, PM>(p: P) -> Parser<Vec<T>>
where
    T: 'static,
    P: IntoParser<T, PM>,
{
    let p = p.into_parser();
    Parser::from_fn(move |input| {
        let mut values = Vec::new();
        let mut rest = input;
        while let Some((value, next)) = p.parse(rest) {
            values.push(value);
            rest = next;
        }
        Some((values, rest))
    })
}

/// Apply `p` at least once, then as many more times as it succeeds.
pub fn once_or_more<T, P, PM>(p: P) -> Parser<Vec<T>>
where
    T: 'static,
    P: IntoParser<T, PM>,
{
    let p = p.into_parser();
    plus_many(p.clone(), zero_or_more(p))
}

/// One or more occurrences of `p` separated by `sep`, yielding the
/// `p` values with the separators discarded.
///
/// ```
/// use sorex::{chain, integer, text};
///
/// let csv = chain(integer(), text::char(','));
/// assert_eq!(csv.parse_str("1,2,3;4"), Some((vec![1, 2, 3], ";4")));
/// ```
pub fn chain<T, S, P, Q, PM, QM>(p: P, sep: Q) -> Parser<Vec<T>>
where
    T: 'static,
    S: 'static,
    P: IntoParser<T, PM>,
    Q: IntoParser<S, QM>,
{
    let p = p.into_parser();
    let sep = sep.into_parser();
    plus_many(p.clone(), zero_or_more(keep_right(sep, p)))
}

/// Try `p`; on failure produce the type's default value without
/// consuming anything. Never fails.
pub fn or_default<T, P, PM>(p: P) -> Parser<T>
where
    T: Default + 'static,
    P: IntoParser<T, PM>,
{
    let p = p.into_parser();
    Parser::from_fn(move |input| p.parse(input).or_else(|| Some((T::default(), input))))
}

/// Try `p`; on failure produce a clone of `default` without consuming
/// anything. Never fails.
pub fn or_value<T, P, PM>(p: P, default: T) -> Parser<T>
where
    T: Clone + Send + Sync + 'static,
    P: IntoParser<T, PM>,
{
    let p = p.into_parser();
    Parser::from_fn(move |input| {
        p.parse(input)
            .or_else(|| Some((default.clone(), input)))
    })
}
