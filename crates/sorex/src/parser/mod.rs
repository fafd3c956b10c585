//! # Parser Module
//!
//! The core [`Parser`] abstraction and the primitive parsers.
//!
//! ## Overview
//!
//! A `Parser<T>` is an opaque, shareable value wrapping a pure function
//! from an [`Input`] view to either a produced value of type `T` paired
//! with the unconsumed suffix, or failure. Failure is total: no partial
//! consumption is observable and no error object is produced.
//!
//! Parsers are reference counted and cheap to clone. The same parser
//! may be applied to any number of inputs, from any number of threads,
//! without observable state.
//!
//! ## Primitives
//!
//! - [`success`] / [`success_with`]: always succeed, consume nothing
//! - [`failure`]: always fails, consumes nothing
//! - [`item`]: the first character of nonempty input
//! - [`satisfy`]: the first character, filtered by a predicate
//!
//! ## Lazy construction
//!
//! [`Parser::lazy`] builds a parser from a zero-argument factory that
//! is forced on first use and memoised. Combinators accept factories
//! wherever they accept parsers (see [`IntoParser`]), which is what
//! makes mutually recursive definitions expressible: a combinator can
//! refer to a parser that does not exist yet at construction time.

mod lazy;

use std::fmt;
use std::sync::Arc;

use crate::combinator;
use crate::input::Input;

use lazy::Deferred;

type ParseFn<T> = dyn for<'a> Fn(Input<'a>) -> Option<(T, Input<'a>)> + Send + Sync;

/// A composable recursive-descent parser producing values of type `T`.
///
/// Cloning a `Parser` clones a handle, not the machinery behind it.
pub struct Parser<T> {
    run: Arc<ParseFn<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Parser(..)")
    }
}

impl<T: 'static> Parser<T> {
    /// Wrap a raw parse function.
    ///
    /// This is the escape hatch the primitives and combinators are
    /// built on. The function must uphold the parser contract: on
    /// success the returned view is a suffix of the argument view.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: for<'a> Fn(Input<'a>) -> Option<(T, Input<'a>)> + Send + Sync + 'static,
    {
        Self { run: Arc::new(f) }
    }

    /// Apply the parser to an input view.
    ///
    /// Returns the produced value and the unconsumed suffix on
    /// success, `None` on failure.
    #[must_use]
    pub fn parse<'a>(&self, input: Input<'a>) -> Option<(T, Input<'a>)> {
        (self.run)(input)
    }

    /// Convenience entry point: apply the parser to a full string and
    /// return the unread suffix as a string slice.
    #[must_use]
    pub fn parse_str<'a>(&self, input: &'a str) -> Option<(T, &'a str)> {
        self.parse(Input::new(input))
            .map(|(value, rest)| (value, rest.as_str()))
    }

    /// Defer construction of a parser until it is first used.
    ///
    /// The factory runs at most once, even when the first uses race on
    /// several threads; its result is cached for every later call.
    /// This is the indirection that lets rule definitions refer to one
    /// another cyclically without recursing at construction time.
    pub fn lazy<F>(factory: F) -> Self
    where
        F: Fn() -> Parser<T> + Send + Sync + 'static,
    {
        let deferred = Deferred::new(factory);
        Self::from_fn(move |input| deferred.force().parse(input))
    }

    /// Project the produced value through `f`. See [`combinator::select`].
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        combinator::select(self, f)
    }

    /// Monadic sequencing. See [`combinator::bind`].
    #[must_use]
    pub fn then<U, F>(self, f: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> Parser<U> + Send + Sync + 'static,
    {
        combinator::bind(self, f)
    }

    /// First-match alternation. See [`combinator::either`].
    #[must_use]
    pub fn or<Q, QM>(self, other: Q) -> Parser<T>
    where
        Q: IntoParser<T, QM>,
    {
        combinator::either(self, other)
    }
}

/// Always succeeds with a clone of `value`, consuming nothing.
pub fn success<T>(value: T) -> Parser<T>
where
    T: Clone + Send + Sync + 'static,
{
    Parser::from_fn(move |input| Some((value.clone(), input)))
}

/// Like [`success`], but the value is computed lazily on each
/// application.
pub fn success_with<T, F>(make: F) -> Parser<T>
where
    T: 'static,
    F: Fn() -> T + Send + Sync + 'static,
{
    Parser::from_fn(move |input| Some((make(), input)))
}

/// Always fails, consuming nothing.
#[must_use]
pub fn failure<T: 'static>() -> Parser<T> {
    Parser::from_fn(|_| None)
}

/// The first character of nonempty input. Fails on empty input.
#[must_use]
pub fn item() -> Parser<char> {
    Parser::from_fn(|input| input.pop())
}

/// The first character, provided it satisfies `pred`. Fails otherwise,
/// with no consumption observable.
pub fn satisfy<F>(pred: F) -> Parser<char>
where
    F: Fn(char) -> bool + Send + Sync + 'static,
{
    Parser::from_fn(move |input| match input.pop() {
        Some((c, rest)) if pred(c) => Some((c, rest)),
        _ => None,
    })
}

/// Marker for [`IntoParser`] conversions from parser values.
pub struct ByValue;

/// Marker for [`IntoParser`] conversions from parser references.
pub struct ByRef;

/// Marker for [`IntoParser`] conversions from zero-argument factories.
pub struct Factory;

/// Conversion of sub-parser arguments.
///
/// Every combinator that takes a sub-parser accepts any of:
///
/// - a `Parser<T>` by value,
/// - a `&Parser<T>` (cloned, handles are cheap),
/// - a zero-argument factory `Fn() -> Parser<T>`, canonicalised to the
///   deferred form via [`Parser::lazy`].
///
/// The `M` marker parameter distinguishes the blanket impls; it is
/// always inferred at the call site.
pub trait IntoParser<T, M> {
    fn into_parser(self) -> Parser<T>;
}

impl<T: 'static> IntoParser<T, ByValue> for Parser<T> {
    fn into_parser(self) -> Parser<T> {
        self
    }
}

impl<T: 'static> IntoParser<T, ByRef> for &Parser<T> {
    fn into_parser(self) -> Parser<T> {
        self.clone()
    }
}

impl<T, F> IntoParser<T, Factory> for F
where
    T: 'static,
    F: Fn() -> Parser<T> + Send + Sync + 'static,
{
    fn into_parser(self) -> Parser<T> {
        Parser::lazy(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn success_yields_value_without_consuming() {
        let p = success(42);
        assert_eq!(p.parse_str("abc"), Some((42, "abc")));
        assert_eq!(p.parse_str(""), Some((42, "")));
    }

    #[test]
    fn success_with_computes_value_per_application() {
        let counter = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&counter);
        let p = success_with(move || c.fetch_add(1, Ordering::SeqCst));
        assert_eq!(p.parse_str("x"), Some((0, "x")));
        assert_eq!(p.parse_str("x"), Some((1, "x")));
    }

    #[test]
    fn failure_never_succeeds() {
        let p = failure::<char>();
        assert_eq!(p.parse_str("abc"), None);
        assert_eq!(p.parse_str(""), None);
    }

    #[test]
    fn item_consumes_one_char() {
        assert_eq!(item().parse_str("abcd"), Some(('a', "bcd")));
        assert_eq!(item().parse_str(""), None);
    }

    #[test]
    fn satisfy_filters_the_first_char() {
        let digit = satisfy(|c| c.is_ascii_digit());
        assert_eq!(digit.parse_str("1a"), Some(('1', "a")));
        assert_eq!(digit.parse_str("a1"), None);
        assert_eq!(digit.parse_str(""), None);
    }

    #[test]
    fn lazy_factory_runs_at_most_once() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let p = Parser::lazy(move || {
            c.fetch_add(1, Ordering::SeqCst);
            item()
        });
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(p.parse_str("ab"), Some(('a', "b")));
        assert_eq!(p.parse_str("cd"), Some(('c', "d")));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn parsers_are_shareable_across_threads() {
        let p = satisfy(char::is_alphabetic);
        std::thread::scope(|scope| {
            for text in ["alpha", "beta", "gamma"] {
                let p = &p;
                scope.spawn(move || {
                    let (c, _) = p.parse_str(text).unwrap();
                    assert_eq!(c, text.chars().next().unwrap());
                });
            }
        });
    }

    #[test]
    fn parse_is_pure() {
        let p = item();
        let input = Input::new("xyz");
        assert_eq!(p.parse(input), p.parse(input));
    }
}
