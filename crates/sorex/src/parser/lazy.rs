//! One-shot deferred construction of parsers.

use std::sync::OnceLock;

use super::Parser;

/// A parser factory memoised into a one-shot cell.
///
/// The factory is invoked at most once, even under concurrent first
/// force; every later force observes the published parser. The
/// published parser itself is immutable.
pub(super) struct Deferred<T> {
    factory: Box<dyn Fn() -> Parser<T> + Send + Sync>,
    cell: OnceLock<Parser<T>>,
}

impl<T: 'static> Deferred<T> {
    pub(super) fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Parser<T> + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(factory),
            cell: OnceLock::new(),
        }
    }

    /// Force the factory, publishing its result on the first call.
    pub(super) fn force(&self) -> &Parser<T> {
        self.cell.get_or_init(|| (self.factory)())
    }
}
