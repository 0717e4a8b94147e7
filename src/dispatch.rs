//! First-match-wins dispatch over ordered category handles.
//!
//! This is the sequential error-handling idiom made explicit: the caller
//! lists candidate categories in order, the first one whose rule matches
//! the in-flight error runs its handler, and an error matching no
//! candidate propagates to the caller unchanged.

use std::io;

use tracing::trace;

use crate::category::Category;

/// Starts a dispatch over an in-flight error.
///
/// Arms added with [`Dispatch::on`] are tried in the order they are listed;
/// narrower categories should come before broader ones when both could
/// match.
///
/// # Examples
///
/// ```
/// use errgrain::{catalog, dispatch};
///
/// let err = std::io::Error::from_raw_os_error(libc::ENOENT);
/// let msg = dispatch(err)
///     .on(catalog::file_not_found(), |_| "missing".to_string())
///     .on(catalog::connection(), |_| "network trouble".to_string())
///     .finish()
///     .unwrap_or_else(|e| format!("unhandled: {e}"));
/// assert_eq!(msg, "missing");
/// ```
pub fn dispatch<T>(error: io::Error) -> Dispatch<T> {
    Dispatch {
        error: Some(error),
        outcome: None,
    }
}

/// An in-flight error being tested against an ordered list of categories.
///
/// The error is owned by the dispatcher until either a matching handler
/// consumes it or [`Dispatch::finish`] hands it back to the caller. It is
/// never cloned or wrapped, so the value the caller observes on the
/// unmatched path is the very value the failed operation produced.
#[derive(Debug)]
pub struct Dispatch<T> {
    error: Option<io::Error>,
    outcome: Option<T>,
}

impl<T> Dispatch<T> {
    /// Tests the in-flight error against `category`, running `handler` on a
    /// match. Arms listed after a decided match are skipped without their
    /// predicates being evaluated.
    ///
    /// # Panics
    ///
    /// Panics if the dispatcher holds neither an in-flight error nor a
    /// decided outcome. That state is unreachable through this API and
    /// indicates an arm being driven outside a real propagation episode;
    /// it is never reported as a non-match.
    pub fn on<F>(mut self, category: &Category, handler: F) -> Self
    where
        F: FnOnce(io::Error) -> T,
    {
        if self.outcome.is_some() {
            return self;
        }
        let Some(error) = self.error.take() else {
            panic!("dispatch arm evaluated with no error in flight");
        };
        if category.matches(&error) {
            trace!(category = category.name(), "in-flight error matched");
            self.outcome = Some(handler(error));
        } else {
            trace!(category = category.name(), "no match, trying next arm");
            self.error = Some(error);
        }
        self
    }

    /// Ends the dispatch.
    ///
    /// Returns the matched handler's value, or the original error unchanged
    /// when no listed category matched.
    pub fn finish(self) -> Result<T, io::Error> {
        match (self.outcome, self.error) {
            (Some(value), _) => Ok(value),
            (None, Some(error)) => Err(error),
            (None, None) => panic!("dispatch finished with no error in flight"),
        }
    }
}

/// Returns the first category in `candidates` that the error belongs to.
///
/// This is the classify-then-branch form of [`dispatch`], for callers that
/// want to pick a category without consuming the error.
pub fn classify<'c>(error: &io::Error, candidates: &[&'c Category]) -> Option<&'c Category> {
    let found = candidates.iter().find(|c| c.matches(error)).copied();
    match found {
        Some(category) => trace!(category = category.name(), "classified"),
        None => trace!("no candidate category matched"),
    }
    found
}
