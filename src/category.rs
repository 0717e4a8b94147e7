//! Category handles for fine-grained error matching.
//!
//! A [`Category`] names a subset of the operating-system errors that
//! `std::io` operations produce. Each category owns exactly one matching
//! rule (a reason-code set, a message pattern, or an arbitrary predicate)
//! and is immutable once constructed, so handles can be shared read-only
//! across threads.

use std::fmt;
use std::io;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while constructing a category.
#[derive(Error, Debug)]
pub enum CategoryError {
    /// The message pattern is not a valid regular expression.
    #[error("invalid message pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// The matching rule a category applies to an error value.
enum Rule {
    /// Arbitrary predicate over the error value.
    Predicate(Box<dyn Fn(&io::Error) -> bool + Send + Sync>),
    /// Membership of the raw OS reason code in a fixed set.
    Codes(Vec<i32>),
    /// Regex match against the rendered error message.
    Message(Regex),
}

/// A named, predicate-defined subset of operating-system errors.
///
/// Categories never wrap or alter the errors they match; they only decide
/// membership. Evaluation is pure and idempotent: matching the same error
/// twice yields the same answer and leaves both the error and the category
/// untouched.
pub struct Category {
    /// Display name, used in diagnostics; carries no matching semantics.
    name: String,
    /// Documentation string, exposed for introspection.
    doc: String,
    rule: Rule,
}

impl Category {
    /// Creates a category from an arbitrary predicate.
    ///
    /// The predicate must be pure: no side effects on the error value or on
    /// global state. Predicates that inspect the raw OS code should treat
    /// an absent code as non-membership rather than panicking.
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&io::Error) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            doc: String::new(),
            rule: Rule::Predicate(Box::new(predicate)),
        }
    }

    /// Creates a category matching a fixed set of raw OS reason codes.
    ///
    /// An error that carries no raw OS code never matches.
    pub fn of_codes(name: impl Into<String>, codes: impl Into<Vec<i32>>) -> Self {
        Self {
            name: name.into(),
            doc: String::new(),
            rule: Rule::Codes(codes.into()),
        }
    }

    /// Creates a category matching the rendered error message against a
    /// regular expression.
    ///
    /// The pattern is unanchored (`Regex::is_match` semantics); anchor with
    /// `^` to match from the start of the message.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError::InvalidPattern`] if the pattern does not
    /// compile.
    pub fn matching_message(
        name: impl Into<String>,
        pattern: &str,
    ) -> Result<Self, CategoryError> {
        Ok(Self::matching_regex(name, Regex::new(pattern)?))
    }

    /// Creates a message-matching category from a pre-compiled regex.
    pub fn matching_regex(name: impl Into<String>, regex: Regex) -> Self {
        Self {
            name: name.into(),
            doc: String::new(),
            rule: Rule::Message(regex),
        }
    }

    /// Attaches a documentation string to the category.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the documentation string (empty if none was supplied).
    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// Returns the raw OS reason codes this category is defined over, if it
    /// is a code-set category.
    pub fn codes(&self) -> Option<&[i32]> {
        match &self.rule {
            Rule::Codes(codes) => Some(codes),
            _ => None,
        }
    }

    /// Decides whether the given error belongs to this category.
    pub fn matches(&self, error: &io::Error) -> bool {
        match &self.rule {
            Rule::Predicate(predicate) => predicate(error),
            Rule::Codes(codes) => error
                .raw_os_error()
                .is_some_and(|code| codes.contains(&code)),
            Rule::Message(regex) => regex.is_match(&error.to_string()),
        }
    }

    /// Returns a serializable snapshot of the introspection surface.
    pub fn info(&self) -> CategoryInfo {
        CategoryInfo {
            name: self.name.clone(),
            doc: self.doc.clone(),
            codes: self.codes().map(<[i32]>::to_vec),
        }
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Category")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Introspection data for a category, for diagnostics and tooling.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    /// Display name.
    pub name: String,
    /// Documentation string.
    pub doc: String,
    /// Reason codes, present only for code-set categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codes: Option<Vec<i32>>,
}
