//! Regular-expression rule
//!
//! [`Pattern`] requires the whole text of its subject to match a regular
//! expression. Patterns are compiled once, at construction.

use std::fmt;

use regex::Regex;

use crate::error::{ConfigError, ConfigResult};
use crate::foundation::{Subject, Validate, ValidatorBase};
use crate::macros::leaf_rule;
use crate::message::{Message, Param};
use crate::messages::Messages;
use crate::validators::Leaf;

/// Code of the default [`Pattern`] message.
pub const PATTERN_CODE: &str = "pattern";

/// Validates that a value fully matches a regular expression.
///
/// An absent subject fails.
///
/// # Examples
///
/// ```rust
/// use valtree::prelude::*;
///
/// let zip = Pattern::<str>::new(r"\d{5}")?;
/// assert!(zip.evaluate("12345").is_empty());
/// assert!(zip.evaluate("12345-6789").has_errors());
/// assert!(Pattern::<str>::new("(").is_err());
/// # Ok::<(), valtree::ConfigError>(())
/// ```
pub struct Pattern<C: ?Sized, S: ?Sized = C> {
    leaf: Leaf<C, S>,
    pattern: String,
    regex: Regex,
}

leaf_rule!(Pattern);

impl<T: ?Sized> Pattern<T, T> {
    /// Checks the context itself against `pattern`.
    ///
    /// Fails with [`ConfigError::InvalidPattern`] if `pattern` does not compile.
    pub fn new(pattern: impl Into<String>) -> ConfigResult<Self> {
        Self::with_base(ValidatorBase::new(), pattern.into())
    }
}

impl<C: ?Sized, S: ?Sized> Pattern<C, S> {
    /// Checks the value `extractor` derives from the context against `pattern`.
    pub fn on<F>(extractor: F, pattern: impl Into<String>) -> ConfigResult<Self>
    where
        F: Fn(&C) -> &S + Send + Sync + 'static,
    {
        Self::with_base(ValidatorBase::on(extractor), pattern.into())
    }

    fn with_base(base: ValidatorBase<C, S>, pattern: String) -> ConfigResult<Self> {
        let regex = Regex::new(&format!("^(?:{pattern})$"))
            .map_err(|source| ConfigError::invalid_pattern(pattern.as_str(), source))?;

        Ok(Self {
            leaf: Leaf::new(base, Self::default_message()),
            pattern,
            regex,
        })
    }

    /// `pattern`: "Value does not match the required pattern".
    pub fn default_message() -> Message {
        Message::global(PATTERN_CODE, "Value does not match the required pattern")
    }

    /// The pattern as supplied.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The compiled, fully anchored expression.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl<C: ?Sized, S: Subject + ?Sized> Pattern<C, S> {
    /// Returns `true` if the whole text of `subject` matches.
    pub fn accepts(&self, subject: &S) -> bool {
        subject
            .as_text()
            .is_some_and(|text| self.regex.is_match(&text))
    }
}

impl<C, S> Validate for Pattern<C, S>
where
    C: fmt::Debug + ?Sized,
    S: Subject + ?Sized,
{
    type Input = C;

    fn validate<'m>(&self, input: &C, messages: &'m mut Messages) -> &'m mut Messages {
        self.leaf
            .check(input, messages, |s| self.accepts(s), Param::subject::<S>)
    }
}

impl<C: ?Sized, S: ?Sized> Clone for Pattern<C, S> {
    fn clone(&self) -> Self {
        Self {
            leaf: self.leaf.clone(),
            pattern: self.pattern.clone(),
            regex: self.regex.clone(),
        }
    }
}

impl<C: ?Sized, S: ?Sized> fmt::Debug for Pattern<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("pattern", &self.pattern)
            .field("leaf", &self.leaf)
            .finish()
    }
}
