//! Non-empty rule
//!
//! [`NotEmpty`] fails when its subject is absent or consists only of
//! whitespace.

use std::fmt;

use crate::foundation::{Subject, Validate, ValidatorBase};
use crate::macros::leaf_rule;
use crate::message::{Message, Param};
use crate::messages::Messages;
use crate::validators::Leaf;

/// Code of the default [`NotEmpty`] message.
pub const EMPTY_CODE: &str = "empty";

/// Validates that a value is present and not blank.
///
/// Surrounding whitespace is trimmed before the check.
///
/// # Examples
///
/// ```rust
/// use valtree::prelude::*;
///
/// let validator = NotEmpty::<str>::new();
/// assert!(validator.evaluate("x").is_empty());
/// assert!(validator.evaluate("   ").has_errors());
/// ```
pub struct NotEmpty<C: ?Sized, S: ?Sized = C> {
    leaf: Leaf<C, S>,
}

leaf_rule!(NotEmpty);

impl<T: ?Sized> NotEmpty<T, T> {
    /// Checks the context itself.
    pub fn new() -> Self {
        Self {
            leaf: Leaf::new(ValidatorBase::new(), Self::default_message()),
        }
    }
}

impl<C: ?Sized, S: ?Sized> NotEmpty<C, S> {
    /// Checks the value `extractor` derives from the context.
    pub fn on<F>(extractor: F) -> Self
    where
        F: Fn(&C) -> &S + Send + Sync + 'static,
    {
        Self {
            leaf: Leaf::new(ValidatorBase::on(extractor), Self::default_message()),
        }
    }

    /// `empty`: "Value is required and must not be empty".
    pub fn default_message() -> Message {
        Message::global(EMPTY_CODE, "Value is required and must not be empty")
    }
}

impl<C: ?Sized, S: Subject + ?Sized> NotEmpty<C, S> {
    /// Returns `true` if `subject` has non-whitespace text.
    pub fn accepts(&self, subject: &S) -> bool {
        subject
            .as_text()
            .is_some_and(|text| !text.trim().is_empty())
    }
}

impl<C, S> Validate for NotEmpty<C, S>
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

impl<T: ?Sized> Default for NotEmpty<T, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized, S: ?Sized> Clone for NotEmpty<C, S> {
    fn clone(&self) -> Self {
        Self {
            leaf: self.leaf.clone(),
        }
    }
}

impl<C: ?Sized, S: ?Sized> fmt::Debug for NotEmpty<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotEmpty").field("leaf", &self.leaf).finish()
    }
}
