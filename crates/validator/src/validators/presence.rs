//! Presence rule
//!
//! [`Required`] fails when its subject is absent, i.e. when the subject's
//! [`Subject`] view yields no text (`None` for an `Option`).

use std::fmt;

use crate::foundation::{Subject, Validate, ValidatorBase};
use crate::macros::leaf_rule;
use crate::message::{Message, Param};
use crate::messages::Messages;
use crate::validators::Leaf;

/// Code of the default [`Required`] message.
pub const REQUIRED_CODE: &str = "required";

/// Validates that a value is present.
///
/// # Examples
///
/// ```rust
/// use valtree::prelude::*;
///
/// let validator = Required::<Option<String>>::new();
/// assert!(validator.evaluate(&Some("hello".to_string())).is_empty());
/// assert!(validator.evaluate(&None).has_errors());
/// ```
pub struct Required<C: ?Sized, S: ?Sized = C> {
    leaf: Leaf<C, S>,
}

leaf_rule!(Required);

impl<T: ?Sized> Required<T, T> {
    /// Checks the context itself.
    pub fn new() -> Self {
        Self {
            leaf: Leaf::new(ValidatorBase::new(), Self::default_message()),
        }
    }
}

impl<C: ?Sized, S: ?Sized> Required<C, S> {
    /// Checks the value `extractor` derives from the context.
    pub fn on<F>(extractor: F) -> Self
    where
        F: Fn(&C) -> &S + Send + Sync + 'static,
    {
        Self {
            leaf: Leaf::new(ValidatorBase::on(extractor), Self::default_message()),
        }
    }

    /// `required`: "Value is required".
    pub fn default_message() -> Message {
        Message::global(REQUIRED_CODE, "Value is required")
    }
}

impl<C: ?Sized, S: Subject + ?Sized> Required<C, S> {
    /// Returns `true` if `subject` is present.
    pub fn accepts(&self, subject: &S) -> bool {
        !subject.is_absent()
    }
}

impl<C, S> Validate for Required<C, S>
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

impl<T: ?Sized> Default for Required<T, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized, S: ?Sized> Clone for Required<C, S> {
    fn clone(&self) -> Self {
        Self {
            leaf: self.leaf.clone(),
        }
    }
}

impl<C: ?Sized, S: ?Sized> fmt::Debug for Required<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Required").field("leaf", &self.leaf).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    struct Profile {
        email: Option<String>,
    }

    #[test]
    fn present_value_passes() {
        let validator = Required::<Option<u32>>::new();
        assert!(validator.evaluate(&Some(0)).is_empty());
    }

    #[test]
    fn empty_string_is_present() {
        let validator = Required::<str>::new();
        assert!(validator.evaluate("").is_empty());
    }

    #[test]
    fn absent_value_fails_with_default_message() {
        let validator = Required::on(|p: &Profile| &p.email);
        let messages = validator.evaluate(&Profile { email: None });

        assert!(messages.has_error_like(&Required::<str>::default_message()));
        let emitted = &messages.errors()[0];
        assert_eq!(emitted.params()[0].text(), "Profile { email: None }");
        assert!(emitted.params()[1].is_null());
        assert_eq!(emitted.rendered().as_deref(), Some("Value is required"));
    }

    #[test]
    fn custom_message_replaces_default() {
        let message = Message::field("email", "email.required", "Email is required");
        let validator = Required::on(|p: &Profile| &p.email).with_message(message.clone());
        let messages = validator.evaluate(&Profile { email: None });
        assert!(messages.has_error_like(&message));
        assert!(!messages.has_error_like(&Required::<str>::default_message()));
    }
}
