//! Core traits for the validation system
//!
//! This module defines the contract every validator in a tree implements.

use std::sync::Arc;

use crate::combinators::field::Field;
use crate::combinators::when::When;
use crate::messages::Messages;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// A validator inspects `input` and appends zero or more messages to
/// `messages`, then hands the same collection back so calls can be chained.
/// A failing rule is reported as a message, never as an `Err` or a panic.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```rust
/// use valtree::{Message, Messages, Validate};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate<'m>(&self, input: &str, messages: &'m mut Messages) -> &'m mut Messages {
///         if input.contains(' ') {
///             messages.add_error(Message::global("spaces", "Must not contain spaces"));
///         }
///         messages
///     }
/// }
///
/// let mut messages = Messages::new();
/// NoSpaces.validate("a b", &mut messages);
/// assert!(messages.has_errors());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates `input`, appending any findings to `messages`.
    ///
    /// Returns the collection that was passed in.
    fn validate<'m>(&self, input: &Self::Input, messages: &'m mut Messages) -> &'m mut Messages;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate<'m>(&self, input: &Self::Input, messages: &'m mut Messages) -> &'m mut Messages {
        (**self).validate(input, messages)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate<'m>(&self, input: &Self::Input, messages: &'m mut Messages) -> &'m mut Messages {
        (**self).validate(input, messages)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Input = V::Input;

    fn validate<'m>(&self, input: &Self::Input, messages: &'m mut Messages) -> &'m mut Messages {
        (**self).validate(input, messages)
    }
}

/// Type-erased validator, as stored by [`Composite`](crate::combinators::Composite).
pub type BoxValidator<T> = Box<dyn Validate<Input = T> + Send + Sync>;

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing decorator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
pub trait ValidateExt: Validate + Sized {
    /// Runs this validator only when `condition` accepts the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtree::prelude::*;
    ///
    /// struct User { name: String, active: bool }
    ///
    /// let validator = NotEmpty::<String>::new()
    ///     .field(|u: &User| &u.name)
    ///     .when(|u: &User| u.active);
    ///
    /// let idle = User { name: String::new(), active: false };
    /// let active = User { name: String::new(), active: true };
    /// assert!(validator.evaluate(&idle).is_empty());
    /// assert!(validator.evaluate(&active).has_errors());
    /// ```
    fn when<C>(self, condition: C) -> When<Self, C>
    where
        C: Fn(&Self::Input) -> bool,
    {
        When::new(self, condition)
    }

    /// Validates the value `accessor` extracts from a parent object.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtree::prelude::*;
    ///
    /// struct User { name: String }
    ///
    /// let validator = NotEmpty::<String>::new().field(|u: &User| &u.name);
    /// assert!(validator.evaluate(&User { name: String::new() }).has_errors());
    /// ```
    fn field<T, F>(self, accessor: F) -> Field<T, Self::Input, Self, F>
    where
        F: Fn(&T) -> &Self::Input,
    {
        Field::new(self, accessor)
    }

    /// Erases the concrete type, for storage in a composite.
    fn boxed(self) -> BoxValidator<Self::Input>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }

    /// Validates `input` against a fresh collection and returns it.
    fn evaluate(&self, input: &Self::Input) -> Messages {
        let mut messages = Messages::new();
        self.validate(input, &mut messages);
        messages
    }
}

impl<T: Validate> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;
    use pretty_assertions::assert_eq;

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate<'m>(&self, _input: &str, messages: &'m mut Messages) -> &'m mut Messages {
            messages.add_error(Message::global("always_fails", "Always fails"))
        }
    }

    #[test]
    fn returns_the_collection_passed_in() {
        let mut messages = Messages::new();
        let before: *const Messages = &messages;
        let returned = AlwaysFails.validate("x", &mut messages);
        assert!(std::ptr::eq(returned, before));
    }

    #[test]
    fn pointer_impls_delegate() {
        let shared = Arc::new(AlwaysFails);
        let boxed: BoxValidator<str> = Box::new(AlwaysFails);

        let mut messages = Messages::new();
        (&AlwaysFails).validate("x", &mut messages);
        shared.validate("x", &mut messages);
        boxed.validate("x", &mut messages);

        assert_eq!(messages.error_count(), 3);
    }

    #[test]
    fn evaluate_uses_fresh_collection() {
        let first = AlwaysFails.evaluate("x");
        let second = AlwaysFails.evaluate("y");
        assert_eq!(first.error_count(), 1);
        assert_eq!(second.error_count(), 1);
    }
}
