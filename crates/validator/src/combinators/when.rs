//! WHEN combinator - conditional validation
//!
//! [`When`] runs the inner validator only when a predicate accepts the input.
//! It is the free-standing form of the guard every tree validator embeds, and
//! can wrap any [`Validate`] implementation.
//!
//! # Examples
//!
//! ```rust
//! use valtree::combinators::when;
//! use valtree::prelude::*;
//!
//! let validator = when(Pattern::new("[0-9]+")?, |s: &str| !s.is_empty());
//! assert!(validator.evaluate("").is_empty()); // skipped
//! assert!(validator.evaluate("12a").has_errors()); // checked, fails
//! # Ok::<(), valtree::ConfigError>(())
//! ```

use crate::foundation::Validate;
use crate::messages::Messages;

/// Conditionally applies a validator based on a predicate.
///
/// When the condition returns `false` the collection is returned untouched
/// and the inner validator is never invoked.
///
/// # Type Parameters
///
/// * `V` - The inner validator type
/// * `C` - The condition function type (must implement `Fn(&Input) -> bool`)
#[derive(Debug, Clone, Copy)]
pub struct When<V, C> {
    validator: V,
    condition: C,
}

impl<V, C> When<V, C> {
    /// Creates a new `When` combinator.
    pub fn new(validator: V, condition: C) -> Self {
        Self {
            validator,
            condition,
        }
    }

    /// Returns a reference to the inner validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Returns a reference to the condition function.
    pub fn condition(&self) -> &C {
        &self.condition
    }

    /// Extracts the validator and condition function.
    pub fn into_parts(self) -> (V, C) {
        (self.validator, self.condition)
    }
}

impl<V, C> Validate for When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    type Input = V::Input;

    fn validate<'m>(&self, input: &Self::Input, messages: &'m mut Messages) -> &'m mut Messages {
        if (self.condition)(input) {
            self.validator.validate(input, messages)
        } else {
            tracing::trace!("condition rejected input, skipping validator");
            messages
        }
    }
}

/// Creates a `When` combinator from a validator and condition.
pub fn when<V, C>(validator: V, condition: C) -> When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    When::new(validator, condition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::from_fn;
    use crate::foundation::ValidateExt;
    use crate::message::Message;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn skipped_validator_is_not_invoked() {
        let calls = AtomicUsize::new(0);
        let inner = from_fn(|_: &str, messages: &mut Messages| {
            calls.fetch_add(1, Ordering::SeqCst);
            messages.add_error(Message::global("fail", "Failed"));
        });
        let validator = inner.when(|s: &str| s.len() > 3);

        assert!(validator.evaluate("abc").is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(validator.evaluate("abcd").has_errors());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn into_parts_returns_both() {
        let validator = when(crate::validators::NotEmpty::<str>::new(), |s: &str| s.is_empty());
        let (_inner, condition) = validator.into_parts();
        assert!(condition(""));
    }
}
