//! COMPOSITE - ordered group of validators over one subject
//!
//! A [`Composite`] is the inner node of a validator tree. It checks its own
//! guard on the context, extracts a subject and passes that subject to each
//! child in insertion order. Children may be leaves or further composites.
//!
//! With `stop_on_first_error` set, iteration stops as soon as a child has
//! added an error. Warnings and infos never stop iteration, and neither do
//! errors that were already in the collection before the composite ran.

use std::fmt;

use crate::foundation::{BoxValidator, Extractor, Guard, Validate, ValidatorBase};
use crate::messages::Messages;

/// Ordered children of subject type `S`, behind a guard and an extractor.
///
/// # Examples
///
/// ```rust
/// use valtree::prelude::*;
///
/// #[derive(Debug)]
/// struct Address { street: String, postcode: String }
///
/// #[derive(Debug)]
/// struct Person { name: String, address: Address }
///
/// let address = Composite::on(|p: &Person| &p.address)
///     .with(NotEmpty::on(|a: &Address| &a.street))
///     .with(Pattern::on(|a: &Address| &a.postcode, "[0-9]{5}")?);
///
/// let person = Composite::new()
///     .with(NotEmpty::on(|p: &Person| &p.name))
///     .with(address);
///
/// let ada = Person {
///     name: "Ada".into(),
///     address: Address { street: String::new(), postcode: "1234".into() },
/// };
/// assert_eq!(person.evaluate(&ada).error_count(), 2);
/// # Ok::<(), valtree::ConfigError>(())
/// ```
pub struct Composite<C: ?Sized, S: ?Sized = C> {
    base: ValidatorBase<C, S>,
    stop_on_first_error: bool,
    validators: Vec<BoxValidator<S>>,
}

impl<T: ?Sized> Composite<T, T> {
    /// Empty composite whose children validate the context itself.
    pub fn new() -> Self {
        Self::with_base(ValidatorBase::new())
    }
}

impl<C: ?Sized, S: ?Sized> Composite<C, S> {
    /// Empty composite whose children validate the value `extractor` derives.
    pub fn on<F>(extractor: F) -> Self
    where
        F: Fn(&C) -> &S + Send + Sync + 'static,
    {
        Self::with_base(ValidatorBase::on(extractor))
    }

    fn with_base(base: ValidatorBase<C, S>) -> Self {
        Self {
            base,
            stop_on_first_error: false,
            validators: Vec::new(),
        }
    }

    /// Stops after the first child that adds an error.
    #[must_use = "builder methods must be chained or built"]
    pub fn stop_on_first_error(mut self, stop: bool) -> Self {
        self.stop_on_first_error = stop;
        self
    }

    /// Only applies this composite, and all of its children, to contexts
    /// accepted by `guard`.
    #[must_use = "builder methods must be chained or built"]
    pub fn when<G>(mut self, guard: G) -> Self
    where
        G: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.base = self.base.when(guard);
        self
    }

    /// Appends a child.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<V>(self, validator: V) -> Self
    where
        V: Validate<Input = S> + Send + Sync + 'static,
    {
        self.with_boxed(Box::new(validator))
    }

    /// Appends an already boxed child.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_boxed(mut self, validator: BoxValidator<S>) -> Self {
        self.validators.push(validator);
        self
    }

    /// Appends several boxed children, in order.
    #[must_use = "builder methods must be chained or built"]
    pub fn extend<I>(mut self, validators: I) -> Self
    where
        I: IntoIterator<Item = BoxValidator<S>>,
    {
        self.validators.extend(validators);
        self
    }

    /// Returns `true` if iteration stops at the first new error.
    pub fn is_stop_on_first_error(&self) -> bool {
        self.stop_on_first_error
    }

    /// Children, in evaluation order.
    pub fn validators(&self) -> &[BoxValidator<S>] {
        &self.validators
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns `true` if there are no children.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// The configured guard, if any.
    pub fn condition(&self) -> Option<&Guard<C>> {
        self.base.condition()
    }

    /// The configured extractor, if any.
    pub fn value_provider(&self) -> Option<&Extractor<C, S>> {
        self.base.value_provider()
    }
}

impl<C: ?Sized, S: ?Sized> Validate for Composite<C, S> {
    type Input = C;

    fn validate<'m>(&self, input: &C, messages: &'m mut Messages) -> &'m mut Messages {
        if !self.base.permits(input) {
            tracing::trace!(
                children = self.validators.len(),
                "guard rejected context, skipping composite"
            );
            return messages;
        }

        let subject = self.base.subject(input);
        let errors_before = messages.error_count();

        for (index, validator) in self.validators.iter().enumerate() {
            validator.validate(subject, messages);
            if self.stop_on_first_error && messages.error_count() > errors_before {
                tracing::debug!(
                    stopped_at = index,
                    remaining = self.validators.len() - index - 1,
                    "composite stopped on first error"
                );
                break;
            }
        }

        messages
    }
}

impl<T: ?Sized> Default for Composite<T, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized, S: ?Sized> fmt::Debug for Composite<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composite")
            .field("base", &self.base)
            .field("stop_on_first_error", &self.stop_on_first_error)
            .field("validators", &self.validators.len())
            .finish()
    }
}
