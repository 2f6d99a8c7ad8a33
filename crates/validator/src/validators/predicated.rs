//! Predicated leaf rules.
//!
//! A leaf checks its guard on the context, derives its subject, tests it and
//! records its message when the test fails. [`Leaf`] holds that shared
//! configuration; [`Predicated`] supplies the test as a closure and
//! [`FixedError`] fails unconditionally.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::foundation::{Validate, ValidatorBase};
use crate::macros::leaf_rule;
use crate::message::{Message, Param};
use crate::messages::{Messages, Severity};

// ============================================================================
// LEAF
// ============================================================================

/// Guard, extractor, message template and severity of a leaf rule.
pub struct Leaf<C: ?Sized, S: ?Sized = C> {
    base: ValidatorBase<C, S>,
    message: Message,
    severity: Severity,
}

impl<C: ?Sized, S: ?Sized> Leaf<C, S> {
    /// Leaf emitting `message` as an error.
    pub fn new(base: ValidatorBase<C, S>, message: Message) -> Self {
        Self {
            base,
            message,
            severity: Severity::Error,
        }
    }

    /// Replaces the guard.
    #[must_use = "builder methods must be chained or built"]
    pub fn when<G>(self, guard: G) -> Self
    where
        G: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Self {
            base: self.base.when(guard),
            ..self
        }
    }

    /// Replaces the message template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(self, message: Message) -> Self {
        Self { message, ..self }
    }

    /// Sets the severity failures are recorded under.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_severity(self, severity: Severity) -> Self {
        Self { severity, ..self }
    }

    /// Guard and extractor.
    pub fn base(&self) -> &ValidatorBase<C, S> {
        &self.base
    }

    /// Message template emitted on failure.
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Severity of the failure message.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Runs the leaf protocol.
    ///
    /// `passes` is only called when the guard accepts `context`. On failure
    /// the message is added with fallback parameters `[context, subject]`,
    /// the subject described by `describe`.
    pub fn check<'m, P, D>(
        &self,
        context: &C,
        messages: &'m mut Messages,
        passes: P,
        describe: D,
    ) -> &'m mut Messages
    where
        C: fmt::Debug,
        P: FnOnce(&S) -> bool,
        D: FnOnce(&S) -> Param,
    {
        if !self.base.permits(context) {
            tracing::trace!(code = %self.message.code(), "guard rejected context, skipping rule");
            return messages;
        }

        let subject = self.base.subject(context);
        if !passes(subject) {
            tracing::trace!(code = %self.message.code(), severity = %self.severity, "rule failed");
            let message = self
                .message
                .instantiate_with(|| [Param::debug(context), describe(subject)]);
            messages.add(self.severity, message);
        }
        messages
    }
}

impl<C: ?Sized, S: ?Sized> Clone for Leaf<C, S> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            message: self.message.clone(),
            severity: self.severity,
        }
    }
}

impl<C: ?Sized, S: ?Sized> fmt::Debug for Leaf<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaf")
            .field("base", &self.base)
            .field("message", &self.message)
            .field("severity", &self.severity)
            .finish()
    }
}

// ============================================================================
// PREDICATED
// ============================================================================

/// Test applied to the subject of a [`Predicated`] rule.
pub type Test<S> = Arc<dyn Fn(&S) -> bool + Send + Sync>;

/// Leaf rule whose test is a caller-supplied predicate.
///
/// The subject is rendered as a fallback parameter through `Debug`.
///
/// # Examples
///
/// ```rust
/// use valtree::prelude::*;
///
/// #[derive(Debug)]
/// struct Order { quantity: u32 }
///
/// let rule = Predicated::on(
///     |o: &Order| &o.quantity,
///     Message::field("quantity", "positive", "Quantity must be positive"),
///     |q: &u32| *q > 0,
/// );
///
/// assert!(rule.evaluate(&Order { quantity: 0 }).has_errors());
/// assert!(!rule.evaluate(&Order { quantity: 2 }).has_errors());
/// ```
pub struct Predicated<C: ?Sized, S: ?Sized = C> {
    leaf: Leaf<C, S>,
    test: Test<S>,
}

leaf_rule!(Predicated);

impl<T: ?Sized> Predicated<T, T> {
    /// Rule testing the context itself.
    pub fn new<P>(message: Message, test: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::with_base(ValidatorBase::new(), message, test)
    }
}

impl<C: ?Sized, S: ?Sized> Predicated<C, S> {
    /// Rule testing the value `extractor` derives from the context.
    pub fn on<F, P>(extractor: F, message: Message, test: P) -> Self
    where
        F: Fn(&C) -> &S + Send + Sync + 'static,
        P: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Self::with_base(ValidatorBase::on(extractor), message, test)
    }

    fn with_base<P>(base: ValidatorBase<C, S>, message: Message, test: P) -> Self
    where
        P: Fn(&S) -> bool + Send + Sync + 'static,
    {
        let test: Test<S> = Arc::new(test);
        Self {
            leaf: Leaf::new(base, message),
            test,
        }
    }

    /// Returns `true` if `subject` passes the test.
    pub fn accepts(&self, subject: &S) -> bool {
        (self.test)(subject)
    }
}

impl<C, S> Validate for Predicated<C, S>
where
    C: fmt::Debug + ?Sized,
    S: fmt::Debug + ?Sized,
{
    type Input = C;

    fn validate<'m>(&self, input: &C, messages: &'m mut Messages) -> &'m mut Messages {
        self.leaf
            .check(input, messages, |s| self.accepts(s), Param::debug::<S>)
    }
}

impl<C: ?Sized, S: ?Sized> Clone for Predicated<C, S> {
    fn clone(&self) -> Self {
        Self {
            leaf: self.leaf.clone(),
            test: Arc::clone(&self.test),
        }
    }
}

impl<C: ?Sized, S: ?Sized> fmt::Debug for Predicated<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicated")
            .field("leaf", &self.leaf)
            .field("test", &"<function>")
            .finish()
    }
}

// ============================================================================
// FIXED ERROR
// ============================================================================

/// Leaf rule that fails whenever its guard accepts the context.
///
/// Useful for cross-field conditions expressed entirely by the guard.
///
/// # Examples
///
/// ```rust
/// use valtree::prelude::*;
///
/// #[derive(Debug)]
/// struct Range { from: u32, to: u32 }
///
/// let rule = FixedError::field("to", "range.order", "End must not precede start")
///     .when(|r: &Range| r.to < r.from);
///
/// assert!(rule.evaluate(&Range { from: 5, to: 1 }).has_errors());
/// assert!(rule.evaluate(&Range { from: 1, to: 5 }).is_empty());
/// ```
pub struct FixedError<C: ?Sized, S: ?Sized = C> {
    leaf: Leaf<C, S>,
}

leaf_rule!(FixedError);

impl<T: ?Sized> FixedError<T, T> {
    /// Rule emitting `message`.
    pub fn new(message: Message) -> Self {
        Self {
            leaf: Leaf::new(ValidatorBase::new(), message),
        }
    }

    /// Rule emitting a global message.
    pub fn global(
        code: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(Message::global(code, template))
    }

    /// Rule emitting a message for the named field.
    pub fn field(
        field: impl Into<Cow<'static, str>>,
        code: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(Message::field(field, code, template))
    }
}

impl<C: ?Sized, S: ?Sized> FixedError<C, S> {
    /// Rule emitting `message`, with the extracted value as its subject.
    pub fn on<F>(extractor: F, message: Message) -> Self
    where
        F: Fn(&C) -> &S + Send + Sync + 'static,
    {
        Self {
            leaf: Leaf::new(ValidatorBase::on(extractor), message),
        }
    }

    /// Always `false`.
    pub fn accepts(&self, _subject: &S) -> bool {
        false
    }
}

impl<C, S> Validate for FixedError<C, S>
where
    C: fmt::Debug + ?Sized,
    S: fmt::Debug + ?Sized,
{
    type Input = C;

    fn validate<'m>(&self, input: &C, messages: &'m mut Messages) -> &'m mut Messages {
        self.leaf
            .check(input, messages, |s| self.accepts(s), Param::debug::<S>)
    }
}

impl<C: ?Sized, S: ?Sized> Clone for FixedError<C, S> {
    fn clone(&self) -> Self {
        Self {
            leaf: self.leaf.clone(),
        }
    }
}

impl<C: ?Sized, S: ?Sized> fmt::Debug for FixedError<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedError").field("leaf", &self.leaf).finish()
    }
}
