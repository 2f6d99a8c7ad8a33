//! Closure-backed validators.
//!
//! [`from_fn`] turns a closure into a [`Validate`] implementation. Use it for
//! rules that record warnings or infos, or several messages at once.

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::Validate;
use crate::messages::Messages;

/// Validator backed by a closure over the input and the collection.
pub struct FromFn<T: ?Sized, F> {
    f: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> FromFn<T, F>
where
    F: Fn(&T, &mut Messages),
{
    /// Wraps `f`.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized, F> Validate for FromFn<T, F>
where
    F: Fn(&T, &mut Messages),
{
    type Input = T;

    fn validate<'m>(&self, input: &T, messages: &'m mut Messages) -> &'m mut Messages {
        (self.f)(input, &mut *messages);
        messages
    }
}

impl<T: ?Sized, F: Clone> Clone for FromFn<T, F> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized, F> fmt::Debug for FromFn<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").field("f", &"<function>").finish()
    }
}

/// Creates a validator from a closure.
///
/// # Examples
///
/// ```rust
/// use valtree::combinators::from_fn;
/// use valtree::prelude::*;
///
/// let legacy = from_fn(|code: &str, messages: &mut Messages| {
///     if code.starts_with("OLD-") {
///         messages.add_warning(Message::global("legacy", "Legacy code {0}").with_param(code));
///     }
/// });
///
/// let messages = legacy.evaluate("OLD-7");
/// assert!(!messages.has_errors());
/// assert_eq!(messages.rendered(Severity::Warning), vec!["Legacy code OLD-7".to_string()]);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<T, F>
where
    T: ?Sized,
    F: Fn(&T, &mut Messages),
{
    FromFn::new(f)
}
