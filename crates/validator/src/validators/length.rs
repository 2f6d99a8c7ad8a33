//! String length rule
//!
//! Length is measured in Unicode scalar values (chars) after trimming
//! surrounding whitespace. An absent subject has length 0.

use std::fmt;

use crate::error::{ConfigError, ConfigResult};
use crate::foundation::{Subject, Validate, ValidatorBase};
use crate::macros::leaf_rule;
use crate::message::{Message, Param};
use crate::messages::Messages;
use crate::validators::Leaf;

/// Code of the default [`StringLength`] message.
pub const LENGTH_CODE: &str = "length";

/// Trimmed character length of a subject; 0 when absent.
pub fn text_length<S: Subject + ?Sized>(subject: &S) -> usize {
    subject
        .as_text()
        .map_or(0, |text| text.trim().chars().count())
}

// ============================================================================
// STRING LENGTH
// ============================================================================

/// Validates that the trimmed length lies within inclusive bounds.
///
/// Either bound may be omitted. The default message depends on which bounds
/// are set and carries them as its parameters.
///
/// # Examples
///
/// ```rust
/// use valtree::prelude::*;
///
/// let validator = StringLength::<str>::new(Some(2), Some(4))?;
/// assert!(validator.evaluate(" abc ").is_empty());
///
/// let messages = validator.evaluate("abcdef");
/// assert_eq!(
///     messages.rendered(Severity::Error),
///     vec!["Value must be between 2 and 4 characters in length".to_string()],
/// );
/// # Ok::<(), valtree::ConfigError>(())
/// ```
pub struct StringLength<C: ?Sized, S: ?Sized = C> {
    leaf: Leaf<C, S>,
    min: Option<usize>,
    max: Option<usize>,
}

leaf_rule!(StringLength);

impl<T: ?Sized> StringLength<T, T> {
    /// Checks the context itself.
    ///
    /// Fails with [`ConfigError::InvertedBounds`] when `min > max`.
    pub fn new(min: Option<usize>, max: Option<usize>) -> ConfigResult<Self> {
        Self::with_base(ValidatorBase::new(), min, max)
    }
}

impl<C: ?Sized, S: ?Sized> StringLength<C, S> {
    /// Checks the value `extractor` derives from the context.
    pub fn on<F>(extractor: F, min: Option<usize>, max: Option<usize>) -> ConfigResult<Self>
    where
        F: Fn(&C) -> &S + Send + Sync + 'static,
    {
        Self::with_base(ValidatorBase::on(extractor), min, max)
    }

    fn with_base(
        base: ValidatorBase<C, S>,
        min: Option<usize>,
        max: Option<usize>,
    ) -> ConfigResult<Self> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(ConfigError::inverted_bounds(min, max));
            }
        }

        Ok(Self {
            leaf: Leaf::new(base, Self::default_message(min, max)),
            min,
            max,
        })
    }

    /// Default message for the given bounds, with the bounds as parameters.
    pub fn default_message(min: Option<usize>, max: Option<usize>) -> Message {
        match (min, max) {
            (Some(min), Some(max)) => Message::global(
                LENGTH_CODE,
                "Value must be between {0} and {1} characters in length",
            )
            .with_param(min)
            .with_param(max),
            (Some(min), None) => Message::global(
                LENGTH_CODE,
                "Value must be more than or equal to {0} characters in length",
            )
            .with_param(min),
            (None, Some(max)) => Message::global(
                LENGTH_CODE,
                "Value must be less than or equal to {0} characters in length",
            )
            .with_param(max),
            (None, None) => Message::untemplated(LENGTH_CODE),
        }
    }

    /// Inclusive lower bound.
    pub fn min(&self) -> Option<usize> {
        self.min
    }

    /// Inclusive upper bound.
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// Returns `true` if `length` lies within the bounds.
    pub fn in_bounds(&self, length: usize) -> bool {
        self.min.is_none_or(|min| length >= min) && self.max.is_none_or(|max| length <= max)
    }
}

impl<C: ?Sized, S: Subject + ?Sized> StringLength<C, S> {
    /// Returns `true` if the trimmed length of `subject` lies within the bounds.
    pub fn accepts(&self, subject: &S) -> bool {
        self.in_bounds(text_length(subject))
    }
}

impl<C, S> Validate for StringLength<C, S>
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

impl<C: ?Sized, S: ?Sized> Clone for StringLength<C, S> {
    fn clone(&self) -> Self {
        Self {
            leaf: self.leaf.clone(),
            min: self.min,
            max: self.max,
        }
    }
}

impl<C: ?Sized, S: ?Sized> fmt::Debug for StringLength<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringLength")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("leaf", &self.leaf)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::messages::Severity;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn length(min: Option<usize>, max: Option<usize>) -> StringLength<Option<&'static str>> {
        StringLength::new(min, max).unwrap()
    }

    #[rstest]
    #[case::inside(Some(1), Some(3), Some("ab"), true)]
    #[case::at_min(Some(2), Some(3), Some("ab"), true)]
    #[case::at_max(Some(1), Some(2), Some("ab"), true)]
    #[case::too_short(Some(3), Some(5), Some("ab"), false)]
    #[case::too_long(Some(1), Some(1), Some("ab"), false)]
    #[case::trimmed(Some(1), Some(2), Some("   ab   "), true)]
    #[case::min_only(Some(2), None, Some("abcdefgh"), true)]
    #[case::max_only(None, Some(2), Some("abc"), false)]
    #[case::unbounded(None, None, Some("anything"), true)]
    #[case::absent_with_min(Some(1), None, None, false)]
    #[case::absent_with_max(None, Some(3), None, true)]
    #[case::chars_not_bytes(Some(3), Some(3), Some("äöü"), true)]
    fn accepts(
        #[case] min: Option<usize>,
        #[case] max: Option<usize>,
        #[case] subject: Option<&'static str>,
        #[case] expected: bool,
    ) {
        assert_eq!(length(min, max).accepts(&subject), expected);
    }

    #[rstest]
    #[case::both(Some(2), Some(4), Some("Value must be between 2 and 4 characters in length"))]
    #[case::min(Some(2), None, Some("Value must be more than or equal to 2 characters in length"))]
    #[case::max(None, Some(4), Some("Value must be less than or equal to 4 characters in length"))]
    #[case::neither(None, None, None)]
    fn default_message_depends_on_bounds(
        #[case] min: Option<usize>,
        #[case] max: Option<usize>,
        #[case] expected: Option<&str>,
    ) {
        let message = StringLength::<str>::default_message(min, max);
        assert_eq!(message.code(), LENGTH_CODE);
        assert_eq!(message.rendered().as_deref(), expected);
    }

    #[test]
    fn failure_keeps_bound_params() {
        let messages = length(Some(5), Some(10)).evaluate(&Some("abc"));
        let emitted = &messages.errors()[0];
        assert_eq!(emitted.params(), &[Param::from(5_usize), Param::from(10_usize)]);
        assert_eq!(
            messages.rendered(Severity::Error),
            vec!["Value must be between 5 and 10 characters in length".to_string()]
        );
    }

    #[test]
    fn inverted_bounds_rejected() {
        let err = StringLength::<str>::new(Some(10), Some(5)).unwrap_err();
        assert!(matches!(err, ConfigError::InvertedBounds { min: 10, max: 5 }));
    }

    #[test]
    fn accessors_report_bounds() {
        let validator = length(Some(1), None);
        assert_eq!(validator.min(), Some(1));
        assert_eq!(validator.max(), None);
    }

    #[test]
    fn text_length_counts_trimmed_chars() {
        assert_eq!(text_length("  héllo "), 5);
        assert_eq!(text_length(&None::<String>), 0);
        assert_eq!(text_length(&12345_u32), 5);
    }
}
