//! Validation messages.
//!
//! A [`Message`] is one immutable finding: an optional field, a stable code,
//! a parameterized template and the positional parameters interpolated into
//! it. Validators hold a message as a template and add an instantiated copy
//! to the [`Messages`](crate::Messages) collection when a rule fails.
//!
//! All string fields use `Cow<'static, str>` so that the common case of
//! static codes and templates does not allocate.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::foundation::Subject;
use crate::render::render;

// ============================================================================
// PARAM
// ============================================================================

/// Textual form of one template parameter.
///
/// `Param::null()` is the absent value and renders as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Param(Option<String>);

impl Param {
    /// The absent parameter.
    pub const fn null() -> Self {
        Self(None)
    }

    /// Parameter holding the `Display` form of `value`.
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Self(Some(value.to_string()))
    }

    /// Parameter holding the `Debug` form of `value`.
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Self(Some(format!("{value:?}")))
    }

    /// Parameter holding the text view of a validation subject.
    pub fn subject<S: Subject + ?Sized>(value: &S) -> Self {
        Self(value.as_text().map(Cow::into_owned))
    }

    /// Returns the text, or `None` for the absent parameter.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Returns the text used when rendering, `null` for the absent parameter.
    pub fn text(&self) -> &str {
        self.0.as_deref().unwrap_or("null")
    }

    /// Returns `true` for the absent parameter.
    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Self(Some(value.to_owned()))
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Self(Some(value))
    }
}

impl From<Cow<'_, str>> for Param {
    fn from(value: Cow<'_, str>) -> Self {
        Self(Some(value.into_owned()))
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::null, Into::into)
    }
}

macro_rules! param_from_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Param {
                fn from(value: $ty) -> Self {
                    Self(Some(value.to_string()))
                }
            }
        )+
    };
}

param_from_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

// ============================================================================
// MESSAGE
// ============================================================================

/// One validation finding, or the template a validator emits on failure.
///
/// Equality and hashing cover `(field, code, template, params)`.
///
/// # Examples
///
/// ```rust
/// use valtree::Message;
///
/// let message = Message::field("age", "age.min", "Must be at least {0}, was {1}")
///     .with_param(18)
///     .with_param(16);
/// assert_eq!(message.rendered().as_deref(), Some("Must be at least 18, was 16"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    field: Option<Cow<'static, str>>,
    code: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    template: Option<Cow<'static, str>>,
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    params: SmallVec<[Param; 2]>,
}

impl Message {
    /// Creates a message from its parts; both field and template are optional.
    pub fn new(
        field: Option<Cow<'static, str>>,
        code: impl Into<Cow<'static, str>>,
        template: Option<Cow<'static, str>>,
    ) -> Self {
        Self {
            field,
            code: code.into(),
            template,
            params: SmallVec::new(),
        }
    }

    /// Creates a global message, not tied to any field.
    pub fn global(
        code: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            field: None,
            code: code.into(),
            template: Some(template.into()),
            params: SmallVec::new(),
        }
    }

    /// Creates a message for the named field.
    pub fn field(
        field: impl Into<Cow<'static, str>>,
        code: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::global(code, template).with_field(field)
    }

    /// Creates a global message that has a code but no text.
    pub fn untemplated(code: impl Into<Cow<'static, str>>) -> Self {
        Self::new(None, code, None)
    }

    /// Sets the field this message applies to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Appends one positional parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, param: impl Into<Param>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Appends several positional parameters, in order.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_params<I>(mut self, params: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Param>,
    {
        self.params.extend(params.into_iter().map(Into::into));
        self
    }

    /// Field this message applies to; `None` for a global message.
    pub fn field_name(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Returns `true` when the message is not tied to a field.
    pub fn is_global(&self) -> bool {
        self.field.is_none()
    }

    /// Canonical code identifying the kind of finding.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Parameterized text, before interpolation.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Positional parameters interpolated into the template.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Template with its parameters interpolated, or `None` without a template.
    pub fn rendered(&self) -> Option<String> {
        self.template.as_deref().map(|t| render(t, &self.params))
    }

    /// Compares field, code and template, ignoring parameters.
    pub fn is_like(&self, other: &Message) -> bool {
        self.field == other.field && self.code == other.code && self.template == other.template
    }

    /// Copy of this template as emitted for a failing object.
    ///
    /// Preset parameters are kept. Without them the copy carries
    /// `[context, subject]`: the context in its `Debug` form and the subject
    /// through its text view.
    pub fn instantiate<C, S>(&self, context: &C, subject: &S) -> Self
    where
        C: fmt::Debug + ?Sized,
        S: Subject + ?Sized,
    {
        self.instantiate_with(|| [Param::debug(context), Param::subject(subject)])
    }

    /// Like [`instantiate`](Self::instantiate), with the fallback computed by
    /// `fallback` only when no parameters are preset.
    pub fn instantiate_with<F>(&self, fallback: F) -> Self
    where
        F: FnOnce() -> [Param; 2],
    {
        let mut message = self.clone();
        if message.params.is_empty() {
            message.params = SmallVec::from_buf(fallback());
        }
        message
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{field}] ")?;
        }
        f.write_str(&self.code)?;
        if let Some(text) = self.rendered() {
            write!(f, ": {text}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn field_message_with_parameters() {
        let message = Message::field("theField", "theCode", "theParameterisedMessage")
            .with_param("param1")
            .with_param(2_u32);

        assert_eq!(message.field_name(), Some("theField"));
        assert_eq!(message.code(), "theCode");
        assert_eq!(message.template(), Some("theParameterisedMessage"));
        assert_eq!(message.params(), &[Param::from("param1"), Param::from("2")]);
        assert!(!message.is_global());
    }

    #[test]
    fn global_message_has_no_field_or_params() {
        let message = Message::global("theCode", "theParameterisedMessage");
        assert_eq!(message.field_name(), None);
        assert!(message.is_global());
        assert!(message.params().is_empty());
    }

    #[test]
    fn renders_positional_parameters() {
        let message = Message::field(
            "theField",
            "theCode",
            "The message param1=[{0}] and param2=[{1}]",
        )
        .with_params([Param::from("This is param1"), Param::from(1234_i64)]);

        assert_eq!(
            message.rendered().as_deref(),
            Some("The message param1=[This is param1] and param2=[1234]")
        );
    }

    #[test]
    fn untemplated_message_renders_nothing() {
        let message = Message::untemplated("length");
        assert_eq!(message.template(), None);
        assert_eq!(message.rendered(), None);
        assert_eq!(message.to_string(), "length");
    }

    #[test]
    fn equality_covers_all_parts() {
        let base = Message::field("theField", "theCode", "theMessage").with_param("p");
        assert_eq!(base, Message::field("theField", "theCode", "theMessage").with_param("p"));
        assert_ne!(base, Message::field("theField", "theCode", "theMessage"));
        assert_ne!(base, Message::global("theCode", "theMessage").with_param("p"));
        assert_ne!(base, Message::field("other", "theCode", "theMessage").with_param("p"));

        let set: HashSet<Message> = [base.clone(), base.clone()].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn is_like_ignores_parameters() {
        let template = Message::global("theCode", "theMessage");
        let emitted = template.clone().with_param("a").with_param("b");
        assert!(emitted.is_like(&template));
        assert!(!emitted.is_like(&Message::global("otherCode", "theMessage")));
    }

    #[test]
    fn instantiate_falls_back_to_context_and_subject() {
        let template = Message::global("theCode", "{0} / {1}");
        let emitted = template.instantiate(&42_u8, &Some("value"));
        assert_eq!(emitted.params(), &[Param::from("42"), Param::from("value")]);

        let absent = template.instantiate("ctx", &None::<String>);
        assert_eq!(absent.params(), &[Param::from("\"ctx\""), Param::null()]);
        assert_eq!(absent.rendered().as_deref(), Some("\"ctx\" / null"));
    }

    #[test]
    fn instantiate_keeps_preset_parameters() {
        let template = Message::global("theCode", "theMessage").with_params(["p1", "p2", "p3"]);
        let emitted = template.instantiate("ignored", "ignored");
        assert_eq!(emitted, template);
    }

    #[test]
    fn display_includes_field_code_and_text() {
        let message = Message::field("name", "empty", "Name {0} is empty").with_param("x");
        assert_eq!(message.to_string(), "[name] empty: Name x is empty");
        assert_eq!(
            Message::global("empty", "Nothing here").to_string(),
            "empty: Nothing here"
        );
    }

    #[test]
    fn param_conversions() {
        assert_eq!(Param::from(None::<&str>), Param::null());
        assert_eq!(Param::from(Some(3_i32)).as_str(), Some("3"));
        assert_eq!(Param::display(&1.5_f64).text(), "1.5");
        assert_eq!(Param::debug("q").text(), "\"q\"");
        assert_eq!(Param::null().to_string(), "null");
        assert!(Param::null().is_null());
    }

    #[test]
    fn serializes_without_empty_parts() {
        let message = Message::global("theCode", "theMessage");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json, serde_json::json!({"code": "theCode", "template": "theMessage"}));

        let back: Message = serde_json::from_value(json).unwrap();
        assert_eq!(back, message);
    }
}
