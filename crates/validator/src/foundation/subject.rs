//! Text view of validated values.
//!
//! Leaf rules that look at "the value as text" (presence, emptiness, pattern,
//! length) are generic over [`Subject`] instead of a concrete string type.
//! `None` from [`Subject::as_text`] means the value is absent.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// A value that leaf rules can inspect as text.
///
/// # Examples
///
/// ```rust
/// use valtree::Subject;
///
/// assert_eq!("abc".as_text().as_deref(), Some("abc"));
/// assert_eq!(Some(42_u32).as_text().as_deref(), Some("42"));
/// assert_eq!(None::<String>.as_text(), None);
/// ```
pub trait Subject {
    /// Returns the text form of the value, or `None` when it is absent.
    fn as_text(&self) -> Option<Cow<'_, str>>;

    /// Returns `true` when the value is absent.
    fn is_absent(&self) -> bool {
        self.as_text().is_none()
    }
}

impl Subject for str {
    fn as_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl Subject for String {
    fn as_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl Subject for Cow<'_, str> {
    fn as_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_ref()))
    }
}

impl<T: Subject + ?Sized> Subject for &T {
    fn as_text(&self) -> Option<Cow<'_, str>> {
        (**self).as_text()
    }
}

impl<T: Subject + ?Sized> Subject for Box<T> {
    fn as_text(&self) -> Option<Cow<'_, str>> {
        (**self).as_text()
    }
}

impl<T: Subject + ?Sized> Subject for Rc<T> {
    fn as_text(&self) -> Option<Cow<'_, str>> {
        (**self).as_text()
    }
}

impl<T: Subject + ?Sized> Subject for Arc<T> {
    fn as_text(&self) -> Option<Cow<'_, str>> {
        (**self).as_text()
    }
}

impl<T: Subject> Subject for Option<T> {
    fn as_text(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(Subject::as_text)
    }
}

macro_rules! subject_via_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Subject for $ty {
                fn as_text(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(self.to_string()))
                }
            }
        )+
    };
}

subject_via_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strings_are_borrowed() {
        let owned = String::from("value");
        assert!(matches!(owned.as_text(), Some(Cow::Borrowed("value"))));
        assert!(matches!("value".as_text(), Some(Cow::Borrowed("value"))));
    }

    #[test]
    fn option_is_absent_when_none() {
        assert!(None::<&str>.is_absent());
        assert!(!Some("").is_absent());
        assert_eq!(Some(Some(7_i64)).as_text().as_deref(), Some("7"));
    }

    #[test]
    fn smart_pointers_delegate() {
        let boxed: Box<str> = "boxed".into();
        let shared: Arc<String> = Arc::new("shared".to_string());
        assert_eq!(boxed.as_text().as_deref(), Some("boxed"));
        assert_eq!(shared.as_text().as_deref(), Some("shared"));
    }

    #[test]
    fn scalars_use_display() {
        assert_eq!(true.as_text().as_deref(), Some("true"));
        assert_eq!('x'.as_text().as_deref(), Some("x"));
        assert_eq!(2.5_f32.as_text().as_deref(), Some("2.5"));
    }
}
