//! Built-in leaf rules
//!
//! Every rule here follows the same protocol: check the guard on the raw
//! context, derive the subject, test it, and record the rule's message on
//! failure. Each offers `new()` (the context is the subject) and `on(..)`
//! (the subject is extracted) constructors, plus the `when`, `with_message`
//! and `with_severity` builders.
//!
//! # Rules
//!
//! - **Generic**: [`Predicated`] (caller-supplied test), [`FixedError`]
//! - **Presence**: [`Required`], [`NotEmpty`]
//! - **Text**: [`Pattern`], [`StringLength`]
//!
//! # Examples
//!
//! ```rust
//! use valtree::prelude::*;
//!
//! #[derive(Debug)]
//! struct Signup { username: String }
//!
//! let username = Composite::on(|s: &Signup| &s.username)
//!     .stop_on_first_error(true)
//!     .with(NotEmpty::new())
//!     .with(StringLength::new(Some(3), Some(20))?)
//!     .with(Pattern::new("[a-z0-9_]+")?);
//!
//! let messages = username.evaluate(&Signup { username: "Al!".into() });
//! assert_eq!(messages.error_count(), 1);
//! assert_eq!(messages.errors()[0].code(), "pattern");
//! # Ok::<(), valtree::ConfigError>(())
//! ```

pub mod empty;
pub mod length;
pub mod pattern;
pub mod predicated;
pub mod presence;

pub use empty::NotEmpty;
pub use length::StringLength;
pub use pattern::Pattern;
pub use predicated::{FixedError, Leaf, Predicated, Test};
pub use presence::Required;
