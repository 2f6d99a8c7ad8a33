//! # valtree
//!
//! Declarative validator trees that accumulate parameterized messages.
//!
//! A tree is built from leaf rules and [`Composite`](combinators::Composite)
//! nodes. Every node carries an optional guard, evaluated on the context it
//! receives, and an optional extractor that picks the value it inspects.
//! Running the root against an object appends errors, warnings and infos to
//! a caller-owned [`Messages`] collection.
//!
//! ## Quick Start
//!
//! ```rust
//! use valtree::prelude::*;
//!
//! #[derive(Debug)]
//! struct Person {
//!     name: String,
//!     email: Option<String>,
//!     newsletter: bool,
//! }
//!
//! let validator = Composite::new()
//!     .with(NotEmpty::on(|p: &Person| &p.name))
//!     .with(
//!         Required::on(|p: &Person| &p.email)
//!             .with_message(Message::field("email", "required", "Email is required"))
//!             .when(|p: &Person| p.newsletter),
//!     );
//!
//! let person = Person { name: "Ada".into(), email: None, newsletter: true };
//! let messages = validator.evaluate(&person);
//!
//! assert!(messages.has_errors());
//! assert_eq!(messages.to_string(), "error: [email] required: Email is required");
//! ```
//!
//! ## Messages
//!
//! A [`Message`] carries an optional field, a code, an optional template and
//! positional parameters. Templates use `{0}`, `{1}`, ... placeholders and are
//! rendered by [`render`]. A rule whose message has no preset parameters
//! reports `[context, subject]` as its parameters.
//!
//! ## Built-in Rules
//!
//! - [`Required`](validators::Required), [`NotEmpty`](validators::NotEmpty)
//! - [`Pattern`](validators::Pattern), [`StringLength`](validators::StringLength)
//! - [`Predicated`](validators::Predicated), [`FixedError`](validators::FixedError)

// Validator configuration is stored as `Arc<dyn Fn(&C) -> &S + Send + Sync>`
// and `Box<dyn Validate<Input = S> + Send + Sync>`.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod error;
pub mod foundation;
mod macros;
pub mod message;
pub mod messages;
pub mod prelude;
pub mod render;
pub mod validators;

pub use error::{ConfigError, ConfigResult};
pub use foundation::{Subject, Validate, ValidateExt};
pub use message::{Message, Param};
pub use messages::{Messages, Severity};
pub use render::render;
