//! Combinators for building validator trees
//!
//! - [`Composite`] - ordered children over one subject, optionally
//!   stopping at the first new error
//! - [`When`] - runs a validator only when a predicate accepts the input
//! - [`Field`] - validates a value extracted from the input
//! - [`FromFn`] - wraps a closure as a validator

pub mod composite;
pub mod field;
pub mod from_fn;
pub mod when;

pub use composite::Composite;
pub use field::{Field, field};
pub use from_fn::{FromFn, from_fn};
pub use when::{When, when};
