//! Core validation types and traits
//!
//! This module contains the building blocks every validator tree is made of:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`], [`Subject`]
//! - **Configuration**: [`Conditional`], [`ValueSource`], [`ValidatorBase`]
//!
//! # Architecture
//!
//! A tree is evaluated top-down. Each node first consults its guard on the
//! raw context it received. If the guard rejects the context, the node and
//! all of its children are skipped. Otherwise the node derives its subject
//! (the context itself or an extracted value) and either tests it (leaf) or
//! passes it on to its children (composite).
//!
//! Findings are appended to a caller-owned [`Messages`](crate::Messages);
//! validators themselves hold no per-call state.

pub mod base;
pub mod subject;
pub mod traits;

pub use base::{Conditional, Extractor, Guard, ValidatorBase, ValueSource};
pub use subject::Subject;
pub use traits::{BoxValidator, Validate, ValidateExt};
