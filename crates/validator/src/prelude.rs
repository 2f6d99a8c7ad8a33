//! Prelude module for convenient imports.
//!
//! Provides a single `use valtree::prelude::*;` import that brings in the
//! traits, message types, leaf rules and combinators needed to build and
//! run a validator tree.

// ============================================================================
// FOUNDATION: Core traits and configuration
// ============================================================================

pub use crate::foundation::{BoxValidator, Subject, Validate, ValidateExt};

// ============================================================================
// MESSAGES
// ============================================================================

pub use crate::message::{Message, Param};
pub use crate::messages::{Messages, Severity};

// ============================================================================
// VALIDATORS AND COMBINATORS
// ============================================================================

pub use crate::combinators::{Composite, Field, FromFn, When};
pub use crate::validators::{FixedError, NotEmpty, Pattern, Predicated, Required, StringLength};

// ============================================================================
// ERRORS
// ============================================================================

pub use crate::error::{ConfigError, ConfigResult};
