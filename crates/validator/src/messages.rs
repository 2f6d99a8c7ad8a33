//! Severity-partitioned message collection.
//!
//! [`Messages`] is the accumulator threaded through a validator tree. It keeps
//! three ordered lists, one per [`Severity`], and is only ever appended to.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::message::Message;

// ============================================================================
// SEVERITY
// ============================================================================

/// Severity of a validation finding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The object is invalid.
    #[default]
    Error,
    /// Suspicious but acceptable.
    Warning,
    /// Informational only.
    Info,
}

impl Severity {
    /// All severities, in reporting order.
    pub const ALL: [Severity; 3] = [Severity::Error, Severity::Warning, Severity::Info];

    /// Lowercase name, as used in serialized output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// MESSAGES
// ============================================================================

/// Ordered collection of errors, warnings and infos produced by one
/// validation pass.
///
/// Insertion order is preserved within each severity. `has_errors()` is true
/// exactly when at least one error was added.
///
/// # Examples
///
/// ```rust
/// use valtree::{Message, Messages};
///
/// let mut messages = Messages::new();
/// messages
///     .add_error(Message::field("name", "required", "Value is required"))
///     .add_warning(Message::global("deprecated", "Legacy format"));
///
/// assert!(messages.has_errors());
/// assert_eq!(messages.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default)]
    errors: Vec<Message>,
    #[serde(default)]
    warnings: Vec<Message>,
    #[serde(default)]
    infos: Vec<Message>,
}

impl Messages {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Adding
    // ------------------------------------------------------------------------

    /// Appends an error.
    pub fn add_error(&mut self, message: Message) -> &mut Self {
        self.errors.push(message);
        self
    }

    /// Appends a warning.
    pub fn add_warning(&mut self, message: Message) -> &mut Self {
        self.warnings.push(message);
        self
    }

    /// Appends an info.
    pub fn add_info(&mut self, message: Message) -> &mut Self {
        self.infos.push(message);
        self
    }

    /// Appends a message under the given severity.
    pub fn add(&mut self, severity: Severity, message: Message) -> &mut Self {
        self.list_mut(severity).push(message);
        self
    }

    /// Appends every message of `other`, keeping its order.
    pub fn extend(&mut self, other: Messages) -> &mut Self {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.infos.extend(other.infos);
        self
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Returns `true` if at least one error was added.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if at least one warning was added.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns `true` if at least one info was added.
    pub fn has_infos(&self) -> bool {
        !self.infos.is_empty()
    }

    /// Returns `true` if an error matches `message` on field, code and template.
    pub fn has_error_like(&self, message: &Message) -> bool {
        self.errors.iter().any(|m| m.is_like(message))
    }

    /// Returns `true` if a warning matches `message` on field, code and template.
    pub fn has_warning_like(&self, message: &Message) -> bool {
        self.warnings.iter().any(|m| m.is_like(message))
    }

    /// Returns `true` if an info matches `message` on field, code and template.
    pub fn has_info_like(&self, message: &Message) -> bool {
        self.infos.iter().any(|m| m.is_like(message))
    }

    /// Returns `true` if an error is exactly equal to `message`, params included.
    pub fn contains_error(&self, message: &Message) -> bool {
        self.errors.contains(message)
    }

    /// Errors, in insertion order.
    pub fn errors(&self) -> &[Message] {
        &self.errors
    }

    /// Warnings, in insertion order.
    pub fn warnings(&self) -> &[Message] {
        &self.warnings
    }

    /// Infos, in insertion order.
    pub fn infos(&self) -> &[Message] {
        &self.infos
    }

    /// Messages of one severity, in insertion order.
    pub fn of(&self, severity: Severity) -> &[Message] {
        match severity {
            Severity::Error => &self.errors,
            Severity::Warning => &self.warnings,
            Severity::Info => &self.infos,
        }
    }

    /// Number of errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Total number of messages across all severities.
    pub fn len(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.infos.len()
    }

    /// Returns `true` if nothing was added.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates errors, then warnings, then infos.
    pub fn iter(&self) -> impl Iterator<Item = (Severity, &Message)> + '_ {
        Severity::ALL
            .into_iter()
            .flat_map(move |severity| self.of(severity).iter().map(move |m| (severity, m)))
    }

    /// Rendered text of every templated message of one severity.
    pub fn rendered(&self, severity: Severity) -> Vec<String> {
        self.of(severity).iter().filter_map(Message::rendered).collect()
    }

    /// Report of the collection as a JSON value.
    ///
    /// Each entry carries its severity, field, code and rendered text.
    pub fn to_json_value(&self) -> serde_json::Value {
        let entries: Vec<serde_json::Value> = self
            .iter()
            .map(|(severity, m)| {
                serde_json::json!({
                    "severity": severity,
                    "field": m.field_name(),
                    "code": m.code(),
                    "message": m.rendered(),
                })
            })
            .collect();

        serde_json::json!({
            "valid": !self.has_errors(),
            "error_count": self.error_count(),
            "messages": entries,
        })
    }

    fn list_mut(&mut self, severity: Severity) -> &mut Vec<Message> {
        match severity {
            Severity::Error => &mut self.errors,
            Severity::Warning => &mut self.warnings,
            Severity::Info => &mut self.infos,
        }
    }
}

impl fmt::Display for Messages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (severity, message)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{severity}: {message}")?;
        }
        Ok(())
    }
}
