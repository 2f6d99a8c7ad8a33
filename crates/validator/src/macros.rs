//! Macros for leaf rules with minimal boilerplate.
//!
//! Every leaf rule wraps a [`Leaf`](crate::validators::Leaf) in a field named
//! `leaf` and shares the same builder surface. [`leaf_rule!`] generates it.

// ============================================================================
// LEAF RULE MACRO
// ============================================================================

/// Generates the shared builders and accessors of a leaf rule.
///
/// The rule must be declared as `struct Name<C: ?Sized, S: ?Sized = C>` with a
/// `leaf: Leaf<C, S>` field.
///
/// ```rust,ignore
/// pub struct Required<C: ?Sized, S: ?Sized = C> {
///     leaf: Leaf<C, S>,
/// }
///
/// leaf_rule!(Required);
/// ```
macro_rules! leaf_rule {
    ($name:ident) => {
        impl<C: ?Sized, S: ?Sized> $name<C, S> {
            /// Only applies this rule to contexts accepted by `guard`.
            ///
            /// The guard sees the raw context, not the extracted subject.
            #[must_use = "builder methods must be chained or built"]
            pub fn when<G>(mut self, guard: G) -> Self
            where
                G: Fn(&C) -> bool + Send + Sync + 'static,
            {
                self.leaf = self.leaf.when(guard);
                self
            }

            /// Replaces the message emitted on failure.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_message(mut self, message: $crate::Message) -> Self {
                self.leaf = self.leaf.with_message(message);
                self
            }

            /// Sets the severity the failure message is recorded under.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_severity(mut self, severity: $crate::Severity) -> Self {
                self.leaf = self.leaf.with_severity(severity);
                self
            }

            /// Message template emitted on failure.
            pub fn message(&self) -> &$crate::Message {
                self.leaf.message()
            }

            /// Severity of the failure message.
            pub fn severity(&self) -> $crate::Severity {
                self.leaf.severity()
            }

            /// The configured guard, if any.
            pub fn condition(&self) -> Option<&$crate::foundation::Guard<C>> {
                self.leaf.base().condition()
            }

            /// The configured extractor, if any.
            pub fn value_provider(&self) -> Option<&$crate::foundation::Extractor<C, S>> {
                self.leaf.base().value_provider()
            }
        }
    };
}

pub(crate) use leaf_rule;
