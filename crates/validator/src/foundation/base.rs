//! Guard and value-extraction configuration shared by tree validators.
//!
//! Every node of a validator tree answers two questions before it does any
//! work:
//!
//! 1. Does this node apply to the object? ([`Conditional`], evaluated on the
//!    raw context.)
//! 2. Which value does it inspect? ([`ValueSource`], either the context
//!    itself or the result of an extractor.)
//!
//! [`ValidatorBase`] bundles both and is embedded in each concrete validator.

use std::fmt;
use std::sync::Arc;

/// Predicate deciding whether a validator applies to a context.
pub type Guard<C> = Arc<dyn Fn(&C) -> bool + Send + Sync>;

/// Function deriving the validated subject from a context.
pub type Extractor<C, S> = Arc<dyn Fn(&C) -> &S + Send + Sync>;

// ============================================================================
// CONDITIONAL
// ============================================================================

/// Optional guard evaluated on the raw context.
pub struct Conditional<C: ?Sized> {
    condition: Option<Guard<C>>,
}

impl<C: ?Sized> Conditional<C> {
    /// A conditional without a guard; it permits every context.
    pub fn always() -> Self {
        Self { condition: None }
    }

    /// A conditional guarded by `guard`.
    pub fn new<G>(guard: G) -> Self
    where
        G: Fn(&C) -> bool + Send + Sync + 'static,
    {
        let guard: Guard<C> = Arc::new(guard);
        Self {
            condition: Some(guard),
        }
    }

    /// Returns `true` if there is no guard or the guard accepts `context`.
    pub fn permits(&self, context: &C) -> bool {
        self.condition.as_ref().is_none_or(|guard| guard(context))
    }

    /// The configured guard, if any.
    pub fn condition(&self) -> Option<&Guard<C>> {
        self.condition.as_ref()
    }

    /// Returns `true` if a guard is configured.
    pub fn is_guarded(&self) -> bool {
        self.condition.is_some()
    }
}

impl<C: ?Sized> Clone for Conditional<C> {
    fn clone(&self) -> Self {
        Self {
            condition: self.condition.clone(),
        }
    }
}

impl<C: ?Sized> Default for Conditional<C> {
    fn default() -> Self {
        Self::always()
    }
}

impl<C: ?Sized> fmt::Debug for Conditional<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conditional")
            .field("condition", &self.condition.as_ref().map(|_| "<function>"))
            .finish()
    }
}

// ============================================================================
// VALUE SOURCE
// ============================================================================

/// Where a validator takes its subject from.
pub struct ValueSource<C: ?Sized, S: ?Sized> {
    source: Source<C, S>,
}

enum Source<C: ?Sized, S: ?Sized> {
    Context(fn(&C) -> &S),
    Provided(Extractor<C, S>),
}

fn identity<T: ?Sized>(value: &T) -> &T {
    value
}

impl<T: ?Sized> ValueSource<T, T> {
    /// The context itself is the subject.
    pub fn context() -> Self {
        Self {
            source: Source::Context(identity::<T>),
        }
    }
}

impl<C: ?Sized, S: ?Sized> ValueSource<C, S> {
    /// The subject is produced by `extractor`.
    pub fn provided<F>(extractor: F) -> Self
    where
        F: Fn(&C) -> &S + Send + Sync + 'static,
    {
        let extractor: Extractor<C, S> = Arc::new(extractor);
        Self {
            source: Source::Provided(extractor),
        }
    }

    /// Derives the subject from `context`.
    pub fn subject<'a>(&self, context: &'a C) -> &'a S {
        match &self.source {
            Source::Context(identity) => identity(context),
            Source::Provided(extractor) => extractor(context),
        }
    }

    /// The configured extractor; `None` when the context is the subject.
    pub fn provider(&self) -> Option<&Extractor<C, S>> {
        match &self.source {
            Source::Context(_) => None,
            Source::Provided(extractor) => Some(extractor),
        }
    }

    /// Returns `true` if an extractor is configured.
    pub fn is_provided(&self) -> bool {
        matches!(self.source, Source::Provided(_))
    }
}

impl<C: ?Sized, S: ?Sized> Clone for ValueSource<C, S> {
    fn clone(&self) -> Self {
        let source = match &self.source {
            Source::Context(identity) => Source::Context(*identity),
            Source::Provided(extractor) => Source::Provided(Arc::clone(extractor)),
        };
        Self { source }
    }
}

impl<T: ?Sized> Default for ValueSource<T, T> {
    fn default() -> Self {
        Self::context()
    }
}

impl<C: ?Sized, S: ?Sized> fmt::Debug for ValueSource<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            Source::Context(_) => f.write_str("ValueSource::Context"),
            Source::Provided(_) => f.write_str("ValueSource::Provided(<function>)"),
        }
    }
}

// ============================================================================
// VALIDATOR BASE
// ============================================================================

/// Guard plus value source, embedded in every tree validator.
///
/// `C` is the context the validator is invoked with, `S` the subject its body
/// inspects. The guard always sees `C`.
///
/// # Examples
///
/// ```rust
/// use valtree::foundation::ValidatorBase;
///
/// struct Person { name: String, adult: bool }
///
/// let base = ValidatorBase::on(|p: &Person| &p.name).when(|p: &Person| p.adult);
/// let person = Person { name: "Ada".into(), adult: true };
///
/// assert!(base.permits(&person));
/// assert_eq!(base.subject(&person), "Ada");
/// ```
pub struct ValidatorBase<C: ?Sized, S: ?Sized = C> {
    conditional: Conditional<C>,
    source: ValueSource<C, S>,
}

impl<T: ?Sized> ValidatorBase<T, T> {
    /// Unguarded base whose subject is the context itself.
    pub fn new() -> Self {
        Self {
            conditional: Conditional::always(),
            source: ValueSource::context(),
        }
    }
}

impl<C: ?Sized, S: ?Sized> ValidatorBase<C, S> {
    /// Unguarded base whose subject is produced by `extractor`.
    pub fn on<F>(extractor: F) -> Self
    where
        F: Fn(&C) -> &S + Send + Sync + 'static,
    {
        Self {
            conditional: Conditional::always(),
            source: ValueSource::provided(extractor),
        }
    }

    /// Replaces the guard.
    #[must_use = "builder methods must be chained or built"]
    pub fn when<G>(mut self, guard: G) -> Self
    where
        G: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.conditional = Conditional::new(guard);
        self
    }

    /// Evaluates the guard on the raw context.
    pub fn permits(&self, context: &C) -> bool {
        self.conditional.permits(context)
    }

    /// Derives the subject from the context.
    pub fn subject<'a>(&self, context: &'a C) -> &'a S {
        self.source.subject(context)
    }

    /// The configured guard, if any.
    pub fn condition(&self) -> Option<&Guard<C>> {
        self.conditional.condition()
    }

    /// The configured extractor, if any.
    pub fn value_provider(&self) -> Option<&Extractor<C, S>> {
        self.source.provider()
    }

    /// The guard half of this base.
    pub fn conditional(&self) -> &Conditional<C> {
        &self.conditional
    }

    /// The extraction half of this base.
    pub fn source(&self) -> &ValueSource<C, S> {
        &self.source
    }
}

impl<T: ?Sized> Default for ValidatorBase<T, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized, S: ?Sized> Clone for ValidatorBase<C, S> {
    fn clone(&self) -> Self {
        Self {
            conditional: self.conditional.clone(),
            source: self.source.clone(),
        }
    }
}

impl<C: ?Sized, S: ?Sized> fmt::Debug for ValidatorBase<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorBase")
            .field("conditional", &self.conditional)
            .field("source", &self.source)
            .finish()
    }
}
