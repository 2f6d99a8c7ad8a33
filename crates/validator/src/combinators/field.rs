//! FIELD combinator - validates a value extracted from a parent object
//!
//! [`Field`] is the free-standing form of the value extraction every tree
//! validator embeds. The inner validator sees only the extracted value.

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::Validate;
use crate::messages::Messages;

// ============================================================================
// FIELD COMBINATOR
// ============================================================================

/// Validates the value an accessor extracts from the input.
///
/// # Type Parameters
///
/// * `T` - The parent type
/// * `U` - The extracted type (can be `?Sized`)
/// * `V` - The validator type
/// * `F` - The accessor function type
pub struct Field<T: ?Sized, U: ?Sized, V, F> {
    validator: V,
    accessor: F,
    _phantom: PhantomData<fn(&T) -> &U>,
}

impl<T: ?Sized, U: ?Sized, V, F> Field<T, U, V, F> {
    /// Creates a new field validator.
    pub fn new(validator: V, accessor: F) -> Self {
        Self {
            validator,
            accessor,
            _phantom: PhantomData,
        }
    }

    /// Returns a reference to the inner validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Returns a reference to the accessor function.
    pub fn accessor(&self) -> &F {
        &self.accessor
    }

    /// Extracts the validator and accessor.
    pub fn into_parts(self) -> (V, F) {
        (self.validator, self.accessor)
    }
}

// Clone impl - manual because T and U need not be Clone
impl<T: ?Sized, U: ?Sized, V: Clone, F: Clone> Clone for Field<T, U, V, F> {
    fn clone(&self) -> Self {
        Self {
            validator: self.validator.clone(),
            accessor: self.accessor.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized, U: ?Sized, V: fmt::Debug, F> fmt::Debug for Field<T, U, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("validator", &self.validator)
            .field("accessor", &"<function>")
            .finish()
    }
}

impl<T, U, V, F> Validate for Field<T, U, V, F>
where
    T: ?Sized,
    U: ?Sized,
    V: Validate<Input = U>,
    F: Fn(&T) -> &U,
{
    type Input = T;

    fn validate<'m>(&self, input: &Self::Input, messages: &'m mut Messages) -> &'m mut Messages {
        self.validator.validate((self.accessor)(input), messages)
    }
}

/// Creates a field validator.
pub fn field<T, U, V, F>(validator: V, accessor: F) -> Field<T, U, V, F>
where
    T: ?Sized,
    U: ?Sized,
    V: Validate<Input = U>,
    F: Fn(&T) -> &U,
{
    Field::new(validator, accessor)
}
