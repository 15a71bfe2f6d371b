//! Type-level numeric constraints.
//!
//! A [`Constrained<T, C>`] value can only be built through its constraint's
//! check, so code holding one never has to re-validate it. The converter only
//! needs non-negativity, provided by the [`NonNegative`] marker.
//!
//! # Extending
//!
//! Other invariants can be expressed by implementing [`Constraint<T>`] for a
//! zero-sized marker type.

mod non_negative;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value is not a number")]
    NotANumber,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use length_converter::support::constraint::{Constrained, NonNegative};
///
/// let n = Constrained::<_, NonNegative>::new(2.5).unwrap();
/// assert_eq!(n.into_inner(), 2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Constructs a constrained value the caller knows to be valid.
    ///
    /// The constraint is checked in debug builds only.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the value violates the constraint.
    pub(crate) fn new_unchecked(value: T) -> Self {
        debug_assert!(
            C::check(&value).is_ok(),
            "value passed to new_unchecked violates its constraint"
        );
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
