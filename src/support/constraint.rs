//! Numeric constraints checked once, at construction.
//!
//! A [`Constrained<T, C>`] holds a value of type `T` that has passed the
//! check of marker `C`. Downstream code can rely on the invariant without
//! re-checking it.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: zero or greater
//! - [`StrictlyPositive`]: greater than zero
//!
//! Both reject `NaN`. Both work with plain numbers and with [`uom`]
//! quantities, since they only need [`PartialOrd`] and [`num_traits::Zero`].
//!
//! # Extending
//!
//! Implement [`Constraint<T>`] for a zero-sized marker type to define a new
//! invariant.

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A numeric invariant enforced when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// Checks that `value` satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// The reason a value failed a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use twine_shunt_machine::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{electrical_resistance::ohm, f64::ElectricalResistance};
///
/// let r = Constrained::<_, StrictlyPositive>::new(ElectricalResistance::new::<ohm>(110.0))
///     .unwrap();
/// assert_eq!(r.into_inner().get::<ohm>(), 110.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
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
