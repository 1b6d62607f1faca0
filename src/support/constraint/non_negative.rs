use std::{cmp::Ordering, marker::PhantomData};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Marker for values that are zero or greater.
///
/// Voltage, core losses and loading factor use this constraint.
///
/// # Examples
///
/// ```
/// use twine_shunt_machine::support::constraint::NonNegative;
/// use uom::si::{f64::Power, power::watt};
///
/// let cl = NonNegative::new(Power::new::<watt>(0.0)).unwrap();
/// assert_eq!(cl.into_inner().get::<watt>(), 0.0);
///
/// assert!(NonNegative::new(-7.0).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or `NaN`.
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }

    /// Returns zero, which always satisfies the constraint.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, Self> {
        Constrained {
            value: T::zero(),
            _marker: PhantomData,
        }
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
