use std::{cmp::Ordering, marker::PhantomData, ops::Add};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Every measured power in a production snapshot carries this constraint, so
/// a source may report zero output but never a negative or `NaN` one.
///
/// # Examples
///
/// ```
/// use energy_mix::support::constraint::{Constrained, NonNegative};
/// use uom::si::{f64::Power, power::megawatt};
///
/// let idle = NonNegative::new(Power::new::<megawatt>(0.0)).unwrap();
/// assert_eq!(idle.into_inner().get::<megawatt>(), 0.0);
///
/// let running = Constrained::<_, NonNegative>::new(Power::new::<megawatt>(2829.0)).unwrap();
/// assert_eq!(running.as_ref().get::<megawatt>(), 2829.0);
///
/// assert!(NonNegative::new(Power::new::<megawatt>(-1.0)).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Wraps `value` if it is zero or greater.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Negative`] or [`ConstraintError::NotANumber`].
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Zero, the starting point when merging sources into a bucket.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained::<T, NonNegative>::zero()
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

/// Adds two `Constrained<T, NonNegative>` values.
///
/// Summing two non-negative values yields a non-negative result for the
/// numeric types used here (`f64`, `usize`, `uom::Quantity`).
/// The invariant is checked in debug builds.
///
/// # Panics
///
/// Panics in debug builds if the sum is unexpectedly negative.
impl<T> Add for Constrained<T, NonNegative>
where
    T: Add<Output = T> + PartialOrd + Zero,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let value = self.value + rhs.value;
        debug_assert!(
            value >= T::zero(),
            "Addition produced a negative value, violating NonNegative bound invariant"
        );
        Self {
            value,
            _marker: PhantomData,
        }
    }
}

impl<T> Zero for Constrained<T, NonNegative>
where
    T: PartialOrd + Zero,
{
    fn zero() -> Self {
        Self {
            value: T::zero(),
            _marker: PhantomData,
        }
    }

    fn is_zero(&self) -> bool {
        self.value == T::zero()
    }
}
