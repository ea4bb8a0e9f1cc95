//! Numeric invariants checked once, at construction.
//!
//! A [`Constrained<T, C>`] holds a value of `T` that has passed the check of
//! the marker `C`. Code receiving one never needs to re-validate it.
//!
//! Two markers are provided:
//!
//! - [`NonNegative`]: zero or greater. Every measured power in a production
//!   snapshot carries it.
//! - [`StrictlyPositive`]: greater than zero. Used for snapshot totals that
//!   are about to become a divisor, and for line widths.
//!
//! Both reject `NaN`. Custom markers only need a [`Constraint<T>`] impl.

mod non_negative;
mod strictly_positive;

use std::{iter::Sum, marker::PhantomData, ops::Add};

use num_traits::Zero;
use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// Check applied by a marker type before a [`Constrained`] value exists.
pub trait Constraint<T> {
    /// Accepts or rejects `value`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a value was rejected by a [`Constraint`].
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

pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value of `T` known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use energy_mix::support::constraint::{Constrained, NonNegative};
/// use uom::si::{f64::Power, power::megawatt};
///
/// let solar = Constrained::<_, NonNegative>::new(Power::new::<megawatt>(1498.0)).unwrap();
/// assert_eq!(solar.as_ref().get::<megawatt>(), 1498.0);
///
/// assert!(Constrained::<_, NonNegative>::new(Power::new::<megawatt>(-1.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the violation reported by `C`.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Sum of values whose constraint survives addition, starting from zero.
impl<T, C> Sum for Constrained<T, C>
where
    C: Constraint<T>,
    Constrained<T, C>: Add<Output = Self> + Zero,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, value| total + value)
    }
}
