use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values greater than zero.
///
/// ```
/// use energy_mix::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Power, power::megawatt};
///
/// let total = StrictlyPositive::new(Power::new::<megawatt>(9729.0)).unwrap();
/// assert_eq!(total.into_inner().get::<megawatt>(), 9729.0);
///
/// assert!(StrictlyPositive::new(0_usize).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Wraps `value` if it is greater than zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Zero`], [`ConstraintError::Negative`] or
    /// [`ConstraintError::NotANumber`].
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Power, power::megawatt};

    #[test]
    fn line_widths() {
        let x = Constrained::<usize, StrictlyPositive>::new(10).unwrap();
        assert_eq!(x.into_inner(), 10);

        assert_eq!(StrictlyPositive::new(0_usize), Err(ConstraintError::Zero));
    }

    #[test]
    fn totals() {
        assert!(StrictlyPositive::new(Power::new::<megawatt>(9729.0)).is_ok());
        assert_eq!(
            StrictlyPositive::new(Power::new::<megawatt>(0.0)),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            StrictlyPositive::new(Power::new::<megawatt>(-2.0)),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            StrictlyPositive::new(Power::new::<megawatt>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
    }
}
