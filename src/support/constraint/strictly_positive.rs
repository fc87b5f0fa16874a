use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Works with any `T: PartialOrd + Zero`, which includes `f64` and every
/// `uom` quantity. Pressures handed to the property engine are checked with
/// this marker before any logarithm or division touches them.
///
/// # Examples
///
/// ```
/// use vdi4670::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Pressure, pressure::megapascal};
///
/// let p = StrictlyPositive::new(Pressure::new::<megapascal>(0.1)).unwrap();
/// assert!(p.into_inner().get::<megapascal>() > 0.0);
///
/// assert!(StrictlyPositive::new(Pressure::new::<megapascal>(0.0)).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
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

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{MolarMass, Pressure},
        molar_mass::gram_per_mole,
        pressure::{bar, pascal},
    };

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0).is_ok());
        assert!(StrictlyPositive::new(1e-300).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn pressures() {
        assert!(StrictlyPositive::new(Pressure::new::<bar>(1.0)).is_ok());
        assert!(StrictlyPositive::new(Pressure::new::<pascal>(0.0)).is_err());
        assert!(StrictlyPositive::new(Pressure::new::<pascal>(-2.0)).is_err());
    }

    #[test]
    fn molar_masses() {
        let m = StrictlyPositive::new(MolarMass::new::<gram_per_mole>(28.01348)).unwrap();
        assert_relative_eq!(m.as_ref().get::<gram_per_mole>(), 28.01348);
    }
}
