//! Reference state, gas constant, and validity range of the correlations.

use uom::si::{
    f64::{MolarHeatCapacity, Pressure, ThermodynamicTemperature},
    molar_heat_capacity::joule_per_kelvin_mole,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

use super::RangeError;

pub(crate) const T0_KELVIN: f64 = 273.15;
pub(crate) const P0_PASCAL: f64 = 101_325.0;
pub(crate) const R_M: f64 = 8.314_472;
pub(crate) const T_MIN_KELVIN: f64 = 200.0;
pub(crate) const T_MAX_KELVIN: f64 = 3300.0;

/// Reference temperature `T0 = 273.15 K`, where enthalpy is zero.
#[must_use]
pub fn reference_temperature() -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(T0_KELVIN)
}

/// Reference pressure `p0 = 0.101325 MPa`, where entropy is zero at `T0`.
#[must_use]
pub fn reference_pressure() -> Pressure {
    Pressure::new::<pascal>(P0_PASCAL)
}

/// Universal gas constant `R_m = 8.314472 J/(mol·K)`.
#[must_use]
pub fn universal_gas_constant() -> MolarHeatCapacity {
    MolarHeatCapacity::new::<joule_per_kelvin_mole>(R_M)
}

/// Lowest temperature covered by the correlations, 200 K.
#[must_use]
pub fn min_temperature() -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(T_MIN_KELVIN)
}

/// Highest temperature covered by the correlations, 3300 K.
#[must_use]
pub fn max_temperature() -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(T_MAX_KELVIN)
}

/// Checks that a temperature lies within `[200 K, 3300 K]`.
///
/// # Errors
///
/// Returns [`RangeError::Temperature`] if the temperature is outside the
/// range or is not a number.
pub fn check_temperature(
    temperature: ThermodynamicTemperature,
) -> Result<ThermodynamicTemperature, RangeError> {
    if (T_MIN_KELVIN..=T_MAX_KELVIN).contains(&temperature.get::<kelvin>()) {
        Ok(temperature)
    } else {
        Err(RangeError::Temperature { temperature })
    }
}

/// Checks that a pressure is strictly positive and finite.
///
/// # Errors
///
/// Returns [`RangeError::Pressure`] if the pressure is zero, negative,
/// infinite, or not a number.
pub fn check_pressure(
    pressure: Pressure,
) -> Result<Constrained<Pressure, StrictlyPositive>, RangeError> {
    let checked = StrictlyPositive::new(pressure)
        .map_err(|source| RangeError::Pressure { pressure, source })?;
    if pressure.is_infinite() {
        return Err(RangeError::Pressure {
            pressure,
            source: ConstraintError::AboveMaximum,
        });
    }
    Ok(checked)
}

/// Returns `T / T0` for a temperature already checked against the range.
pub(crate) fn reduced_temperature(temperature: ThermodynamicTemperature) -> f64 {
    temperature.get::<kelvin>() / T0_KELVIN
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{pressure::megapascal, thermodynamic_temperature::degree_celsius};

    use crate::support::constraint::ConstraintError;

    #[test]
    fn reference_values() {
        assert_relative_eq!(
            reference_pressure().get::<megapascal>(),
            0.101_325,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            reference_temperature().get::<degree_celsius>(),
            0.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            universal_gas_constant().get::<joule_per_kelvin_mole>(),
            8.314_472
        );
    }

    #[test]
    fn temperature_bounds_are_inclusive() {
        assert!(check_temperature(min_temperature()).is_ok());
        assert!(check_temperature(max_temperature()).is_ok());
        assert!(check_temperature(ThermodynamicTemperature::new::<kelvin>(1000.0)).is_ok());
    }

    #[test]
    fn temperature_outside_range_fails() {
        for t in [0.0, 199.999, 3300.001, 5000.0, f64::NAN] {
            let result = check_temperature(ThermodynamicTemperature::new::<kelvin>(t));
            assert!(matches!(result, Err(RangeError::Temperature { .. })), "T = {t}");
        }
    }

    #[test]
    fn pressure_must_be_positive() {
        assert!(check_pressure(Pressure::new::<megapascal>(2.0)).is_ok());
        assert!(matches!(
            check_pressure(Pressure::new::<pascal>(0.0)),
            Err(RangeError::Pressure {
                source: ConstraintError::Zero,
                ..
            })
        ));
        assert!(matches!(
            check_pressure(Pressure::new::<pascal>(-1.0)),
            Err(RangeError::Pressure {
                source: ConstraintError::Negative,
                ..
            })
        ));
        assert!(matches!(
            check_pressure(Pressure::new::<pascal>(f64::NAN)),
            Err(RangeError::Pressure {
                source: ConstraintError::NotANumber,
                ..
            })
        ));
        assert!(matches!(
            check_pressure(Pressure::new::<pascal>(f64::INFINITY)),
            Err(RangeError::Pressure {
                source: ConstraintError::AboveMaximum,
                ..
            })
        ));
    }
}
