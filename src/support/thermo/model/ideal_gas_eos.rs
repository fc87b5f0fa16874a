//! Ideal gas equation of state, `p = ρ·R·T`, for mixture states.
//!
//! `R` is the specific gas constant of the state's mixture, so the same
//! density and temperature give a higher pressure for a lighter gas.

use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    temperature_interval, thermodynamic_temperature,
};

use crate::gas::Mixture;
use crate::support::thermo::State;

/// Computes the pressure of a state.
#[must_use]
pub(crate) fn pressure(state: &State<Mixture>) -> Pressure {
    state.density * state.fluid.specific_gas_constant() * state.temperature
}

/// Computes the temperature of a mixture at the given pressure and density.
///
/// The quotient `p / (ρ·R)` is a temperature interval in `uom`, so it is
/// converted to an absolute temperature by magnitude.
#[must_use]
pub(crate) fn temperature(
    mixture: &Mixture,
    pressure: Pressure,
    density: MassDensity,
) -> ThermodynamicTemperature {
    let temperature = pressure / (density * mixture.specific_gas_constant());
    ThermodynamicTemperature::new::<thermodynamic_temperature::kelvin>(
        temperature.get::<temperature_interval::kelvin>(),
    )
}
