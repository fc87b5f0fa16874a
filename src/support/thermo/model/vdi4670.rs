//! VDI 4670 ideal gas mixture model.
//!
//! `Vdi4670` exposes the [`gas`](crate::gas) correlations through the
//! capability traits, with a [`Mixture`] as the fluid of every state.
//!
//! # Assumptions
//!
//! - Ideal gas equation of state: `p = ρ·R_mix·T`
//! - Ideal mixing: mole-weighted heat capacity and enthalpy, plus the ideal
//!   entropy of mixing
//! - Temperatures between 200 K and 3300 K; other temperatures are rejected
//!
//! # Reference State
//!
//! Enthalpy is zero at 273.15 K and entropy is zero at 273.15 K and
//! 0.101325 MPa for every pure component.
//!
//! # Building states
//!
//! States can be built from temperature, pressure, and density pairs
//! directly. States given pressure with enthalpy or entropy are found by
//! bisection on temperature over the validated range, configured with
//! [`Vdi4670Config`].

mod config;
mod error;
mod inverse;

pub use config::Vdi4670Config;
pub use error::StateFromError;

use tracing::{debug, trace};
use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{MassDensity, Pressure, SpecificHeatCapacity, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::gas::{
    Mixture,
    constants::{check_pressure, check_temperature, max_temperature, min_temperature},
};
use crate::support::{
    constraint::StrictlyPositive,
    thermo::{
        PropertyError, State,
        capability::{
            HasCp, HasCv, HasEnthalpy, HasEntropy, HasInternalEnergy, HasPressure, StateFrom,
            ThermoModel,
        },
    },
    units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy},
};

use super::ideal_gas_eos;

use inverse::{PropertyModel, Target, TargetProblem};

/// Thermodynamic model of VDI 4670 gas mixtures.
///
/// ```
/// use uom::si::{
///     f64::{Pressure, ThermodynamicTemperature},
///     pressure::bar,
///     thermodynamic_temperature::degree_celsius,
/// };
/// use vdi4670::gas::Mixture;
/// use vdi4670::support::thermo::{
///     State,
///     capability::{HasEnthalpy, StateFrom},
///     model::Vdi4670,
/// };
///
/// let thermo = Vdi4670::new();
/// let p = Pressure::new::<bar>(1.0);
/// let t = ThermodynamicTemperature::new::<degree_celsius>(20.0);
///
/// let air: State<Mixture> = thermo.state_from((Mixture::standard_air(), t, p))?;
/// let h = thermo.enthalpy(&air)?;
///
/// let back: State<Mixture> = thermo.state_from((Mixture::standard_air(), p, h))?;
/// assert!((back.temperature.get::<degree_celsius>() - 20.0).abs() < 1e-6);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vdi4670 {
    config: Vdi4670Config,
}

impl Vdi4670 {
    /// Creates a model with the default solver settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model with the given solver settings.
    #[must_use]
    pub fn with_config(config: Vdi4670Config) -> Self {
        Self { config }
    }

    /// Returns the solver settings.
    #[must_use]
    pub fn config(&self) -> &Vdi4670Config {
        &self.config
    }

    /// Finds the temperature at which `mixture` reaches `target` at `pressure`.
    fn solve_temperature(
        &self,
        mixture: &Mixture,
        pressure: Pressure,
        target: Target,
    ) -> Result<ThermodynamicTemperature, StateFromError> {
        let pressure = check_pressure(pressure)?.into_inner();

        let model = PropertyModel::new(mixture, pressure, target);
        let (t_min, t_max) = (min_temperature(), max_temperature());

        // Enthalpy and entropy both increase with temperature at fixed pressure.
        let min = model.call(&t_min)?;
        let max = model.call(&t_max)?;
        let goal = target.value();
        if !(min..=max).contains(&goal) {
            return Err(StateFromError::OutOfRange {
                property: target.name(),
                target: goal,
                min,
                max,
            });
        }

        let problem = TargetProblem::new(target);

        let solution = bisection::solve(
            &model,
            &problem,
            [t_min.get::<kelvin>(), t_max.get::<kelvin>()],
            &self.config.bisection(),
            |event: &bisection::Event<'_, _, _>| {
                // Only temperatures outside the validated range fail, and the
                // bracket never leaves it. Treat a failure as overshooting.
                if event.result().is_err() {
                    return Some(bisection::Action::assume_positive());
                }
                None
            },
        )?;

        if solution.status != bisection::Status::Converged {
            return Err(StateFromError::MaxIters {
                residual: solution.residual,
                iters: solution.iters,
            });
        }

        debug!(
            property = target.name(),
            temperature_k = solution.x,
            iters = solution.iters,
            "solved temperature",
        );
        Ok(ThermodynamicTemperature::new::<kelvin>(solution.x))
    }
}

impl ThermoModel for Vdi4670 {
    type Fluid = Mixture;
}

impl HasPressure for Vdi4670 {
    /// Computes pressure with `p = ρ·R_mix·T`.
    fn pressure(&self, state: &State<Mixture>) -> Result<Pressure, PropertyError> {
        Ok(ideal_gas_eos::pressure(state))
    }
}

impl HasInternalEnergy for Vdi4670 {
    /// Computes internal energy with `u = h − R_mix·T`.
    fn internal_energy(
        &self,
        state: &State<Mixture>,
    ) -> Result<SpecificInternalEnergy, PropertyError> {
        Ok(state.fluid.internal_energy(state.temperature)?)
    }
}

impl HasEnthalpy for Vdi4670 {
    fn enthalpy(&self, state: &State<Mixture>) -> Result<SpecificEnthalpy, PropertyError> {
        Ok(state.fluid.enthalpy(state.temperature)?)
    }
}

impl HasEntropy for Vdi4670 {
    /// Evaluates entropy at the pressure given by the equation of state.
    fn entropy(&self, state: &State<Mixture>) -> Result<SpecificEntropy, PropertyError> {
        let p = self.pressure(state)?;
        Ok(state.fluid.entropy(p, state.temperature)?)
    }
}

impl HasCp for Vdi4670 {
    fn cp(&self, state: &State<Mixture>) -> Result<SpecificHeatCapacity, PropertyError> {
        Ok(state.fluid.heat_capacity(state.temperature)?)
    }
}

impl HasCv for Vdi4670 {
    /// Computes `cv = cp − R_mix`.
    fn cv(&self, state: &State<Mixture>) -> Result<SpecificHeatCapacity, PropertyError> {
        Ok(state.fluid.isochoric_heat_capacity(state.temperature)?)
    }
}

impl StateFrom<(Mixture, ThermodynamicTemperature, Pressure)> for Vdi4670 {
    type Error = StateFromError;

    fn state_from(
        &self,
        (fluid, temperature, pressure): (Mixture, ThermodynamicTemperature, Pressure),
    ) -> Result<State<Mixture>, Self::Error> {
        let density = fluid.density(pressure, temperature)?;

        Ok(State {
            temperature,
            density,
            fluid,
        })
    }
}

impl StateFrom<(Mixture, ThermodynamicTemperature, MassDensity)> for Vdi4670 {
    type Error = StateFromError;

    fn state_from(
        &self,
        (fluid, temperature, density): (Mixture, ThermodynamicTemperature, MassDensity),
    ) -> Result<State<Mixture>, Self::Error> {
        let temperature = check_temperature(temperature)?;
        let density = check_density(density)?;

        Ok(State {
            temperature,
            density,
            fluid,
        })
    }
}

impl StateFrom<(Mixture, Pressure, MassDensity)> for Vdi4670 {
    type Error = StateFromError;

    fn state_from(
        &self,
        (fluid, pressure, density): (Mixture, Pressure, MassDensity),
    ) -> Result<State<Mixture>, Self::Error> {
        let pressure = check_pressure(pressure)?.into_inner();
        let density = check_density(density)?;
        let temperature = check_temperature(ideal_gas_eos::temperature(&fluid, pressure, density))?;

        Ok(State {
            temperature,
            density,
            fluid,
        })
    }
}

impl StateFrom<(Mixture, Pressure, SpecificEnthalpy)> for Vdi4670 {
    type Error = StateFromError;

    fn state_from(
        &self,
        (fluid, pressure, enthalpy): (Mixture, Pressure, SpecificEnthalpy),
    ) -> Result<State<Mixture>, Self::Error> {
        trace!(%fluid, ?pressure, ?enthalpy, "state from pressure and enthalpy");
        let temperature = self.solve_temperature(&fluid, pressure, Target::Enthalpy(enthalpy))?;
        let density = fluid.density(pressure, temperature)?;

        Ok(State {
            temperature,
            density,
            fluid,
        })
    }
}

impl StateFrom<(Mixture, Pressure, SpecificEntropy)> for Vdi4670 {
    type Error = StateFromError;

    fn state_from(
        &self,
        (fluid, pressure, entropy): (Mixture, Pressure, SpecificEntropy),
    ) -> Result<State<Mixture>, Self::Error> {
        trace!(%fluid, ?pressure, ?entropy, "state from pressure and entropy");
        let temperature = self.solve_temperature(&fluid, pressure, Target::Entropy(entropy))?;
        let density = fluid.density(pressure, temperature)?;

        Ok(State {
            temperature,
            density,
            fluid,
        })
    }
}

fn check_density(density: MassDensity) -> Result<MassDensity, StateFromError> {
    StrictlyPositive::new(density)
        .map(|density| density.into_inner())
        .map_err(|source| StateFromError::Density { density, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::kilojoule_per_kilogram,
        mass_density::kilogram_per_cubic_meter,
        pressure::{bar, kilopascal, megapascal, pascal},
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::gas::{Component, Fractions, RangeError};

    fn temperature(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(t)
    }

    #[test]
    fn default_fluid_is_standard_air() -> Result<(), StateFromError> {
        let thermo = Vdi4670::new();
        let state: State<Mixture> =
            thermo.state_from((temperature(300.0), Pressure::new::<bar>(1.0)))?;
        assert_eq!(state.fluid, Mixture::standard_air());
        Ok(())
    }

    #[test]
    fn basic_properties_of_air() -> Result<(), Box<dyn std::error::Error>> {
        let thermo = Vdi4670::new();
        let t = ThermodynamicTemperature::new::<degree_celsius>(20.0);
        let p = Pressure::new::<bar>(1.0);
        let state: State<Mixture> = thermo.state_from((Mixture::standard_air(), t, p))?;

        assert_relative_eq!(
            thermo.pressure(&state)?.get::<bar>(),
            1.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            state.density.get::<kilogram_per_cubic_meter>(),
            1.188_16,
            max_relative = 1e-4
        );

        let cp = thermo.cp(&state)?.get::<joule_per_kilogram_kelvin>();
        let cv = thermo.cv(&state)?.get::<joule_per_kilogram_kelvin>();
        let r = state
            .fluid
            .specific_gas_constant()
            .get::<joule_per_kilogram_kelvin>();
        assert_relative_eq!(cp - cv, r, max_relative = 1e-12);

        let h = thermo.enthalpy(&state)?;
        let u = thermo.internal_energy(&state)?;
        assert_relative_eq!(
            (h - u).get::<kilojoule_per_kilogram>(),
            r * 293.15 / 1000.0,
            max_relative = 1e-9
        );
        Ok(())
    }

    #[test]
    fn increase_temperature_at_constant_density() -> Result<(), Box<dyn std::error::Error>> {
        let thermo = Vdi4670::new();
        let state_a: State<Mixture> = thermo.state_from((
            Mixture::reference_test_gas(),
            temperature(500.0),
            Pressure::new::<kilopascal>(300.0),
        ))?;
        let state_b = state_a.with_temperature(temperature(1000.0));

        assert_relative_eq!(
            thermo.pressure(&state_b)?.get::<pascal>(),
            2.0 * thermo.pressure(&state_a)?.get::<pascal>(),
            max_relative = 1e-12
        );
        assert!(thermo.enthalpy(&state_b)? > thermo.enthalpy(&state_a)?);
        assert!(thermo.entropy(&state_b)? > thermo.entropy(&state_a)?);
        Ok(())
    }

    #[test]
    fn increase_density_at_constant_temperature() -> Result<(), PropertyError> {
        let thermo = Vdi4670::new();
        let state_a = State::new(
            temperature(800.0),
            MassDensity::new::<kilogram_per_cubic_meter>(0.5),
            Mixture::pure(Component::CO2),
        );
        let state_b = state_a.with_density(state_a.density * 2.0);

        assert_relative_eq!(
            thermo.pressure(&state_b)?.get::<pascal>(),
            2.0 * thermo.pressure(&state_a)?.get::<pascal>(),
            max_relative = 1e-12
        );
        assert!(thermo.entropy(&state_b)? < thermo.entropy(&state_a)?);
        assert_eq!(thermo.enthalpy(&state_b)?, thermo.enthalpy(&state_a)?);
        Ok(())
    }

    #[test]
    fn state_from_temperature_density() -> Result<(), Box<dyn std::error::Error>> {
        let thermo = Vdi4670::new();
        let rho = MassDensity::new::<kilogram_per_cubic_meter>(2.0);
        let state: State<Mixture> =
            thermo.state_from((Mixture::pure(Component::N2), temperature(600.0), rho))?;
        assert_eq!(state.density, rho);

        let err = thermo
            .state_from((
                Mixture::pure(Component::N2),
                temperature(600.0),
                MassDensity::new::<kilogram_per_cubic_meter>(0.0),
            ))
            .unwrap_err();
        assert!(matches!(err, StateFromError::Density { .. }));

        let err = thermo
            .state_from((Mixture::pure(Component::N2), temperature(100.0), rho))
            .unwrap_err();
        assert!(matches!(
            err,
            StateFromError::Range(RangeError::Temperature { .. })
        ));
        Ok(())
    }

    #[test]
    fn state_from_pressure_density_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let thermo = Vdi4670::new();
        let gas = Mixture::reference_test_gas();
        let p = Pressure::new::<megapascal>(1.5);

        let state_in: State<Mixture> = thermo.state_from((gas, temperature(1200.0), p))?;
        let state_out: State<Mixture> = thermo.state_from((gas, p, state_in.density))?;

        assert_relative_eq!(
            state_out.temperature.get::<kelvin>(),
            1200.0,
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn state_from_pressure_enthalpy_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let thermo = Vdi4670::new();
        let p = Pressure::new::<kilopascal>(250.0);

        for mixture in [
            Mixture::standard_air(),
            Mixture::reference_test_gas(),
            Mixture::pure(Component::H2O),
        ] {
            for t in [210.0, 273.15, 650.0, 1800.0, 3250.0] {
                let state_in: State<Mixture> = thermo.state_from((mixture, temperature(t), p))?;
                let h = thermo.enthalpy(&state_in)?;
                let state_out: State<Mixture> = thermo.state_from((mixture, p, h))?;

                assert_relative_eq!(
                    state_out.temperature.get::<kelvin>(),
                    t,
                    epsilon = 1e-6
                );
                assert_relative_eq!(
                    thermo.pressure(&state_out)?.get::<kilopascal>(),
                    250.0,
                    max_relative = 1e-9
                );
            }
        }
        Ok(())
    }

    #[test]
    fn state_from_pressure_entropy_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let thermo = Vdi4670::new();
        let p = Pressure::new::<megapascal>(2.0);
        let flue_gas = Mixture::from_mole_fractions(Fractions {
            n2: 0.74,
            o2: 0.04,
            h2o: 0.12,
            co2: 0.1,
            ..Fractions::default()
        })?;

        for t in [300.0, 900.0, 2500.0] {
            let state_in: State<Mixture> = thermo.state_from((flue_gas, temperature(t), p))?;
            let s = thermo.entropy(&state_in)?;
            let state_out: State<Mixture> = thermo.state_from((flue_gas, p, s))?;

            assert_relative_eq!(state_out.temperature.get::<kelvin>(), t, epsilon = 1e-6);
        }
        Ok(())
    }

    #[test]
    fn inversion_runs_under_env_filtered_subscriber() -> Result<(), StateFromError> {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("vdi4670=trace"))
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let thermo = Vdi4670::new();
            let p = Pressure::new::<bar>(1.0);
            let s = SpecificEntropy::new::<joule_per_kilogram_kelvin>(500.0);
            let state: State<Mixture> = thermo.state_from((Mixture::standard_air(), p, s))?;
            assert!(state.temperature > temperature(273.15));
            Ok(())
        })
    }

    #[test]
    fn unreachable_enthalpy_fails() {
        let thermo = Vdi4670::new();
        let p = Pressure::new::<bar>(1.0);
        let h = SpecificEnthalpy::new::<kilojoule_per_kilogram>(1.0e5);

        let err = thermo
            .state_from((Mixture::standard_air(), p, h))
            .unwrap_err();
        assert!(matches!(err, StateFromError::OutOfRange { .. }));
    }

    #[test]
    fn non_positive_pressure_fails() {
        let thermo = Vdi4670::new();
        let h = SpecificEnthalpy::new::<kilojoule_per_kilogram>(100.0);

        let err = thermo
            .state_from((Mixture::standard_air(), Pressure::new::<bar>(0.0), h))
            .unwrap_err();
        assert!(matches!(
            err,
            StateFromError::Range(RangeError::Pressure { .. })
        ));
    }

    #[test]
    fn iteration_limit_is_reported() {
        let thermo = Vdi4670::with_config(Vdi4670Config {
            max_iters: 3,
            ..Vdi4670Config::default()
        });
        assert_eq!(thermo.config().max_iters, 3);

        let p = Pressure::new::<bar>(1.0);
        let state_in: State<Mixture> = thermo
            .state_from((Mixture::standard_air(), temperature(1234.5), p))
            .unwrap();
        let h = thermo.enthalpy(&state_in).unwrap();

        let err = thermo
            .state_from((Mixture::standard_air(), p, h))
            .unwrap_err();
        assert!(matches!(err, StateFromError::MaxIters { .. }));
    }

    #[test]
    fn out_of_range_state_reports_out_of_domain() {
        let thermo = Vdi4670::new();
        let state = State::new(
            temperature(4000.0),
            MassDensity::new::<kilogram_per_cubic_meter>(0.1),
            Mixture::standard_air(),
        );
        assert!(matches!(
            thermo.cp(&state),
            Err(PropertyError::OutOfDomain { .. })
        ));
        assert!(matches!(
            thermo.entropy(&state),
            Err(PropertyError::OutOfDomain { .. })
        ));
        assert!(thermo.pressure(&state).is_ok());
    }

    #[test]
    fn changing_composition_changes_properties() -> Result<(), PropertyError> {
        let thermo = Vdi4670::new();
        let air = State::new(
            temperature(400.0),
            MassDensity::new::<kilogram_per_cubic_meter>(1.0),
            Mixture::standard_air(),
        );
        let steam = air.with_fluid(Mixture::pure(Component::H2O));

        assert!(thermo.pressure(&steam)? > thermo.pressure(&air)?);
        assert!(thermo.cp(&steam)? > thermo.cp(&air)?);
        Ok(())
    }
}
