//! Problem formulation for finding the temperature that produces a target
//! enthalpy or entropy at fixed pressure.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{Pressure, ThermodynamicTemperature},
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::gas::{Mixture, RangeError};
use crate::support::units::{SpecificEnthalpy, SpecificEntropy};

/// A property value to match by varying temperature.
#[derive(Debug, Clone, Copy)]
pub(super) enum Target {
    Enthalpy(SpecificEnthalpy),
    Entropy(SpecificEntropy),
}

impl Target {
    pub(super) fn name(self) -> &'static str {
        match self {
            Target::Enthalpy(_) => "specific enthalpy (J/kg)",
            Target::Entropy(_) => "specific entropy (J/(kg·K))",
        }
    }

    /// Target magnitude in SI units.
    pub(super) fn value(self) -> f64 {
        match self {
            Target::Enthalpy(h) => h.get::<joule_per_kilogram>(),
            Target::Entropy(s) => s.get::<joule_per_kilogram_kelvin>(),
        }
    }
}

/// Model adapter exposing temperature as the sole input.
///
/// The output is the magnitude of the targeted property, in SI units, of the
/// mixture at the fixed pressure.
pub(super) struct PropertyModel<'a> {
    mixture: &'a Mixture,
    pressure: Pressure,
    target: Target,
}

impl<'a> PropertyModel<'a> {
    pub(super) fn new(mixture: &'a Mixture, pressure: Pressure, target: Target) -> Self {
        Self {
            mixture,
            pressure,
            target,
        }
    }
}

impl Model for PropertyModel<'_> {
    type Input = ThermodynamicTemperature;
    type Output = f64;
    type Error = RangeError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        match self.target {
            Target::Enthalpy(_) => Ok(self.mixture.enthalpy(*input)?.get::<joule_per_kilogram>()),
            Target::Entropy(_) => Ok(self
                .mixture
                .entropy(self.pressure, *input)?
                .get::<joule_per_kilogram_kelvin>()),
        }
    }
}

/// Equation problem with residual `property(T) - target`.
pub(super) struct TargetProblem {
    target: f64,
}

impl TargetProblem {
    pub(super) fn new(target: Target) -> Self {
        Self {
            target: target.value(),
        }
    }
}

impl EquationProblem<1> for TargetProblem {
    type Input = ThermodynamicTemperature;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output - self.target])
    }
}
