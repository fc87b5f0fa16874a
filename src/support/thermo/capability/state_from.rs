use crate::support::thermo::State;

use super::ThermoModel;

/// Capability for constructing a [`State`] from a typed input.
///
/// A [`State`] carries a `Fluid` value alongside temperature and density.
/// For gas mixtures the fluid is the composition, which is part of what
/// defines the state.
///
/// `StateFrom<Input>` expresses at compile time which combinations of inputs
/// a model accepts. An input without an implementation is not supported, so
/// there is no runtime "not implemented" error.
///
/// Inputs are plain tuples, usually the fluid followed by two properties:
/// - `(Fluid, ThermodynamicTemperature, Pressure)`
/// - `(Fluid, ThermodynamicTemperature, MassDensity)`
/// - `(Fluid, Pressure, MassDensity)`
/// - `(Fluid, Pressure, SpecificEnthalpy)`
/// - `(Fluid, Pressure, SpecificEntropy)`
///
/// ## Default fluid
///
/// When `Fluid: Default`, every `(Fluid, A, B)` input is also accepted as
/// `(A, B)`, using `Fluid::default()`. For a
/// [`Mixture`](crate::gas::Mixture) the default is standard dry air, so
/// `thermo.state_from((t, p))` is an air state.
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates a thermodynamic state from the provided input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be created from `input`.
    fn state_from(&self, input: Input) -> Result<State<Self::Fluid>, Self::Error>;
}

/// Builds a state from `(A, B)` with the default fluid.
impl<M, A, B> StateFrom<(A, B)> for M
where
    M: ThermoModel + StateFrom<(<M as ThermoModel>::Fluid, A, B)>,
    <M as ThermoModel>::Fluid: Default,
{
    type Error = <M as StateFrom<(<M as ThermoModel>::Fluid, A, B)>>::Error;

    fn state_from(&self, (a, b): (A, B)) -> Result<State<Self::Fluid>, Self::Error> {
        self.state_from((<M as ThermoModel>::Fluid::default(), a, b))
    }
}
