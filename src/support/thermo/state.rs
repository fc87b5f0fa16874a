use uom::si::f64::{MassDensity, ThermodynamicTemperature};

/// The thermodynamic state of a fluid.
///
/// A `State<Fluid>` holds temperature, density, and the fluid itself. With
/// [`Mixture`](crate::gas::Mixture) as the fluid, the composition travels
/// with the state, and the pressure follows from the model's equation of state.
///
/// # Example
///
/// ```
/// use vdi4670::gas::Mixture;
/// use vdi4670::support::thermo::State;
/// use uom::si::{
///     f64::{MassDensity, ThermodynamicTemperature},
///     mass_density::kilogram_per_cubic_meter,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let state = State::new(
///     ThermodynamicTemperature::new::<kelvin>(300.0),
///     MassDensity::new::<kilogram_per_cubic_meter>(1.16),
///     Mixture::standard_air(),
/// );
/// assert!(state.fluid.molar_mass().value > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a new state with the given temperature, density, and fluid.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, density: MassDensity, fluid: Fluid) -> Self {
        Self {
            temperature,
            density,
            fluid,
        }
    }

    /// Returns this state at a different temperature and the same density.
    #[must_use]
    pub fn with_temperature(self, temperature: ThermodynamicTemperature) -> Self {
        Self {
            temperature,
            ..self
        }
    }

    /// Returns this state at a different density and the same temperature.
    #[must_use]
    pub fn with_density(self, density: MassDensity) -> Self {
        Self { density, ..self }
    }

    /// Returns this state with a different fluid at the same temperature and density.
    #[must_use]
    pub fn with_fluid(self, fluid: Fluid) -> Self {
        Self { fluid, ..self }
    }
}
