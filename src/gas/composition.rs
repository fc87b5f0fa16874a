use std::fmt;

use tracing::{debug, trace};
use uom::si::{f64::MolarMass, molar_mass::kilogram_per_mole};

use crate::support::{constraint::UnitInterval, numeric::exact_sum, units::SpecificGasConstant};

use super::{Component, CompositionError, FractionBasis, constants::universal_gas_constant};

/// Fractions of each component, on a mole or a mass basis.
///
/// Components left at their default are absent from the mixture.
///
/// ```
/// use vdi4670::gas::Fractions;
///
/// let flue_gas = Fractions {
///     n2: 0.74,
///     o2: 0.04,
///     h2o: 0.12,
///     co2: 0.10,
///     ..Fractions::default()
/// };
/// assert_eq!(flue_gas.ar, 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Fractions {
    pub n2: f64,
    pub o2: f64,
    pub ar: f64,
    pub ne: f64,
    pub h2o: f64,
    pub co2: f64,
    pub co: f64,
    pub so2: f64,
}

impl Fractions {
    /// Returns the fraction of `component`.
    #[must_use]
    pub fn get(&self, component: Component) -> f64 {
        self.to_array()[component.index()]
    }

    fn to_array(self) -> [f64; Component::COUNT] {
        [
            self.n2, self.o2, self.ar, self.ne, self.h2o, self.co2, self.co, self.so2,
        ]
    }
}

/// An ideal gas mixture of the VDI 4670 components.
///
/// A mixture stores one mole fraction per [`Component`] and cannot be changed
/// once constructed. Mole fractions supplied directly must each lie in
/// `[0, 1]` and sum to exactly one. The sum is rounded once from its exact
/// value, so the order of the components does not matter and no tolerance
/// is applied.
///
/// ```
/// use uom::si::molar_mass::gram_per_mole;
/// use vdi4670::gas::{Component, Fractions, Mixture};
///
/// let air = Mixture::from_mole_fractions(Fractions {
///     n2: 0.781109,
///     o2: 0.209548,
///     ar: 0.009343,
///     ..Fractions::default()
/// })?;
///
/// assert_eq!(air, Mixture::standard_air());
/// assert_eq!(air.mole_fraction(Component::O2), 0.209548);
/// assert!((air.molar_mass().get::<gram_per_mole>() - 28.96).abs() < 1e-4);
/// # Ok::<(), vdi4670::gas::CompositionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mixture {
    x: [f64; Component::COUNT],
}

impl Mixture {
    /// Creates a mixture from mole fractions.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::Fraction`] if any fraction lies outside
    /// `[0, 1]`, or [`CompositionError::Sum`] if the fractions do not sum to
    /// exactly one.
    pub fn from_mole_fractions(fractions: Fractions) -> Result<Self, CompositionError> {
        let x = validate(fractions, FractionBasis::Mole)?;
        let mixture = Self { x };
        trace!(%mixture, "mixture from mole fractions");
        Ok(mixture)
    }

    /// Creates a mixture from mass fractions.
    ///
    /// The mass fractions are validated like mole fractions, then converted
    /// with `x_k = w_k · M_mix / M_k`, where `M_mix = 1 / Σ(w_k / M_k)`.
    /// Rounding in the conversion is absorbed by the largest mole fraction,
    /// so the stored fractions lie in `[0, 1]` and sum to exactly one.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::Fraction`] if any fraction lies outside
    /// `[0, 1]`, or [`CompositionError::Sum`] if the fractions do not sum to
    /// exactly one.
    pub fn from_mass_fractions(fractions: Fractions) -> Result<Self, CompositionError> {
        let w = validate(fractions, FractionBasis::Mass)?;

        let moles_per_kg: f64 = Component::ALL
            .iter()
            .zip(w)
            .map(|(component, w)| w / molar_mass_kg(*component))
            .sum();
        let m_mix = moles_per_kg.recip();

        let mut x = [0.0; Component::COUNT];
        for (component, w) in Component::ALL.iter().zip(w) {
            x[component.index()] = w * m_mix / molar_mass_kg(*component);
        }
        close_sum(&mut x);

        let mixture = Self { x };
        debug!(%mixture, m_mix, "mixture from mass fractions");
        Ok(mixture)
    }

    /// Creates a mixture of a single component.
    #[must_use]
    pub fn pure(component: Component) -> Self {
        let mut x = [0.0; Component::COUNT];
        x[component.index()] = 1.0;
        Self { x }
    }

    /// Dry air: N2 0.781109, O2 0.209548, Ar 0.009343.
    #[must_use]
    pub fn standard_air() -> Self {
        Self {
            x: [0.781_109, 0.209_548, 0.009_343, 0.0, 0.0, 0.0, 0.0, 0.0],
        }
    }

    /// The VDI 4670 combustion test gas:
    /// N2 0.6, O2 0.1, Ar 0.01, H2O 0.17, CO2 0.1, CO 0.01, SO2 0.01.
    #[must_use]
    pub fn reference_test_gas() -> Self {
        Self {
            x: [0.6, 0.1, 0.01, 0.0, 0.17, 0.1, 0.01, 0.01],
        }
    }

    /// Returns the mole fraction of `component`.
    #[must_use]
    pub fn mole_fraction(&self, component: Component) -> f64 {
        self.x[component.index()]
    }

    /// Iterates over every component and its mole fraction, in table order.
    pub fn mole_fractions(&self) -> impl Iterator<Item = (Component, f64)> {
        Component::ALL.into_iter().zip(self.x)
    }

    /// Returns the mass fraction of `component`, `w_k = x_k · M_k / M_mix`.
    #[must_use]
    pub fn mass_fraction(&self, component: Component) -> f64 {
        self.mole_fraction(component) * molar_mass_kg(component) / self.molar_mass_kg()
    }

    /// Returns `true` if the mixture consists of a single component.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_pure(&self) -> bool {
        self.x.contains(&1.0)
    }

    /// Mole-weighted molar mass, `M_mix = Σ x_k · M_k`.
    #[must_use]
    pub fn molar_mass(&self) -> MolarMass {
        MolarMass::new::<kilogram_per_mole>(self.molar_mass_kg())
    }

    /// Specific gas constant, `R_mix = R_m / M_mix`.
    #[must_use]
    pub fn specific_gas_constant(&self) -> SpecificGasConstant {
        universal_gas_constant() / self.molar_mass()
    }

    /// Components with a non-zero mole fraction.
    pub(crate) fn present(&self) -> impl Iterator<Item = (Component, f64)> {
        self.mole_fractions().filter(|&(_, x)| x > 0.0)
    }

    fn molar_mass_kg(&self) -> f64 {
        self.mole_fractions()
            .map(|(component, x)| x * molar_mass_kg(component))
            .sum()
    }
}

/// Standard dry air.
impl Default for Mixture {
    fn default() -> Self {
        Self::standard_air()
    }
}

impl fmt::Display for Mixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Mixture(")?;
        for (i, (component, x)) in self.present().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{component}: {x}")?;
        }
        f.write_str(")")
    }
}

fn molar_mass_kg(component: Component) -> f64 {
    component.molar_mass().get::<kilogram_per_mole>()
}

/// Adjusts the largest fraction until the exact sum of `x` rounds to one.
///
/// The fractions must already sum to one within a few ulps. The largest is
/// at least `1 / COUNT`, so one-ulp steps on it are finer than the window of
/// totals that round to one.
#[allow(clippy::float_cmp)]
fn close_sum(x: &mut [f64; Component::COUNT]) {
    let largest = (0..Component::COUNT).fold(0, |k, i| if x[i] > x[k] { i } else { k });

    x[largest] = x[largest].min(1.0);
    x[largest] += 1.0 - exact_sum(*x);

    for _ in 0..64 {
        let sum = exact_sum(*x);
        if sum == 1.0 {
            break;
        }
        let bits = x[largest].to_bits();
        x[largest] = f64::from_bits(if sum > 1.0 { bits - 1 } else { bits + 1 });
    }

    x[largest] = x[largest].clamp(0.0, 1.0);
}

/// Checks each fraction against `[0, 1]` and their exact sum against one.
#[allow(clippy::float_cmp)]
fn validate(
    fractions: Fractions,
    basis: FractionBasis,
) -> Result<[f64; Component::COUNT], CompositionError> {
    let values = fractions.to_array();

    for (component, value) in Component::ALL.into_iter().zip(values) {
        UnitInterval::new(value).map_err(|source| CompositionError::Fraction {
            component,
            basis,
            value,
            source,
        })?;
    }

    let sum = exact_sum(values);
    if sum != 1.0 {
        return Err(CompositionError::Sum { basis, sum });
    }

    Ok(values)
}
