//! Ideal gas mixtures of N2, O2, Ar, Ne, H2O, CO2, CO, and SO2 in the VDI 4670 form.
//!
//! A [`Mixture`] holds a validated composition. Properties are evaluated at a
//! given pressure and temperature from the per-component polynomials in
//! [`coefficients`], combined with ideal mixing rules:
//!
//! ```
//! use uom::si::{
//!     f64::{Pressure, ThermodynamicTemperature},
//!     molar_heat_capacity::joule_per_kelvin_mole,
//!     pressure::megapascal,
//!     thermodynamic_temperature::kelvin,
//! };
//! use vdi4670::gas::{Component, Mixture};
//!
//! let n2 = Mixture::pure(Component::N2);
//! let p = Pressure::new::<megapascal>(2.0);
//! let t = ThermodynamicTemperature::new::<kelvin>(2000.0);
//!
//! let cp = n2.molar_heat_capacity(t)?;
//! assert!((cp.get::<joule_per_kelvin_mole>() - 35.969).abs() < 1e-3);
//!
//! let s = n2.molar_entropy(p, t)?;
//! assert!((s.get::<joule_per_kelvin_mole>() - 38.219).abs() < 1e-3);
//! # Ok::<(), vdi4670::gas::RangeError>(())
//! ```
//!
//! N2 uses the published VDI 4670 coefficients. The O2, H2O, CO2, CO, and
//! SO2 coefficients are fitted to GRI-Mech 3.0 data in the same form, as
//! described in [`coefficients`].
//!
//! The correlations cover 200 K to 3300 K. Temperatures outside that range
//! are rejected with [`RangeError::Temperature`] rather than extrapolated.

pub mod coefficients;
pub mod constants;

mod component;
mod composition;
mod error;
mod properties;

pub use component::Component;
pub use composition::{Fractions, Mixture};
pub use error::{CompositionError, FractionBasis, LookupError, RangeError};
