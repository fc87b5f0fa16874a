//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (temperature, pressure,
//! molar mass, heat capacity, ...). Dimensional consistency is therefore
//! checked by the compiler: passing a mass where a pressure is expected does
//! not build, and callers read magnitudes in any compatible unit with
//! `.get::<unit>()`.
//!
//! This module names the quantities VDI 4670 works with that [`uom`] only
//! provides under a more general name, such as specific enthalpy
//! (an [`AvailableEnergy`](uom::si::f64::AvailableEnergy)) or molar entropy
//! (a [`MolarHeatCapacity`](uom::si::f64::MolarHeatCapacity)).
//! Each alias is the same type as its [`uom`] counterpart, so the units of
//! that counterpart apply:
//!
//! ```
//! use uom::si::{
//!     f64::{MolarHeatCapacity, MolarMass},
//!     molar_heat_capacity::joule_per_kelvin_mole,
//!     molar_mass::kilogram_per_mole,
//!     specific_heat_capacity::joule_per_kilogram_kelvin,
//! };
//! use vdi4670::support::units::SpecificGasConstant;
//!
//! let r_m = MolarHeatCapacity::new::<joule_per_kelvin_mole>(8.314472);
//! let m_n2 = MolarMass::new::<kilogram_per_mole>(28.01348e-3);
//! let r_n2: SpecificGasConstant = r_m / m_n2;
//! assert!((r_n2.get::<joule_per_kilogram_kelvin>() - 296.8025).abs() < 1e-3);
//! ```

mod quantities;

pub use quantities::{
    MolarEnthalpy, MolarEntropy, MolarInternalEnergy, SpecificEnthalpy, SpecificEntropy,
    SpecificGasConstant, SpecificInternalEnergy,
};
