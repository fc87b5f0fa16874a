//! # VDI 4670
//!
//! Thermodynamic properties of ideal gas mixtures in the VDI 4670
//! polynomial form, built for use with
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Only the N2 coefficients are the published VDI 4670 values, and Ar and Ne
//! are exact. The O2, H2O, CO2, CO, and SO2 rows are fits to the GRI-Mech 3.0
//! NASA polynomials, so results for those components follow GRI-Mech rather
//! than the VDI 4670 tables. See [`gas::coefficients`].
//!
//! ## Crate layout
//!
//! - [`gas`]: Components, mixture compositions, and the property correlations.
//! - [`support`]: Supporting utilities, including a [`twine_core`]-friendly
//!   thermodynamic model of the mixtures in [`support::thermo::model`].
//!
//! ## Validity
//!
//! Every property is defined for temperatures between 200 K and 3300 K and
//! strictly positive pressures. Inputs outside that domain are reported as
//! errors and never extrapolated.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod gas;
pub mod support;
