//! Thermodynamic property models.

pub mod vdi4670;

pub(crate) mod ideal_gas_eos;

pub use vdi4670::{StateFromError, Vdi4670, Vdi4670Config};
