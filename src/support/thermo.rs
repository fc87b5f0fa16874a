//! Thermodynamic property modeling built on the VDI 4670 gas mixtures.
//!
//! A [`State`] pairs temperature and density with a fluid. Models implement
//! the traits in [`capability`] to report properties of a state and to build
//! states from other pairs of properties.

mod error;
mod state;

pub mod capability;
pub mod model;

pub use error::PropertyError;
pub use state::State;
