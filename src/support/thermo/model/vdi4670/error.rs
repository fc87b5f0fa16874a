use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};

use crate::{gas::RangeError, support::constraint::ConstraintError};

/// Errors that can occur while building a state for the VDI 4670 model.
#[derive(Debug, Error)]
pub enum StateFromError {
    /// A temperature or pressure lies outside the validity of the correlations.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// The density is zero, negative, or not a number.
    #[error("density {} kg/m³ is invalid: {source}", density.get::<kilogram_per_cubic_meter>())]
    Density {
        density: MassDensity,
        #[source]
        source: ConstraintError,
    },

    /// No temperature in the validated range reaches the target.
    #[error("{property} {target} is outside the reachable range [{min}, {max}]")]
    OutOfRange {
        property: &'static str,
        target: f64,
        min: f64,
        max: f64,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Smallest residual encountered, in the target's SI unit.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
