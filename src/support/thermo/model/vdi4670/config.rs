use twine_solvers::equation::bisection;
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

/// Solver settings for building states from enthalpy or entropy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vdi4670Config {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the temperature being solved for.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance on the residual, in J/kg for enthalpy and
    /// J/(kg·K) for entropy.
    pub residual_tol: f64,
}

impl Default for Vdi4670Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
            residual_tol: 1e-9,
        }
    }
}

impl Vdi4670Config {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol,
        }
    }
}
