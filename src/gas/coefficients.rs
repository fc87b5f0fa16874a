//! VDI 4670 polynomial coefficients.
//!
//! For component `k` and reduced temperature `τ = T / T0`:
//!
//! ```text
//! c_p,m,k = Σ_{i=1..10} A[k,i] · τ^B[i]
//! h_m,k   = C[k,0] + Σ_{i=1..10} C[k,i] · τ^(B[i]+1)
//! s_m,k   = D[k,0] + D[k,1] · ln τ − R_m · ln(p/p0) + Σ_{i=2..10} D[k,i] · τ^B[i]
//! ```
//!
//! The enthalpy and entropy rows are the term-wise integrals of the heat
//! capacity row, with `C[k,0]` and `D[k,0]` chosen so that `h_m,k = 0` at `T0`
//! and `s_m,k = 0` at `(T0, p0)`.
//!
//! N2 carries the published VDI 4670 coefficients. Ar and Ne have a constant
//! heat capacity of `5/2 · R_m`, so only their first terms are non-zero. The
//! rows for O2, H2O, CO2, CO, and SO2 are least-squares fits in the same
//! ten-term basis to the GRI-Mech 3.0 NASA polynomials over 200 K to 3300 K,
//! agreeing with them to within 0.2 %.
//!
//! Term indices follow the usual notation and are one-based for `A` and `B`:
//!
//! ```
//! use uom::si::molar_heat_capacity::joule_per_kelvin_mole;
//! use vdi4670::gas::{Component, coefficients};
//!
//! assert_eq!(coefficients::lookup_b(1).unwrap(), 0.0);
//! assert_eq!(coefficients::lookup_b(10).unwrap(), 1.0);
//!
//! let a1 = coefficients::lookup_a(Component::Ar, 1).unwrap();
//! assert_eq!(a1.get::<joule_per_kelvin_mole>(), 20.78618);
//!
//! assert!(coefficients::lookup_a(Component::N2, 0).is_err());
//! assert!(coefficients::lookup_c(Component::N2, 0).is_ok());
//! ```

use std::fmt;

use uom::si::{
    f64::MolarHeatCapacity, molar_energy::joule_per_mole,
    molar_heat_capacity::joule_per_kelvin_mole,
};

use crate::support::units::{MolarEnthalpy, MolarEntropy};

use super::{Component, LookupError};

/// Number of temperature terms in each correlation.
pub const TERMS: usize = 10;

/// Identifies one of the four coefficient tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// Heat capacity coefficients, J/(mol·K).
    A,
    /// Temperature exponents, dimensionless.
    B,
    /// Enthalpy coefficients, J/mol.
    C,
    /// Entropy coefficients, J/(mol·K).
    D,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Table::A => "A",
            Table::B => "B",
            Table::C => "C",
            Table::D => "D",
        };
        f.write_str(name)
    }
}

static B: [f64; TERMS] = [0.0, -1.5, -1.25, -0.75, -0.5, -0.25, 0.25, 0.5, 0.75, 1.0];

#[rustfmt::skip]
static A: [[f64; TERMS]; Component::COUNT] = [
    /* N2  */ [2.475830346e6, -2.815239891e4, 1.116401165e5, -8.147644187e5, 2.185120405e6, -2.978031305e6, -1.308008001e6, 4.305948510e5, -8.082302563e4, 6.622545214e3],
    /* O2  */ [-2.765063945e6, 3.968877955e4, -1.505392222e5, 1.009747729e6, -2.605937193e6, 3.429719011e6, 1.423297543e6, -4.587462591e5, 8.472737916e4, -6.864539502e3],
    /* Ar  */ [20.78618, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    /* Ne  */ [20.78618, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    /* H2O */ [-7.540473166e5, 4.159692393e3, -1.978273259e4, 1.897934172e5, -5.655832973e5, 8.425135832e5, 4.226450324e5, -1.454739806e5, 2.815805004e4, -2.348975746e3],
    /* CO2 */ [-3.242657891e6, 3.456437498e4, -1.372796461e5, 1.015369267e6, -2.757301894e6, 3.820718032e6, 1.755381139e6, -5.938513661e5, 1.147930716e5, -9.699089856e3],
    /* CO  */ [3.107097996e6, -3.070270750e4, 1.245640717e5, -9.517990491e5, 2.613072141e6, -3.647270924e6, -1.683020042e6, 5.683751624e5, -1.095012868e5, 9.213762946e3],
    /* SO2 */ [-2.848312151e6, 5.234999193e4, -1.944417916e5, 1.227432826e6, -3.034311860e6, 3.782444451e6, 1.345985927e6, -3.896720661e5, 6.284270417e4, -4.279105508e3],
];

#[rustfmt::skip]
static C: [[f64; TERMS + 1]; Component::COUNT] = [
    /* N2  */ [4.305300363e8, 6.762730590e8, 1.537965552e7, -1.219779913e8, -8.902116039e8, 1.193731277e9, -1.084599001e9, -2.858259084e8, 7.841132237e7, -1.261531969e7, 9.044741126e5],
    /* O2  */ [-5.560189957e8, -7.552772166e8, -2.168198027e7, 1.644791542e8, 1.103250369e9, -1.423623489e9, 1.249103664e9, 3.110189791e8, -8.353769378e7, 1.322473350e7, -9.375244825e5],
    /* Ar  */ [-5.677745067e3, 5.677745067e3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    /* Ne  */ [-5.677745067e3, 5.677745067e3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    /* H2O */ [-8.854756708e7, -2.059680245e8, -2.272439954e6, 2.161461363e7, 2.073682876e8, -3.089781553e8, 3.068434470e8, 9.235639248e7, -2.649081187e7, 4.395069353e6, -3.208113625e5],
    /* CO2 */ [-5.319996214e8, -8.857320029e8, -1.888251805e7, 1.499917413e8, 1.109392461e9, -1.506314025e9, 1.391505507e9, 3.835858865e8, -1.081403338e8, 1.791755858e7, -1.324653197e6],
    /* CO  */ [4.914780384e8, 8.487038176e8, 1.677288911e7, -1.360987047e8, -1.039935641e9, 1.427521311e9, -1.328336071e9, -3.677735396e8, 1.035011171e8, -1.709158657e7, 1.258369674e6],
    /* SO2 */ [-6.992366340e8, -7.780164640e8, -2.859880059e7, 2.124471015e8, 1.341093106e9, -1.657644569e9, 1.377566269e9, 2.941248448e8, -7.095928324e7, 9.808848368e6, -5.844188348e5],
];

#[rustfmt::skip]
static D: [[f64; TERMS + 1]; Component::COUNT] = [
    /* N2  */ [-4.085709350e6, 2.475830346e6, 1.876826594e4, -8.931209320e4, 1.086352558e6, -4.370240810e6, 1.191212522e7, -5.232032004e6, 8.611897020e5, -1.077640342e5, 6.622545214e3],
    /* O2  */ [4.877556814e6, -2.765063945e6, -2.645918637e4, 1.204313778e5, -1.346330305e6, 5.211874386e6, -1.371887604e7, 5.693190172e6, -9.174925182e5, 1.129698389e5, -6.864539502e3],
    /* Ar  */ [0.0, 20.78618, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    /* Ne  */ [0.0, 20.78618, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    /* H2O */ [1.044065310e6, -7.540473166e5, -2.773128262e3, 1.582618607e4, -2.530578896e5, 1.131166595e6, -3.370054333e6, 1.690580130e6, -2.909479612e5, 3.754406672e4, -2.348975746e3],
    /* CO2 */ [5.058133068e6, -3.242657891e6, -2.304291665e4, 1.098237169e5, -1.353825689e6, 5.514603788e6, -1.528287213e7, 7.021524556e6, -1.187702732e6, 1.530574288e5, -9.699089856e3],
    /* CO  */ [-4.820704236e6, 3.107097996e6, 2.046847167e4, -9.965125736e4, 1.269065399e6, -5.226144282e6, 1.458908370e7, -6.732080168e6, 1.136750325e6, -1.460017157e5, 9.213762946e3],
    /* SO2 */ [5.892967000e6, -2.848312151e6, -3.489999462e4, 1.555534333e5, -1.636577101e6, 6.068623720e6, -1.512977780e7, 5.383943708e6, -7.793441322e5, 8.379027223e4, -4.279105508e3],
];

/// Returns the temperature exponent `B[i]` for `i` in `1..=10`.
///
/// # Errors
///
/// Returns [`LookupError::Index`] if `i` is outside `1..=10`.
pub fn lookup_b(i: usize) -> Result<f64, LookupError> {
    one_based(&B, Table::B, i)
}

/// Returns the heat capacity coefficient `A[component, i]` for `i` in `1..=10`.
///
/// # Errors
///
/// Returns [`LookupError::Index`] if `i` is outside `1..=10`.
pub fn lookup_a(component: Component, i: usize) -> Result<MolarHeatCapacity, LookupError> {
    one_based(&A[component.index()], Table::A, i)
        .map(MolarHeatCapacity::new::<joule_per_kelvin_mole>)
}

/// Returns the enthalpy coefficient `C[component, i]` for `i` in `0..=10`.
///
/// # Errors
///
/// Returns [`LookupError::Index`] if `i` is greater than 10.
pub fn lookup_c(component: Component, i: usize) -> Result<MolarEnthalpy, LookupError> {
    zero_based(&C[component.index()], Table::C, i).map(MolarEnthalpy::new::<joule_per_mole>)
}

/// Returns the entropy coefficient `D[component, i]` for `i` in `0..=10`.
///
/// # Errors
///
/// Returns [`LookupError::Index`] if `i` is greater than 10.
pub fn lookup_d(component: Component, i: usize) -> Result<MolarEntropy, LookupError> {
    zero_based(&D[component.index()], Table::D, i).map(MolarEntropy::new::<joule_per_kelvin_mole>)
}

pub(crate) fn exponents() -> &'static [f64; TERMS] {
    &B
}

pub(crate) fn heat_capacity_row(component: Component) -> &'static [f64; TERMS] {
    &A[component.index()]
}

pub(crate) fn enthalpy_row(component: Component) -> &'static [f64; TERMS + 1] {
    &C[component.index()]
}

pub(crate) fn entropy_row(component: Component) -> &'static [f64; TERMS + 1] {
    &D[component.index()]
}

fn one_based(row: &[f64], table: Table, i: usize) -> Result<f64, LookupError> {
    i.checked_sub(1)
        .and_then(|j| row.get(j))
        .copied()
        .ok_or(LookupError::Index { table, index: i })
}

fn zero_based(row: &[f64], table: Table, i: usize) -> Result<f64, LookupError> {
    row.get(i)
        .copied()
        .ok_or(LookupError::Index { table, index: i })
}
