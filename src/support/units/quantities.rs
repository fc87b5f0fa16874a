use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Specific entropy, J/kg·K in SI.
pub type SpecificEntropy = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific internal energy, J/kg in SI.
pub type SpecificInternalEnergy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Molar enthalpy, J/mol in SI.
pub type MolarEnthalpy = Quantity<ISQ<P2, P1, N2, Z0, Z0, N1, Z0>, SI<f64>, f64>;

/// Molar entropy, J/mol·K in SI.
pub type MolarEntropy = Quantity<ISQ<P2, P1, N2, Z0, N1, N1, Z0>, SI<f64>, f64>;

/// Molar internal energy, J/mol in SI.
pub type MolarInternalEnergy = Quantity<ISQ<P2, P1, N2, Z0, Z0, N1, Z0>, SI<f64>, f64>;
