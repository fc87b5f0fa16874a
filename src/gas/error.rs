use std::fmt;

use thiserror::Error;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::ConstraintError;

use super::{Component, coefficients::Table};

/// Whether a set of fractions is on a mole or a mass basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionBasis {
    Mole,
    Mass,
}

impl fmt::Display for FractionBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionBasis::Mole => f.write_str("mole"),
            FractionBasis::Mass => f.write_str("mass"),
        }
    }
}

/// Errors raised while constructing a [`Mixture`](super::Mixture).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompositionError {
    /// A single fraction lies outside `[0, 1]` or is not a number.
    #[error("{basis} fraction of {component} is {value}: {source}")]
    Fraction {
        component: Component,
        basis: FractionBasis,
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// The fractions do not sum to exactly one.
    #[error("{basis} fractions sum to {sum}, expected exactly 1")]
    Sum { basis: FractionBasis, sum: f64 },
}

/// Errors raised by coefficient lookups and component parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The term index lies outside the domain of the table.
    #[error("index {index} is outside the domain of coefficient table {table}")]
    Index { table: Table, index: usize },

    /// The name does not match any supported component.
    #[error("unknown component `{name}`")]
    UnknownComponent { name: String },
}

/// Errors raised when a state lies outside the validity of the correlations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    /// Temperature outside the validated range of 200 K to 3300 K.
    #[error(
        "temperature {} K is outside the validated range of 200 K to 3300 K",
        temperature.get::<kelvin>()
    )]
    Temperature {
        temperature: ThermodynamicTemperature,
    },

    /// Pressure that is zero, negative, infinite, or not a number.
    #[error("pressure {} Pa is invalid: {source}", pressure.get::<pascal>())]
    Pressure {
        pressure: Pressure,
        #[source]
        source: ConstraintError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = CompositionError::Sum {
            basis: FractionBasis::Mass,
            sum: 0.9,
        };
        assert_eq!(err.to_string(), "mass fractions sum to 0.9, expected exactly 1");

        let err = LookupError::Index {
            table: Table::A,
            index: 11,
        };
        assert_eq!(
            err.to_string(),
            "index 11 is outside the domain of coefficient table A"
        );

        let err = RangeError::Temperature {
            temperature: ThermodynamicTemperature::new::<kelvin>(150.0),
        };
        assert_eq!(
            err.to_string(),
            "temperature 150 K is outside the validated range of 200 K to 3300 K"
        );
    }
}
