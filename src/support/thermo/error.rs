use thiserror::Error;

use crate::gas::RangeError;

/// Errors that may occur when evaluating thermodynamic properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The state lies outside the model's valid domain.
    ///
    /// For example, a temperature outside the range covered by the correlations.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The state is not physical, such as one with a non-positive density.
    #[error("invalid state: {context}")]
    InvalidState { context: String },
}

impl From<RangeError> for PropertyError {
    fn from(err: RangeError) -> Self {
        let context = err.to_string();
        match err {
            RangeError::Temperature { .. } => PropertyError::OutOfDomain { context },
            RangeError::Pressure { .. } => PropertyError::InvalidState { context },
        }
    }
}
