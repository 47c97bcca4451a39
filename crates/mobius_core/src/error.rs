//! Error types for Möbius strip construction and measurement.

use thiserror::Error;

/// Result type alias for strip operations.
pub type MobiusResult<T> = Result<T, MobiusError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MobiusError {
    /// A construction parameter is outside its valid domain. Raised before any
    /// array is allocated.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    /// A measurement reduced to a non-finite value.
    #[error("numerical degeneracy while computing {quantity}: {details}")]
    NumericalDegeneracy {
        quantity: &'static str,
        details: String,
    },
}

impl MobiusError {
    pub fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }

    pub fn degeneracy(quantity: &'static str, details: impl Into<String>) -> Self {
        Self::NumericalDegeneracy {
            quantity,
            details: details.into(),
        }
    }
}
