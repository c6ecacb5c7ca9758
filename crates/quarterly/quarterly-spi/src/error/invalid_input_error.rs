//! Invalid input error type

use thiserror::Error;

/// Raised when a caller passes data an operation cannot work with.
///
/// Every analysis operation is a pure computation, so this is the only
/// failure kind: the caller must correct its input and call again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    /// Not enough records or points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// A parameter is outside its accepted range
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A NaN or infinite value was supplied
    #[error("Non-finite value for '{name}': {value}")]
    NonFiniteValue { name: String, value: f64 },
}

impl InvalidInputError {
    /// Shorthand for [`InvalidInputError::InvalidParameter`].
    pub fn parameter(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Fail with [`InvalidInputError::NonFiniteValue`] unless `value` is finite.
    pub fn ensure_finite(name: &str, value: f64) -> Result<(), Self> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(Self::NonFiniteValue {
                name: name.to_string(),
                value,
            })
        }
    }
}
