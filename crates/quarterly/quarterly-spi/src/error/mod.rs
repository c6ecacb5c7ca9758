//! Error module containing the error type and result alias

mod invalid_input_error;

pub use invalid_input_error::InvalidInputError;

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, InvalidInputError>;
