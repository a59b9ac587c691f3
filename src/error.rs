//! Error types for ctrand

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using ctrand's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when dispatching a random fill
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Raw engine selector does not name a supported engine
    #[error("Random engine type {engine} not supported")]
    UnsupportedEngine {
        /// The rejected selector value
        engine: u32,
    },

    /// Unsupported dtype for an operation
    #[error("Unsupported dtype {dtype:?} for operation '{op}'")]
    UnsupportedDType {
        /// The unsupported dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create an unsupported engine error
    pub fn unsupported_engine(engine: u32) -> Self {
        Self::UnsupportedEngine { engine }
    }

    /// Create an unsupported dtype error
    pub fn unsupported_dtype(dtype: DType, op: &'static str) -> Self {
        Self::UnsupportedDType { dtype, op }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
