//! Error types for the simulation core.
//!
//! All fallible setup operations return `SimResult<T>`.

use thiserror::Error;

/// Unified error type for simulation setup.
///
/// Both variants are recoverable: a failed start leaves any prior run
/// untouched.
#[derive(Debug, Error)]
pub enum SimError {
    /// Celestial body name not present in the gravity table.
    #[error("Unknown body: {0}")]
    UnknownBody(String),

    /// Construction argument outside its valid range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Convenience result type used throughout the simulation core.
pub type SimResult<T> = Result<T, SimError>;
