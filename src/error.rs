//! Error types shared by every estimator in the crate.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Failures an estimate can report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A sample fell outside the valid domain of a transform,
    /// e.g. a non-positive argument to a logarithm.
    #[error("domain error: {transform} is undefined at {value}")]
    DomainError {
        /// Name of the transform that rejected the sample
        transform: &'static str,
        /// Offending sample value
        value: f64,
    },

    /// A caller-supplied argument is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
