//! Error types for frequency-response evaluation.

use bf_lti::LtiError;
use thiserror::Error;

/// Result type for response operations.
pub type ResponseResult<T> = Result<T, ResponseError>;

/// Errors that can occur while sweeping a model.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResponseError {
    /// `H(jω)` is undefined (infinite) at a sampled frequency.
    #[error("Singular response at {frequency} rad/s: transfer function is undefined")]
    SingularResponse { frequency: f64 },

    /// Sweep bounds or samples are malformed.
    #[error("Invalid sweep: {what}")]
    InvalidSweep { what: &'static str },

    /// Model construction failed.
    #[error(transparent)]
    Model(#[from] LtiError),
}
