//! Error types for transfer-function construction.

use bf_core::BfError;
use thiserror::Error;

/// Result type for LTI operations.
pub type LtiResult<T> = Result<T, LtiError>;

/// Errors raised while building a transfer-function model.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LtiError {
    /// Delay, order or numerator degree outside their allowed bounds.
    #[error("Invalid parameter: {what}")]
    InvalidParameter { what: &'static str },

    /// Denominator is the zero polynomial.
    #[error("Degenerate system: {what}")]
    DegenerateSystem { what: &'static str },

    /// A coefficient or parameter was NaN or infinite.
    #[error(transparent)]
    Numeric(#[from] BfError),
}
