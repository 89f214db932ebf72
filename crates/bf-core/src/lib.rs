//! bf-core: shared foundation for bodeflow.
//!
//! Contains:
//! - units (uom SI types + constructors for delay time and angular frequency)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{BfError, BfResult};
pub use numeric::*;
pub use units::*;
