//! Frequency-response evaluation for bodeflow.
//!
//! Takes a [`bf_lti::TransferFunctionModel`] and a [`FrequencySweep`], evaluates
//! `H(jω)` at every sample and returns magnitude in dB and continuous phase in
//! degrees. The fixed display ranges a Bode plot is drawn with live in [`axes`].

pub mod axes;
pub mod engine;
pub mod error;
pub mod phase;
pub mod response;
pub mod sweep;

pub use axes::{AxisRange, BodeAxes};
pub use engine::{FrequencyResponseEngine, SingularPolicy, evaluate, response_at};
pub use error::{ResponseError, ResponseResult};
pub use phase::unwrap_phase;
pub use response::{BodePoint, FrequencyResponse};
pub use sweep::{FrequencySweep, SweepSpacing};
