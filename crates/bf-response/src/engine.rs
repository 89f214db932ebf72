//! Frequency-response evaluation.
//!
//! `H(jω)` is evaluated independently at every sample, so the complex gains are
//! computed in parallel. Everything after that (singular-sample handling and
//! phase unwrapping) depends on sweep order and runs sequentially, which keeps
//! the output identical regardless of thread count.

use bf_core::to_db;
use bf_lti::{RationalFunction, TransferFunctionModel};
use num_complex::Complex64;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{ResponseError, ResponseResult};
use crate::phase::unwrap_phase;
use crate::response::FrequencyResponse;
use crate::sweep::FrequencySweep;

/// What to do when `H(jω)` is undefined at a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingularPolicy {
    /// Fail the whole sweep at the first singular sample.
    #[default]
    Abort,
    /// Drop singular samples from the result.
    Skip,
}

/// Sweeps a model over frequency.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyResponseEngine {
    pub on_singular: SingularPolicy,
}

impl FrequencyResponseEngine {
    pub fn new(on_singular: SingularPolicy) -> Self {
        Self { on_singular }
    }

    /// Evaluate magnitude (dB) and unwrapped phase (degrees) over `sweep`.
    ///
    /// # Errors
    ///
    /// [`ResponseError::SingularResponse`] for the first (lowest-frequency)
    /// singular sample when the policy is [`SingularPolicy::Abort`].
    pub fn evaluate(
        &self,
        model: &TransferFunctionModel,
        sweep: &FrequencySweep,
    ) -> ResponseResult<FrequencyResponse> {
        let rational = model.rational();
        let gains: Vec<ResponseResult<Complex64>> = sweep
            .samples()
            .par_iter()
            .map(|&omega| response_at(rational, omega))
            .collect();

        let mut frequencies = Vec::with_capacity(sweep.len());
        let mut values = Vec::with_capacity(sweep.len());
        let mut skipped = 0_usize;
        for (&omega, gain) in sweep.samples().iter().zip(gains) {
            match gain {
                Ok(h) => {
                    frequencies.push(omega);
                    values.push(h);
                }
                Err(err) => match self.on_singular {
                    SingularPolicy::Abort => {
                        tracing::warn!(frequency = omega, "singular sample, aborting sweep");
                        return Err(err);
                    }
                    SingularPolicy::Skip => skipped += 1,
                },
            }
        }
        if skipped > 0 {
            tracing::warn!(skipped, "dropped singular samples from sweep");
        }

        let magnitude_db: Vec<f64> = values.iter().map(|h| to_db(h.norm())).collect();
        let raw_phase: Vec<f64> = values.iter().map(|h| h.arg()).collect();
        let phase_deg: Vec<f64> = unwrap_phase(&raw_phase)
            .into_iter()
            .map(f64::to_degrees)
            .collect();

        tracing::debug!(samples = frequencies.len(), "evaluated frequency response");
        Ok(FrequencyResponse::from_parts(
            frequencies,
            magnitude_db,
            phase_deg,
        ))
    }
}

/// Evaluate `model` over `sweep`, failing fast on singular samples.
pub fn evaluate(
    model: &TransferFunctionModel,
    sweep: &FrequencySweep,
) -> ResponseResult<FrequencyResponse> {
    FrequencyResponseEngine::default().evaluate(model, sweep)
}

/// Complex gain `N(jω) / D(jω)` at one frequency.
///
/// # Errors
///
/// [`ResponseError::SingularResponse`] when the denominator vanishes or the
/// quotient overflows.
pub fn response_at(rational: &RationalFunction, omega: f64) -> ResponseResult<Complex64> {
    let (n, d) = rational.eval_parts_at(omega);
    if d.re == 0.0 && d.im == 0.0 {
        return Err(ResponseError::SingularResponse { frequency: omega });
    }
    let h = n / d;
    if !h.is_finite() {
        return Err(ResponseError::SingularResponse { frequency: omega });
    }
    Ok(h)
}
