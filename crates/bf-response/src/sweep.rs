//! Frequency sweep generation.
//!
//! The default sweep reproduces the classic classroom setup: one million
//! linearly spaced samples between 0.01 and 100 rad/s. Logarithmic spacing
//! resolves a Bode plot just as well with far fewer samples and is available
//! as an explicit choice.

use std::fmt;

use bf_core::{AngularVelocity, radps_of};
use serde::{Deserialize, Serialize};

use crate::error::{ResponseError, ResponseResult};

/// Lowest default frequency (rad/s).
pub const DEFAULT_START_RADPS: f64 = 0.01;
/// Highest default frequency (rad/s).
pub const DEFAULT_STOP_RADPS: f64 = 100.0;
/// Default number of samples.
pub const DEFAULT_POINTS: usize = 1_000_000;

/// Spacing of sweep samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepSpacing {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Uniformly spaced in log10
    Logarithmic,
}

impl fmt::Display for SweepSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Logarithmic => write!(f, "logarithmic"),
        }
    }
}

/// Strictly increasing, finite, non-negative angular frequencies in rad/s.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrequencySweep {
    samples: Vec<f64>,
}

impl FrequencySweep {
    /// Generate `points` samples between `start` and `stop` inclusive.
    pub fn new(
        start: f64,
        stop: f64,
        points: usize,
        spacing: SweepSpacing,
    ) -> ResponseResult<Self> {
        if !start.is_finite() || !stop.is_finite() {
            return Err(ResponseError::InvalidSweep {
                what: "bounds must be finite",
            });
        }
        if start < 0.0 {
            return Err(ResponseError::InvalidSweep {
                what: "start must be non-negative",
            });
        }
        if points == 0 {
            return Err(ResponseError::InvalidSweep {
                what: "sweep must have at least 1 point",
            });
        }
        if points > 1 && start >= stop {
            return Err(ResponseError::InvalidSweep {
                what: "start must be less than stop",
            });
        }
        if spacing == SweepSpacing::Logarithmic && start <= 0.0 {
            return Err(ResponseError::InvalidSweep {
                what: "logarithmic sweep requires start > 0",
            });
        }

        let samples = match spacing {
            SweepSpacing::Linear => linspace(start, stop, points),
            SweepSpacing::Logarithmic => logspace(start, stop, points),
        };
        Self::from_samples(samples)
    }

    pub fn linear(start: f64, stop: f64, points: usize) -> ResponseResult<Self> {
        Self::new(start, stop, points, SweepSpacing::Linear)
    }

    pub fn logarithmic(start: f64, stop: f64, points: usize) -> ResponseResult<Self> {
        Self::new(start, stop, points, SweepSpacing::Logarithmic)
    }

    /// Sweep between typed angular velocities.
    pub fn between(
        start: AngularVelocity,
        stop: AngularVelocity,
        points: usize,
        spacing: SweepSpacing,
    ) -> ResponseResult<Self> {
        Self::new(radps_of(start), radps_of(stop), points, spacing)
    }

    /// Use caller-supplied samples after checking the ordering invariant.
    pub fn from_samples(samples: Vec<f64>) -> ResponseResult<Self> {
        if samples.is_empty() {
            return Err(ResponseError::InvalidSweep {
                what: "sweep must have at least 1 point",
            });
        }
        if samples.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ResponseError::InvalidSweep {
                what: "frequencies must be finite and non-negative",
            });
        }
        if samples.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(ResponseError::InvalidSweep {
                what: "frequencies must be strictly increasing",
            });
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn start(&self) -> f64 {
        self.samples[0]
    }

    pub fn stop(&self) -> f64 {
        self.samples[self.samples.len() - 1]
    }
}

impl Default for FrequencySweep {
    /// 10^6 linear samples over [0.01, 100] rad/s.
    fn default() -> Self {
        Self {
            samples: linspace(DEFAULT_START_RADPS, DEFAULT_STOP_RADPS, DEFAULT_POINTS),
        }
    }
}

fn linspace(start: f64, stop: f64, points: usize) -> Vec<f64> {
    if points <= 1 {
        return vec![start];
    }
    let step = (stop - start) / (points - 1) as f64;
    let mut samples: Vec<f64> = (0..points).map(|i| start + i as f64 * step).collect();
    // Ensure exact endpoint
    samples[points - 1] = stop;
    samples
}

fn logspace(start: f64, stop: f64, points: usize) -> Vec<f64> {
    if points <= 1 {
        return vec![start];
    }
    let log_start = start.log10();
    let log_stop = stop.log10();
    let step = (log_stop - log_start) / (points - 1) as f64;
    let mut samples: Vec<f64> = (0..points)
        .map(|i| 10f64.powf(log_start + i as f64 * step))
        .collect();
    samples[0] = start;
    samples[points - 1] = stop;
    samples
}
