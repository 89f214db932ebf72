//! Fixed display ranges for Bode plots.
//!
//! Reproduced plots must use these ranges, so they are data rather than style:
//! magnitude [-40, 40] dB, phase [-180, 90] degrees with a tick every 30
//! degrees, frequency [0.01, 100] rad/s on a log axis.

use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]` on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, v: f64) -> bool {
        (self.min..=self.max).contains(&v)
    }
}

/// Axis limits handed to whatever renders the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodeAxes {
    /// Frequency axis (rad/s)
    pub frequency: AxisRange,
    /// Frequency axis uses log10 scale
    pub frequency_log_scale: bool,
    /// Gain axis (dB)
    pub magnitude_db: AxisRange,
    /// Phase axis (degrees)
    pub phase_deg: AxisRange,
    /// Major tick spacing on the phase axis (degrees)
    pub phase_tick_step_deg: f64,
}

impl Default for BodeAxes {
    fn default() -> Self {
        Self {
            frequency: AxisRange::new(0.01, 100.0),
            frequency_log_scale: true,
            magnitude_db: AxisRange::new(-40.0, 40.0),
            phase_deg: AxisRange::new(-180.0, 90.0),
            phase_tick_step_deg: 30.0,
        }
    }
}

impl BodeAxes {
    /// Major ticks on the phase axis, from the lower limit up to the upper one.
    pub fn phase_ticks(&self) -> Vec<f64> {
        if self.phase_tick_step_deg <= 0.0 {
            return Vec::new();
        }
        let span = self.phase_deg.max - self.phase_deg.min;
        let count = (span / self.phase_tick_step_deg).floor() as usize + 1;
        (0..count)
            .map(|i| self.phase_deg.min + i as f64 * self.phase_tick_step_deg)
            .collect()
    }
}
