//! Analysis reports.

use std::fmt;
use std::sync::Arc;

use bf_lti::TransferFunctionModel;
use bf_response::{BodeAxes, BodePoint, FrequencyResponse};
use serde::Serialize;

/// Everything a plotting front end needs for one Bode plot.
#[derive(Debug, Clone, Serialize)]
pub struct BodeReport {
    pub name: String,
    pub model: TransferFunctionModel,
    pub response: Arc<FrequencyResponse>,
    pub axes: BodeAxes,
    #[serde(skip)]
    pub from_cache: bool,
}

/// Concise numbers for console output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportSummary {
    pub samples: usize,
    pub first: Option<BodePoint>,
    pub last: Option<BodePoint>,
    /// Sample with the highest gain.
    pub peak: Option<BodePoint>,
    /// Lowest-frequency sample where the gain falls through 0 dB.
    pub gain_crossover: Option<BodePoint>,
}

impl BodeReport {
    /// Samples inside the frequency window of [`BodeReport::axes`].
    pub fn visible_response(&self) -> FrequencyResponse {
        self.response.clip_to(self.axes.frequency)
    }

    pub fn summary(&self) -> ReportSummary {
        let response = &self.response;
        let peak = response
            .iter()
            .filter(|p| p.magnitude_db.is_finite())
            .max_by(|a, b| a.magnitude_db.total_cmp(&b.magnitude_db));
        let gain_crossover = response
            .magnitude_db()
            .windows(2)
            .position(|pair| pair[0] >= 0.0 && pair[1] < 0.0)
            .and_then(|i| response.point(i + 1));

        ReportSummary {
            samples: response.len(),
            first: response.point(0),
            last: response.len().checked_sub(1).and_then(|i| response.point(i)),
            peak,
            gain_crossover,
        }
    }
}

fn write_point(f: &mut fmt::Formatter<'_>, label: &str, point: Option<BodePoint>) -> fmt::Result {
    match point {
        Some(p) => writeln!(
            f,
            "  {label:<15} ω = {:>10.4} rad/s  {:>9.3} dB  {:>9.3}°",
            p.frequency, p.magnitude_db, p.phase_deg
        ),
        None => writeln!(f, "  {label:<15} -"),
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  samples         {}", self.samples)?;
        write_point(f, "first", self.first)?;
        write_point(f, "last", self.last)?;
        write_point(f, "peak gain", self.peak)?;
        write_point(f, "gain crossover", self.gain_crossover)
    }
}
