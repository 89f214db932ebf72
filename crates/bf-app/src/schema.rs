//! Analysis file schema.
//!
//! Every struct rejects unknown keys, so a misspelled option fails loudly
//! instead of being ignored.

use bf_lti::{DEFAULT_DENOMINATOR, DEFAULT_NUMERATOR, PadeOptions};
use bf_response::sweep::{DEFAULT_POINTS, DEFAULT_START_RADPS, DEFAULT_STOP_RADPS};
use bf_response::{SingularPolicy, SweepSpacing};
use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

fn default_version() -> u32 {
    LATEST_VERSION
}

fn default_numerator() -> Vec<f64> {
    DEFAULT_NUMERATOR.to_vec()
}

fn default_denominator() -> Vec<f64> {
    DEFAULT_DENOMINATOR.to_vec()
}

fn default_start() -> f64 {
    DEFAULT_START_RADPS
}

fn default_stop() -> f64 {
    DEFAULT_STOP_RADPS
}

fn default_points() -> usize {
    DEFAULT_POINTS
}

/// A file holding one or more analyses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AnalysisFile {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub analyses: Vec<AnalysisDef>,
}

/// One transfer function to analyse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AnalysisDef {
    pub name: String,
    /// Numerator coefficients, highest power first.
    #[serde(default = "default_numerator")]
    pub numerator: Vec<f64>,
    /// Denominator coefficients, highest power first.
    #[serde(default = "default_denominator")]
    pub denominator: Vec<f64>,
    /// Pure time delay in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(default)]
    pub pade: PadeOptions,
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub on_singular: SingularPolicy,
}

impl AnalysisDef {
    /// Unity plant with default options.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            numerator: default_numerator(),
            denominator: default_denominator(),
            delay: None,
            pade: PadeOptions::default(),
            sweep: SweepConfig::default(),
            on_singular: SingularPolicy::default(),
        }
    }
}

/// Frequency sweep parameters (rad/s).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SweepConfig {
    #[serde(default = "default_start")]
    pub start: f64,
    #[serde(default = "default_stop")]
    pub stop: f64,
    #[serde(default = "default_points")]
    pub points: usize,
    #[serde(default)]
    pub spacing: SweepSpacing,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_RADPS,
            stop: DEFAULT_STOP_RADPS,
            points: DEFAULT_POINTS,
            spacing: SweepSpacing::Linear,
        }
    }
}
