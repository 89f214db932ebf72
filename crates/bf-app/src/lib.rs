//! Shared application service layer for bodeflow.
//!
//! Turns analysis definitions (from the CLI or an analysis file) into Bode
//! reports: builds the model, generates the sweep, evaluates the response
//! through a content-keyed cache and exports the result.

pub mod analysis_file;
pub mod analysis_service;
pub mod cache;
pub mod error;
pub mod export;
pub mod report;
pub mod schema;
pub mod validate;

// Re-export key types for convenience
pub use analysis_file::{load_analysis_file, save_analysis_file};
pub use analysis_service::{build_model, build_sweep, run_analysis, run_analysis_file};
pub use cache::{ResponseCache, cache_key};
pub use error::{AppError, AppResult};
pub use export::{csv_string, write_csv, write_csv_file, write_json_report};
pub use report::{BodeReport, ReportSummary};
pub use schema::{AnalysisDef, AnalysisFile, LATEST_VERSION, SweepConfig};
pub use validate::{ValidationError, validate_analysis_file};
