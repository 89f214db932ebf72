//! Analysis file loading and saving.
//!
//! The format follows the file extension: `.yaml`/`.yml` or `.json`.

use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::schema::AnalysisFile;

enum Format {
    Yaml,
    Json,
}

fn format_of(path: &Path) -> AppResult<Format> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        _ => Err(AppError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Load and parse an analysis file. Does not validate it.
pub fn load_analysis_file(path: &Path) -> AppResult<AnalysisFile> {
    let format = format_of(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let file = match format {
        Format::Yaml => serde_yaml::from_str(&content)?,
        Format::Json => serde_json::from_str(&content)?,
    };
    Ok(file)
}

/// Serialize an analysis file in the format implied by its extension.
pub fn save_analysis_file(path: &Path, file: &AnalysisFile) -> AppResult<()> {
    let content = match format_of(path)? {
        Format::Yaml => serde_yaml::to_string(file)?,
        Format::Json => serde_json::to_string_pretty(file)?,
    };
    std::fs::write(path, content).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
