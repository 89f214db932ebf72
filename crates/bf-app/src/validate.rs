//! Analysis file validation.
//!
//! Runs every check that does not require evaluating a response: structure,
//! names, coefficient sanity, model construction and sweep bounds.

use std::collections::HashSet;

use crate::analysis_service::{build_model, build_sweep};
use crate::schema::{AnalysisDef, AnalysisFile, LATEST_VERSION};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate analysis name: {name}")]
    DuplicateName { name: String },

    #[error("Invalid value in analysis '{analysis}': {field} ({reason})")]
    InvalidValue {
        analysis: String,
        field: String,
        reason: String,
    },

    #[error("Analysis file contains no analyses")]
    Empty,

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_analysis_file(file: &AnalysisFile) -> Result<(), ValidationError> {
    if file.version == 0 || file.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }
    if file.analyses.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut names = HashSet::new();
    for def in &file.analyses {
        if !names.insert(def.name.as_str()) {
            return Err(ValidationError::DuplicateName {
                name: def.name.clone(),
            });
        }
        validate_analysis(def)?;
    }
    Ok(())
}

pub fn validate_analysis(def: &AnalysisDef) -> Result<(), ValidationError> {
    let invalid = |field: &str, reason: String| ValidationError::InvalidValue {
        analysis: def.name.clone(),
        field: field.to_string(),
        reason,
    };

    if def.name.trim().is_empty() {
        return Err(invalid("name", "must not be empty".to_string()));
    }
    // Names become export file stems.
    if def
        .name
        .chars()
        .any(|c| matches!(c, '/' | '\\' | ':' | '\0'))
    {
        return Err(invalid(
            "name",
            "must not contain path separators".to_string(),
        ));
    }

    build_model(def).map_err(|e| invalid("model", e.to_string()))?;
    build_sweep(&def.sweep).map_err(|e| invalid("sweep", e.to_string()))?;
    Ok(())
}
