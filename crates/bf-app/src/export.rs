//! CSV and JSON export of Bode data.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bf_response::{BodePoint, FrequencyResponse};

use crate::error::{AppError, AppResult};
use crate::report::BodeReport;

pub const CSV_HEADER: &str = "frequency_rad_s,magnitude_db,phase_deg";

fn csv_row(p: &BodePoint) -> String {
    format!("{},{},{}", p.frequency, p.magnitude_db, p.phase_deg)
}

/// Write `frequency_rad_s,magnitude_db,phase_deg` rows.
pub fn write_csv<W: Write>(response: &FrequencyResponse, mut out: W) -> std::io::Result<()> {
    writeln!(out, "{CSV_HEADER}")?;
    for p in response.iter() {
        writeln!(out, "{}", csv_row(&p))?;
    }
    out.flush()
}

/// The same rows as [`write_csv`], built in memory.
pub fn csv_string(response: &FrequencyResponse) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for p in response.iter() {
        out.push_str(&csv_row(&p));
        out.push('\n');
    }
    out
}

pub fn write_csv_file(path: &Path, response: &FrequencyResponse) -> AppResult<()> {
    let file = File::create(path).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_csv(response, BufWriter::new(file)).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Compact JSON of the full report (model, response, axes).
pub fn write_json_report(path: &Path, report: &BodeReport) -> AppResult<()> {
    let file = File::create(path).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, report)?;
    writer.flush().map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
