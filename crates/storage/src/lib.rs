use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use shared::domain::{BoosterCategory, LaunchRecord, Outcome, SiteName};
use thiserror::Error;

pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const OUTCOME_COLUMN: &str = "class";
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("launch csv is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("launch csv row at line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("launch csv row at line {line}: class must be 0 or 1, got {value}")]
    InvalidOutcome { line: u64, value: i64 },
    #[error("failed to read launch csv headers: {0}")]
    Headers(#[source] csv::Error),
}

#[derive(Debug, Deserialize)]
struct LaunchCsvRow {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

impl LaunchCsvRow {
    fn into_record(self, line: u64) -> std::result::Result<LaunchRecord, IngestError> {
        let outcome = u8::try_from(self.class)
            .ok()
            .and_then(|class| Outcome::try_from(class).ok())
            .ok_or(IngestError::InvalidOutcome {
                line,
                value: self.class,
            })?;

        Ok(LaunchRecord {
            site: SiteName::new(self.site),
            payload_mass_kg: self.payload_mass_kg,
            outcome,
            booster_category: BoosterCategory::new(self.booster_category),
        })
    }
}

/// Reads launch records from CSV text with a header row. Columns other than
/// the four the dashboard uses are ignored.
pub fn read_launch_records<R: Read>(reader: R) -> std::result::Result<Vec<LaunchRecord>, IngestError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = reader.headers().map_err(IngestError::Headers)?.clone();
    for required in [
        SITE_COLUMN,
        PAYLOAD_COLUMN,
        OUTCOME_COLUMN,
        BOOSTER_CATEGORY_COLUMN,
    ] {
        if !headers.iter().any(|header| header == required) {
            return Err(IngestError::MissingColumn(required));
        }
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|source| IngestError::Csv {
            line: source.position().map(|pos| pos.line()).unwrap_or_default(),
            source,
        })?;
        let line = row.position().map(|pos| pos.line()).unwrap_or_default();
        let parsed: LaunchCsvRow = row
            .deserialize(Some(&headers))
            .map_err(|source| IngestError::Csv { line, source })?;
        records.push(parsed.into_record(line)?);
    }

    tracing::debug!(rows = records.len(), "parsed launch csv");
    Ok(records)
}

pub fn load_launch_records(path: impl AsRef<Path>) -> Result<Vec<LaunchRecord>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open launch dataset '{}'", path.display()))?;
    let records = read_launch_records(file)
        .with_context(|| format!("failed to parse launch dataset '{}'", path.display()))?;
    tracing::info!(
        path = %path.display(),
        rows = records.len(),
        "loaded launch dataset"
    );
    Ok(records)
}

pub fn resolve_dataset_path(raw: &str) -> PathBuf {
    let raw = raw.trim();
    if let Some(home_relative) = raw.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(home_relative);
        }
    }
    PathBuf::from(raw)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
