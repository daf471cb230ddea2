use std::path::{Path, PathBuf};

use async_trait::async_trait;
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;

use super::{DatasetError, DatasetProvider};
use crate::features::postcodes::models::PostalRecord;

/// Row shape as written in the file, before any typing.
#[derive(Debug, Deserialize)]
struct RawPostalRow {
    suburb: String,
    area: String,
    street_code: String,
    box_code: String,
}

/// Reads the dataset from a CSV file with a
/// `suburb,area,street_code,box_code` header.
pub struct CsvDatasetProvider {
    path: PathBuf,
}

impl CsvDatasetProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DatasetProvider for CsvDatasetProvider {
    async fn load(&self) -> Result<Vec<PostalRecord>, DatasetError> {
        let contents = tokio::fs::read(&self.path)
            .await
            .map_err(|source| DatasetError::Source {
                path: self.path.display().to_string(),
                source,
            })?;

        let records = parse_records(&contents)?;
        tracing::debug!(
            "Loaded {} postal records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

/// Parse CSV bytes into records, failing on the first malformed row.
fn parse_records(contents: &[u8]) -> Result<Vec<PostalRecord>, DatasetError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(contents);

    let headers = reader
        .headers()
        .map_err(|e| csv_format_error(&e))?
        .clone();

    let mut records = Vec::new();
    let mut row = StringRecord::new();
    loop {
        match reader.read_record(&mut row) {
            Ok(true) => records.push(parse_row(&row, &headers)?),
            Ok(false) => break,
            Err(e) => return Err(csv_format_error(&e)),
        }
    }

    Ok(records)
}

fn parse_row(row: &StringRecord, headers: &StringRecord) -> Result<PostalRecord, DatasetError> {
    let line = row.position().map(|p| p.line()).unwrap_or_default();
    let format_error = |reason: String| DatasetError::Format { line, reason };

    let raw: RawPostalRow = row
        .deserialize(Some(headers))
        .map_err(|e| format_error(e.to_string()))?;

    if raw.suburb.is_empty() {
        return Err(format_error("suburb is empty".to_string()));
    }
    if raw.area.is_empty() {
        return Err(format_error("area is empty".to_string()));
    }

    let street_code = raw.street_code.trim().parse::<i64>().map_err(|_| {
        format_error(format!(
            "street_code '{}' is not an integer",
            raw.street_code
        ))
    })?;

    Ok(PostalRecord {
        suburb: raw.suburb,
        area: raw.area,
        street_code,
        box_code: raw.box_code,
    })
}

fn csv_format_error(e: &csv::Error) -> DatasetError {
    DatasetError::Format {
        line: e.position().map(|p| p.line()).unwrap_or_default(),
        reason: e.to_string(),
    }
}
