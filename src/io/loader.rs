//! CSV ingestion: survey file to typed `Dataset`.
//!
//! The header must match the `Record` field names; categorical values must
//! be labels the schema knows. A row that does not deserialize aborts the
//! load with the file path attached, since a partially loaded survey would
//! silently skew every aggregate downstream.

use crate::core::{Dataset, Record};
use crate::errors::{Result, SleepdashError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let file = File::open(path).map_err(|source| SleepdashError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = read_dataset(BufReader::new(file)).map_err(|source| SleepdashError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!(
        "loaded {} survey records from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

/// Parse survey CSV from any reader; tests use this with inline fixtures.
pub fn read_dataset<R: std::io::Read>(reader: R) -> std::result::Result<Dataset, csv::Error> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records: Vec<Record> = Vec::new();
    for row in csv_reader.deserialize() {
        records.push(row?);
    }
    Ok(Dataset::new(records))
}
