//! JSON dataset reader
//!
//! Loads a `Dataset` from a JSON document. The document is first read as an
//! untyped `serde_json::Value` so structural problems (missing dataset,
//! sequences that are absent or not arrays) surface as `InvalidInput` rather
//! than as opaque deserialization errors. Only then is it converted into the
//! typed records.
//!
//! # Error Handling
//!
//! - A missing file is `FileNotFound`, other open/read failures are `IoError`
//! - Malformed JSON, or records with wrong field types, are `ParseError`
//! - Structural problems are `InvalidInput`

use crate::core::validator::validate_raw_dataset;
use crate::types::{AnalysisError, Dataset};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read a dataset from a JSON file
///
/// # Examples
///
/// ```no_run
/// use sales_analytics::io::json_reader::read_dataset;
/// use std::path::Path;
///
/// match read_dataset(Path::new("data.json")) {
///     Ok(data) => println!("Loaded {} sellers", data.sellers.len()),
///     Err(e) => eprintln!("Failed to load dataset: {}", e),
/// }
/// ```
pub fn read_dataset(path: &Path) -> Result<Dataset, AnalysisError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AnalysisError::file_not_found(path.display().to_string()),
        _ => AnalysisError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        },
    })?;

    let dataset = read_dataset_from(BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        sellers = dataset.sellers.len(),
        products = dataset.products.len(),
        purchase_records = dataset.purchase_records.len(),
        "Loaded dataset"
    );

    Ok(dataset)
}

/// Read a dataset from any reader producing JSON
pub fn read_dataset_from<R: Read>(reader: R) -> Result<Dataset, AnalysisError> {
    let document: Value = serde_json::from_reader(reader)?;
    dataset_from_value(document)
}

/// Parse a dataset from a JSON string
pub fn parse_dataset(json: &str) -> Result<Dataset, AnalysisError> {
    let document: Value = serde_json::from_str(json)?;
    dataset_from_value(document)
}

/// Convert an untyped JSON document into a dataset
///
/// Unknown top-level fields are ignored.
pub fn dataset_from_value(document: Value) -> Result<Dataset, AnalysisError> {
    validate_raw_dataset(&document)?;
    Ok(serde_json::from_value(document)?)
}
