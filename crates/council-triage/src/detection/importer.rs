use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use super::domain::CaseRecord;

const CASE_ID_HEADER: &str = "case_id";
const EVIDENCE_SUFFIX: &str = "_evidence";

/// Imports case records from spreadsheet exports.
///
/// Review teams hand cases around as CSV: one row per case, one column per
/// indicator key, truthy cells marking detected indicators, and optional
/// `<key>_evidence` columns carrying free-text evidence. Any other column is
/// kept as passthrough metadata on the record.
pub struct CaseCsvImporter;

impl CaseCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CaseRecord>, CaseImportError> {
        let file = File::open(path.as_ref()).map_err(|source| CaseImportError::Open {
            path: path.as_ref().display().to_string(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CaseRecord>, CaseImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let mut records = Vec::new();

        for row in csv_reader.records() {
            let row = row?;
            let mut record = CaseRecord::default();

            for (header, cell) in headers.iter().zip(row.iter()) {
                if cell.is_empty() {
                    continue;
                }

                if header == CASE_ID_HEADER {
                    record.case_id = Some(cell.to_string());
                } else if header.ends_with(EVIDENCE_SUFFIX) {
                    record.insert_field(header, Value::String(cell.to_string()));
                } else {
                    record.insert_field(header, parse_cell(cell));
                }
            }

            records.push(record);
        }

        Ok(records)
    }
}

/// Truthy and falsy spellings map to indicator flags; anything else is kept
/// verbatim as metadata.
fn parse_cell(cell: &str) -> Value {
    match cell.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Value::Bool(true),
        "false" | "no" | "n" | "0" => Value::Bool(false),
        _ => Value::String(cell.to_string()),
    }
}

/// Error raised while importing a case CSV.
#[derive(Debug, thiserror::Error)]
pub enum CaseImportError {
    #[error("failed to open case export '{path}'")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse case export")]
    Parse(#[from] csv::Error),
}
