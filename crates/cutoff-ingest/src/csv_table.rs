#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::path::Path;

use sha2::Digest;
use tracing::debug;

use cutoff_model::{CellValue, Row, Table};

/// Options for reading a delimited cut-off upload.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Field delimiter; cut-off extracts ship `;`-separated.
    pub delimiter: u8,
    /// Load numeric- and boolean-looking cells as `Numeric`/`Boolean`
    /// instead of text. Off by default: the engine's contract is that
    /// cells are text-or-null unless coercion was explicitly requested.
    pub infer_types: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            infer_types: false,
        }
    }
}

/// A parsed upload plus its provenance.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    /// File name of the upload, used as the report's source identifier.
    pub source_name: String,
    /// Hex SHA-256 of the file bytes.
    pub sha256: String,
    pub table: Table,
}

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("input file has no usable header row")]
    MissingHeader,
}

/// Read a delimited file into a table with string-typed columns.
///
/// Headers and cells are trimmed (and BOM-stripped); empty cells load as
/// `Missing`. Malformed input (ragged records, undecodable bytes) is
/// rejected here, before the validation engine ever runs.
pub fn read_csv_table(path: &Path, options: &IngestOptions) -> Result<LoadedTable, IngestError> {
    let bytes = std::fs::read(path)?;
    let sha256 = hex::encode(sha2::Sha256::digest(&bytes));
    let source_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload")
        .to_string();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(options.delimiter)
        .from_reader(bytes.as_slice());

    let columns: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    if columns.iter().all(|column| column.is_empty()) {
        return Err(IngestError::MissingHeader);
    }

    let mut table = Table::new(columns.clone());
    for record in reader.records() {
        let record = record?;
        let mut cells: BTreeMap<String, CellValue> = BTreeMap::new();
        for (column, raw) in columns.iter().zip(record.iter()) {
            cells.insert(column.clone(), load_cell(raw, options.infer_types));
        }
        table.push_row(Row::new(cells));
    }

    debug!(
        source_name = %source_name,
        rows = table.height(),
        columns = table.columns.len(),
        "csv table loaded"
    );

    Ok(LoadedTable {
        source_name,
        sha256,
        table,
    })
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn load_cell(raw: &str, infer_types: bool) -> CellValue {
    let value = raw.trim().trim_matches('\u{feff}');
    if value.is_empty() {
        return CellValue::Missing;
    }
    if infer_types {
        if value.parse::<f64>().is_ok() {
            return CellValue::Numeric(value.to_string());
        }
        if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
            return CellValue::Boolean(value.to_string());
        }
    }
    CellValue::Text(value.to_string())
}
