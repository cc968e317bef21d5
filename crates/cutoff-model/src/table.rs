#![deny(unsafe_code)]

use std::collections::BTreeMap;

/// A loaded cell value.
///
/// The loader's strict contract produces only `Text` and `Missing`. When
/// type inference is enabled upstream, numeric- and boolean-looking cells
/// arrive as `Numeric`/`Boolean` with the raw text preserved, so checks
/// can report both the value and its loaded kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Numeric(String),
    Boolean(String),
    Missing,
}

impl CellValue {
    pub fn is_text(&self) -> bool {
        matches!(self, CellValue::Text(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Raw text form of the cell. `Missing` renders empty.
    pub fn render(&self) -> &str {
        match self {
            CellValue::Text(raw) | CellValue::Numeric(raw) | CellValue::Boolean(raw) => raw,
            CellValue::Missing => "",
        }
    }

    /// Kind label used in findings.
    pub fn kind_name(&self) -> &'static str {
        match self {
            CellValue::Text(_) => "string",
            CellValue::Numeric(_) => "numérico",
            CellValue::Boolean(_) => "booleano",
            CellValue::Missing => "nulo",
        }
    }
}

const MISSING: CellValue = CellValue::Missing;

/// One table row: column name to cell value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(cells: BTreeMap<String, CellValue>) -> Self {
        Self { cells }
    }

    /// Cell for `column`; columns absent from the row read as `Missing`.
    pub fn cell(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&MISSING)
    }
}

/// An ordered-row, mapping-per-row table with an ordered column list.
///
/// The stable row index is the row's position in `rows`; all row-number
/// reporting derives from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}
