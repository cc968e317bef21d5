use std::path::PathBuf;

use cutoff_model::{FindingsReport, Table};

/// Outcome of one `validate` run, consumed by the summary printer.
pub struct ValidateRunResult {
    pub source_name: String,
    pub table: Table,
    pub report: FindingsReport,
    pub written: Vec<PathBuf>,
    pub has_errors: bool,
}
