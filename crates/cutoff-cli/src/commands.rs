use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, info_span};

use cutoff_ingest::{IngestOptions, read_csv_table};
use cutoff_report::{write_findings_csv, write_findings_json};
use cutoff_validate::{rules, validate};

use crate::cli::{ReportFormatArg, ValidateArgs};
use crate::summary::apply_table_style;
use crate::types::ValidateRunResult;

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateRunResult> {
    let delimiter = delimiter_byte(args.delimiter)?;
    let span = info_span!("validate", file = %args.file.display());
    let _guard = span.enter();

    let load_start = Instant::now();
    let options = IngestOptions {
        delimiter,
        infer_types: args.infer_types,
    };
    let loaded = read_csv_table(&args.file, &options)
        .with_context(|| format!("load {}", args.file.display()))?;
    info!(
        source_name = %loaded.source_name,
        rows = loaded.table.height(),
        columns = loaded.table.columns.len(),
        duration_ms = load_start.elapsed().as_millis(),
        "file loaded"
    );

    let report = validate(&loaded.table, &loaded.source_name);
    info!(
        findings = report.len(),
        error_events = report.error_events,
        conforming = report.is_conforming(),
        "validation complete"
    );

    let mut written = Vec::new();
    if !args.dry_run {
        let output_dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| default_output_dir(&args.file));
        if matches!(args.format, ReportFormatArg::Csv | ReportFormatArg::Both) {
            written.push(write_findings_csv(&output_dir, &report)?);
        }
        if matches!(args.format, ReportFormatArg::Json | ReportFormatArg::Both) {
            written.push(write_findings_json(&output_dir, &loaded, &report)?);
        }
    }

    let has_errors = !report.is_conforming();
    Ok(ValidateRunResult {
        source_name: loaded.source_name,
        table: loaded.table,
        report,
        written,
        has_errors,
    })
}

pub fn run_rules() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Check", "Scope", "Rule"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        "Estructura".to_string(),
        rules::REQUIRED_COLUMNS.join(", "),
        "Required columns present exactly, no extras, in order".to_string(),
    ]);
    table.add_row(vec![
        "Duplicados".to_string(),
        "all columns".to_string(),
        "No exact duplicate rows".to_string(),
    ]);
    table.add_row(vec![
        "Nulos".to_string(),
        rules::REQUIRED_COLUMNS.join(", "),
        "No null cells in required columns".to_string(),
    ]);
    table.add_row(vec![
        "Tipo de dato".to_string(),
        rules::REQUIRED_COLUMNS.join(", "),
        "Required cells load as text".to_string(),
    ]);
    table.add_row(vec![
        "Periodo".to_string(),
        rules::PERIOD_COLUMNS.join(", "),
        "Format YYYY P## (columns validated only when present)".to_string(),
    ]);
    table.add_row(vec![
        "Year".to_string(),
        rules::YEAR_COLUMN.to_string(),
        format!("Four digits, equal to {}", rules::CUTOFF_YEAR),
    ]);
    table.add_row(vec![
        "Month".to_string(),
        rules::MONTH_COLUMN.to_string(),
        "1-12, zero-padding accepted".to_string(),
    ]);
    table.add_row(vec![
        "SalesOrg".to_string(),
        rules::SALESORG_COLUMN.to_string(),
        format!("One of {}", rules::SALESORG_ALLOWED.join(", ")),
    ]);
    table.add_row(vec![
        "Resultado general".to_string(),
        "-".to_string(),
        "Conforming iff zero violation events across all checks".to_string(),
    ]);
    println!("{table}");
    Ok(())
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {delimiter:?}");
    }
    Ok(delimiter as u8)
}

fn default_output_dir(file: &Path) -> PathBuf {
    file.parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
        .join("output")
}
