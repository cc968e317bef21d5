//! JSON findings payload, with source provenance.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use cutoff_ingest::LoadedTable;
use cutoff_model::{Finding, FindingsReport};

pub const FINDINGS_JSON_NAME: &str = "resultado_validacion.json";

const REPORT_SCHEMA: &str = "cutoff-validator.findings-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct FindingsPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub source_name: &'a str,
    pub source_sha256: &'a str,
    pub error_events: usize,
    pub conforming: bool,
    pub findings: &'a [Finding],
}

pub fn build_findings_payload<'a>(
    loaded: &'a LoadedTable,
    report: &'a FindingsReport,
) -> FindingsPayload<'a> {
    FindingsPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        source_name: &report.source_name,
        source_sha256: &loaded.sha256,
        error_events: report.error_events,
        conforming: report.is_conforming(),
        findings: &report.findings,
    }
}

/// Write `resultado_validacion.json` into `output_dir`.
pub fn write_findings_json(
    output_dir: &Path,
    loaded: &LoadedTable,
    report: &FindingsReport,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;
    let output_path = output_dir.join(FINDINGS_JSON_NAME);
    let payload = build_findings_payload(loaded, report);
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(output_path)
}
