//! Spreadsheet export: one finding per row, emission order preserved.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use cutoff_model::FindingsReport;

pub const FINDINGS_CSV_NAME: &str = "resultado_validacion.csv";

const HEADER: [&str; 5] = [
    "source_name",
    "rule_group",
    "indicator",
    "outcome",
    "detail",
];

/// Render the findings report as CSV text.
pub fn render_findings_csv(report: &FindingsReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for finding in report.iter() {
        writer.write_record([
            finding.source_name.as_str(),
            finding.rule_group.as_str(),
            finding.indicator.as_str(),
            finding.outcome.as_str(),
            finding.detail.as_deref().unwrap_or(""),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| anyhow!("flush findings csv: {error}"))?;
    String::from_utf8(bytes).context("findings csv is not utf-8")
}

/// Write `resultado_validacion.csv` into `output_dir`.
pub fn write_findings_csv(output_dir: &Path, report: &FindingsReport) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;
    let output_path = output_dir.join(FINDINGS_CSV_NAME);
    let rendered = render_findings_csv(report)?;
    std::fs::write(&output_path, rendered)
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(output_path)
}
