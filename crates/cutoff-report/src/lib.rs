//! Findings report exports.
//!
//! The presenter layer consumes a [`cutoff_model::FindingsReport`] and
//! writes it out as a spreadsheet (CSV, the five report columns in
//! emission order) and/or a JSON payload carrying schema identity and
//! source provenance.

pub mod json;
pub mod spreadsheet;

pub use json::{FINDINGS_JSON_NAME, FindingsPayload, build_findings_payload, write_findings_json};
pub use spreadsheet::{FINDINGS_CSV_NAME, render_findings_csv, write_findings_csv};
