//! Schema conformance: required columns present, no extras, exact order.

use cutoff_model::Table;

use crate::rules::{REQUIRED_COLUMNS, RULE_GROUP_STRUCTURE};
use crate::sink::FindingSink;

const INDICATOR: &str = "Estructura";

pub(crate) fn check(table: &Table, sink: &mut FindingSink) {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !table.has_column(column))
        .collect();
    let extra: Vec<&str> = table
        .columns
        .iter()
        .map(String::as_str)
        .filter(|column| !REQUIRED_COLUMNS.contains(column))
        .collect();

    if !missing.is_empty() || !extra.is_empty() {
        let mut fragments = Vec::new();
        if !missing.is_empty() {
            fragments.push(format!("Faltan columnas: {}", missing.join(", ")));
        }
        if !extra.is_empty() {
            fragments.push(format!("Columnas no permitidas: {}", extra.join(", ")));
        }
        sink.violation(
            RULE_GROUP_STRUCTURE,
            INDICATOR,
            "Error",
            Some(fragments.join(" ; ")),
        );
        return;
    }

    // The order sub-check only applies once the sets match.
    if table.columns.iter().map(String::as_str).eq(REQUIRED_COLUMNS) {
        sink.push(
            RULE_GROUP_STRUCTURE,
            INDICATOR,
            "Estructura OK",
            Some("Exacta y en orden".to_string()),
        );
    } else {
        sink.violation(
            RULE_GROUP_STRUCTURE,
            INDICATOR,
            "Error",
            Some("Orden de columnas incorrecto".to_string()),
        );
    }
}
