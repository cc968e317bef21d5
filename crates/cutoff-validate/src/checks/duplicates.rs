//! Exact duplicate rows, across all loaded columns.

use std::collections::HashSet;

use cutoff_model::{Row, Table};

use crate::rules::RULE_GROUP_STRUCTURE;
use crate::sink::FindingSink;
use crate::util::{format_rows, spreadsheet_row};

const INDICATOR: &str = "Duplicados";

pub(crate) fn check(table: &Table, sink: &mut FindingSink) {
    let mut seen: HashSet<&Row> = HashSet::with_capacity(table.height());
    let mut duplicates = Vec::new();
    for (index, row) in table.rows.iter().enumerate() {
        if !seen.insert(row) {
            duplicates.push(spreadsheet_row(index));
        }
    }

    if duplicates.is_empty() {
        sink.push(
            RULE_GROUP_STRUCTURE,
            INDICATOR,
            "OK",
            Some("No hay duplicados".to_string()),
        );
    } else {
        sink.violation(
            RULE_GROUP_STRUCTURE,
            INDICATOR,
            &format!("{} fila(s) duplicada(s)", duplicates.len()),
            Some(format!("Filas: {}", format_rows(&duplicates))),
        );
    }
}
