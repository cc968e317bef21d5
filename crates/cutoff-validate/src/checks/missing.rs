//! Null cells in required columns, one finding per (row, column).

use cutoff_model::Table;

use crate::rules::{REQUIRED_COLUMNS, RULE_GROUP_STRUCTURE};
use crate::sink::FindingSink;
use crate::util::spreadsheet_row;

const INDICATOR: &str = "Nulos";

pub(crate) fn check(table: &Table, sink: &mut FindingSink) {
    let mut null_cells = 0usize;
    for column in REQUIRED_COLUMNS {
        if !table.has_column(column) {
            continue;
        }
        for (index, row) in table.rows.iter().enumerate() {
            if !row.cell(column).is_missing() {
                continue;
            }
            null_cells += 1;
            sink.violation(
                RULE_GROUP_STRUCTURE,
                INDICATOR,
                &format!("Nulo en {column}"),
                Some(format!("Fila {} / {column} = nulo", spreadsheet_row(index))),
            );
        }
    }

    if null_cells == 0 {
        sink.push(
            RULE_GROUP_STRUCTURE,
            INDICATOR,
            "OK",
            Some("No hay nulos en columnas requeridas".to_string()),
        );
    }
}
