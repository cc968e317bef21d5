//! Type conformance: required columns must hold text cells.

use cutoff_model::Table;

use crate::rules::{REQUIRED_COLUMNS, RULE_GROUP_STRUCTURE};
use crate::sink::FindingSink;
use crate::util::spreadsheet_row;

const INDICATOR: &str = "Tipo de dato";

pub(crate) fn check(table: &Table, sink: &mut FindingSink) {
    let mut offending = 0usize;
    for column in REQUIRED_COLUMNS {
        if !table.has_column(column) {
            continue;
        }
        for (index, row) in table.rows.iter().enumerate() {
            let cell = row.cell(column);
            if cell.is_text() {
                continue;
            }
            offending += 1;
            let row_number = spreadsheet_row(index);
            let detail = if cell.is_missing() {
                format!("Fila {row_number} / {column} = nulo")
            } else {
                format!(
                    "Fila {row_number} / {column} = {} ({})",
                    cell.render(),
                    cell.kind_name()
                )
            };
            sink.violation(
                RULE_GROUP_STRUCTURE,
                INDICATOR,
                &format!("{column} no es string"),
                Some(detail),
            );
        }
    }

    if offending == 0 {
        sink.push(
            RULE_GROUP_STRUCTURE,
            INDICATOR,
            "OK",
            Some("Todas las columnas requeridas son string".to_string()),
        );
    }
}
