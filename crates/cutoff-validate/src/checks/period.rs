//! Fiscal period columns must match "YYYY P##" when present.

use cutoff_model::Table;

use crate::rules::{PERIOD_COLUMNS, PERIOD_FORMAT, RULE_GROUP_STRUCTURE};
use crate::sink::FindingSink;
use crate::util::spreadsheet_row;

pub(crate) fn check(table: &Table, sink: &mut FindingSink) {
    for column in PERIOD_COLUMNS {
        if !table.has_column(column) {
            continue;
        }
        let mut mismatches = 0usize;
        for (index, row) in table.rows.iter().enumerate() {
            let cell = row.cell(column);
            if PERIOD_FORMAT.is_match(cell.render()) {
                continue;
            }
            mismatches += 1;
            let shown = if cell.is_missing() { "nulo" } else { cell.render() };
            sink.violation(
                RULE_GROUP_STRUCTURE,
                column,
                "Formato inválido",
                Some(format!("Fila {} / {column} = {shown}", spreadsheet_row(index))),
            );
        }
        if mismatches == 0 {
            sink.push(
                RULE_GROUP_STRUCTURE,
                column,
                "OK",
                Some("Formato correcto en todos".to_string()),
            );
        }
    }
}
