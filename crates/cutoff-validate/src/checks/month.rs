//! Month column: 1-12, zero-padding accepted.

use cutoff_model::Table;

use crate::rules::{MONTH_COLUMN, MONTH_FORMAT, RULE_GROUP_STRUCTURE};
use crate::sink::FindingSink;
use crate::util::{format_rows, spreadsheet_row};

pub(crate) fn check(table: &Table, sink: &mut FindingSink) {
    if !table.has_column(MONTH_COLUMN) {
        return;
    }

    let mut invalid = Vec::new();
    for (index, row) in table.rows.iter().enumerate() {
        let text = row.cell(MONTH_COLUMN).render().trim();
        let valid = MONTH_FORMAT.is_match(text)
            && text.parse::<i64>().is_ok_and(|month| (1..=12).contains(&month));
        if !valid {
            invalid.push(spreadsheet_row(index));
        }
    }

    if invalid.is_empty() {
        sink.push(
            RULE_GROUP_STRUCTURE,
            MONTH_COLUMN,
            "OK",
            Some("Valores de mes válidos".to_string()),
        );
    } else {
        sink.violation(
            RULE_GROUP_STRUCTURE,
            MONTH_COLUMN,
            "Error",
            Some(format!(
                "Mes no válido (debe estar entre 1 y 12); Filas: {}",
                format_rows(&invalid)
            )),
        );
    }
}
