//! Year column: four digits and equal to the cut-off year.

use cutoff_model::Table;

use crate::rules::{CUTOFF_YEAR, RULE_GROUP_STRUCTURE, YEAR_COLUMN, YEAR_FORMAT};
use crate::sink::FindingSink;
use crate::util::{format_rows, spreadsheet_row};

pub(crate) fn check(table: &Table, sink: &mut FindingSink) {
    if !table.has_column(YEAR_COLUMN) {
        return;
    }

    let mut invalid = Vec::new();
    for (index, row) in table.rows.iter().enumerate() {
        let text = row.cell(YEAR_COLUMN).render().trim();
        let valid = YEAR_FORMAT.is_match(text)
            && text.parse::<i64>().is_ok_and(|year| year == CUTOFF_YEAR);
        if !valid {
            invalid.push(spreadsheet_row(index));
        }
    }

    if invalid.is_empty() {
        sink.push(
            RULE_GROUP_STRUCTURE,
            YEAR_COLUMN,
            "OK",
            Some("Formato y valor de año correcto".to_string()),
        );
    } else {
        // One aggregate finding listing every offending spreadsheet row.
        sink.violation(
            RULE_GROUP_STRUCTURE,
            YEAR_COLUMN,
            "Error",
            Some(format!(
                "Años no válidos o distintos de {CUTOFF_YEAR}; Filas: {}",
                format_rows(&invalid)
            )),
        );
    }
}
