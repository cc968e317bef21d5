//! SalesOrg column: membership in the fixed allow-list, case-sensitive.

use cutoff_model::Table;

use crate::rules::{RULE_GROUP_STRUCTURE, SALESORG_COLUMN, salesorg_allowed};
use crate::sink::FindingSink;
use crate::util::spreadsheet_row;

pub(crate) fn check(table: &Table, sink: &mut FindingSink) {
    if !table.has_column(SALESORG_COLUMN) {
        return;
    }

    let mut invalid = 0usize;
    for (index, row) in table.rows.iter().enumerate() {
        let cell = row.cell(SALESORG_COLUMN);
        if salesorg_allowed(cell.render()) {
            continue;
        }
        invalid += 1;
        let shown = if cell.is_missing() { "nulo" } else { cell.render() };
        sink.violation(
            RULE_GROUP_STRUCTURE,
            SALESORG_COLUMN,
            "Valor inválido",
            Some(format!(
                "Fila {} / {SALESORG_COLUMN} = {shown}",
                spreadsheet_row(index)
            )),
        );
    }

    if invalid == 0 {
        sink.push(
            RULE_GROUP_STRUCTURE,
            SALESORG_COLUMN,
            "OK",
            Some("Todos los valores válidos".to_string()),
        );
    }
}
