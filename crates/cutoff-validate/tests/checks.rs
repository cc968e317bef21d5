//! Focused edge cases per check.

use std::collections::BTreeMap;

use cutoff_model::{CellValue, Finding, FindingsReport, Row, Table};
use cutoff_validate::validate;

fn text_table(columns: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(columns.iter().map(ToString::to_string).collect());
    for cells in rows {
        let mut map = BTreeMap::new();
        for (column, value) in columns.iter().zip(cells.iter()) {
            let cell = if value.is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text((*value).to_string())
            };
            map.insert((*column).to_string(), cell);
        }
        table.push_row(Row::new(map));
    }
    table
}

fn by_indicator<'a>(report: &'a FindingsReport, indicator: &str) -> Vec<&'a Finding> {
    report
        .iter()
        .filter(|finding| finding.indicator == indicator)
        .collect()
}

#[test]
fn year_aggregates_every_offending_row() {
    let input = text_table(&["Year"], &[&["2026"], &["26"], &["2025"], &["2026a"]]);
    let report = validate(&input, "year.csv");

    let year = by_indicator(&report, "Year");
    assert_eq!(year.len(), 1);
    assert_eq!(year[0].outcome, "Error");
    assert_eq!(
        year[0].detail.as_deref(),
        Some("Años no válidos o distintos de 2026; Filas: [3, 4, 5]")
    );
}

#[test]
fn year_values_are_trimmed_before_matching() {
    let input = text_table(&["Year"], &[&[" 2026 "]]);
    let report = validate(&input, "year.csv");

    let year = by_indicator(&report, "Year");
    assert_eq!(year.len(), 1);
    assert_eq!(year[0].outcome, "OK");
}

#[test]
fn month_accepts_padded_and_unpadded_values() {
    let input = text_table(&["Month"], &[&["1"], &["01"], &["12"]]);
    let report = validate(&input, "month.csv");

    let month = by_indicator(&report, "Month");
    assert_eq!(month.len(), 1);
    assert_eq!(month[0].outcome, "OK");
    assert_eq!(month[0].detail.as_deref(), Some("Valores de mes válidos"));
}

#[test]
fn month_rejects_out_of_range_values_in_one_aggregate() {
    let input = text_table(&["Month"], &[&["0"], &["6"], &["13"], &["00"], &["abc"]]);
    let report = validate(&input, "month.csv");

    let month = by_indicator(&report, "Month");
    assert_eq!(month.len(), 1);
    assert_eq!(month[0].outcome, "Error");
    assert_eq!(
        month[0].detail.as_deref(),
        Some("Mes no válido (debe estar entre 1 y 12); Filas: [2, 4, 5, 6]")
    );
}

#[test]
fn salesorg_is_case_sensitive_and_reports_each_row() {
    let input = text_table(&["SalesOrg"], &[&["US13"], &["us13"], &["ZZ99"]]);
    let report = validate(&input, "salesorg.csv");

    let salesorg = by_indicator(&report, "SalesOrg");
    assert_eq!(salesorg.len(), 2);
    assert_eq!(salesorg[0].outcome, "Valor inválido");
    assert_eq!(salesorg[0].detail.as_deref(), Some("Fila 3 / SalesOrg = us13"));
    assert_eq!(salesorg[1].detail.as_deref(), Some("Fila 4 / SalesOrg = ZZ99"));
}

#[test]
fn missing_salesorg_cells_are_outside_the_domain() {
    let input = text_table(&["SalesOrg"], &[&[""]]);
    let report = validate(&input, "salesorg.csv");

    let salesorg = by_indicator(&report, "SalesOrg");
    assert_eq!(salesorg.len(), 1);
    assert_eq!(salesorg[0].detail.as_deref(), Some("Fila 2 / SalesOrg = nulo"));
}

#[test]
fn fully_wrong_schema_lists_all_required_columns() {
    let input = text_table(&["Foo"], &[&["bar"]]);
    let report = validate(&input, "schema.csv");

    let structure = by_indicator(&report, "Estructura");
    assert_eq!(structure.len(), 1);
    assert_eq!(
        structure[0].detail.as_deref(),
        Some(
            "Faltan columnas: Year, Month, Invoice, SalesOrg, Channel ; \
             Columnas no permitidas: Foo"
        )
    );
}

#[test]
fn repeated_duplicates_count_each_later_occurrence() {
    let row: &[&str] = &["2026", "01", "INV1", "US13", "Retail"];
    let input = text_table(
        &["Year", "Month", "Invoice", "SalesOrg", "Channel"],
        &[row, row, row],
    );
    let report = validate(&input, "dup.csv");

    let duplicates = by_indicator(&report, "Duplicados");
    assert_eq!(duplicates[0].outcome, "2 fila(s) duplicada(s)");
    assert_eq!(duplicates[0].detail.as_deref(), Some("Filas: [3, 4]"));
}

#[test]
fn coerced_cells_fail_the_type_check_with_their_kind() {
    let mut table = Table::new(vec!["Invoice".to_string()]);
    let mut cells = BTreeMap::new();
    cells.insert(
        "Invoice".to_string(),
        CellValue::Numeric("123".to_string()),
    );
    table.push_row(Row::new(cells));
    let report = validate(&table, "typed.csv");

    let types = by_indicator(&report, "Tipo de dato");
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].outcome, "Invoice no es string");
    assert_eq!(
        types[0].detail.as_deref(),
        Some("Fila 2 / Invoice = 123 (numérico)")
    );
}

#[test]
fn period_format_requires_exact_shape() {
    let input = text_table(
        &["Valid_To_Period"],
        &[&["2026 P01"], &["2026 p01"], &["26 P01"], &["2026 P1"]],
    );
    let report = validate(&input, "period.csv");

    let period = by_indicator(&report, "Valid_To_Period");
    assert_eq!(period.len(), 3);
    for finding in &period {
        assert_eq!(finding.outcome, "Formato inválido");
    }
    assert_eq!(
        period[0].detail.as_deref(),
        Some("Fila 3 / Valid_To_Period = 2026 p01")
    );
}
