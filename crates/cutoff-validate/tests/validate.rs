//! End-to-end validation scenarios.

use std::collections::BTreeMap;

use cutoff_model::{CellValue, Finding, FindingsReport, Row, Table};
use cutoff_validate::validate;

const SOURCE: &str = "cutoff_enero.csv";

const EXPECTED: [&str; 5] = ["Year", "Month", "Invoice", "SalesOrg", "Channel"];

fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
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
fn conforming_file_passes_every_check() {
    let input = table(&EXPECTED, &[&["2026", "01", "INV1", "US13", "Retail"]]);
    let report = validate(&input, SOURCE);

    assert_eq!(report.len(), 8);
    assert!(report.is_conforming());
    assert_eq!(report.error_events, 0);
    for finding in report.iter() {
        assert_eq!(finding.source_name, SOURCE);
        assert!(finding.is_passing(), "unexpected violation: {finding:?}");
    }

    let overall = report.findings.last().unwrap();
    assert_eq!(overall.rule_group, "Consolidado");
    assert_eq!(overall.indicator, "Resultado general");
    assert_eq!(overall.outcome, "Archivo conforme");
    assert_eq!(overall.detail, None);
}

#[test]
fn empty_table_is_vacuously_conforming() {
    let input = table(&EXPECTED, &[]);
    let report = validate(&input, SOURCE);

    assert_eq!(report.len(), 8);
    assert!(report.is_conforming());
    assert_eq!(
        report.findings.last().unwrap().outcome,
        "Archivo conforme"
    );
}

#[test]
fn structure_check_emits_exactly_one_passing_finding_for_exact_schema() {
    let input = table(&EXPECTED, &[&["2026", "01", "INV1", "US13", "Retail"]]);
    let report = validate(&input, SOURCE);

    let structure = by_indicator(&report, "Estructura");
    assert_eq!(structure.len(), 1);
    assert_eq!(structure[0].outcome, "Estructura OK");
    assert_eq!(structure[0].detail.as_deref(), Some("Exacta y en orden"));
}

#[test]
fn missing_and_extra_columns_are_reported_together() {
    let input = table(
        &["Year", "Month", "Invoice", "SalesOrg", "Extra"],
        &[&["2026", "01", "INV1", "US13", "x"]],
    );
    let report = validate(&input, SOURCE);

    let structure = by_indicator(&report, "Estructura");
    assert_eq!(structure.len(), 1);
    assert_eq!(structure[0].outcome, "Error");
    assert_eq!(
        structure[0].detail.as_deref(),
        Some("Faltan columnas: Channel ; Columnas no permitidas: Extra")
    );
    assert!(!report.is_conforming());
    assert_eq!(report.error_events, 1);
}

#[test]
fn column_order_is_checked_once_the_sets_match() {
    let input = table(
        &["Month", "Year", "Invoice", "SalesOrg", "Channel"],
        &[&["01", "2026", "INV1", "US13", "Retail"]],
    );
    let report = validate(&input, SOURCE);

    let structure = by_indicator(&report, "Estructura");
    assert_eq!(structure[0].outcome, "Error");
    assert_eq!(
        structure[0].detail.as_deref(),
        Some("Orden de columnas incorrecto")
    );
    assert_eq!(report.error_events, 1);
}

#[test]
fn duplicate_rows_are_listed_with_spreadsheet_numbers() {
    let input = table(
        &EXPECTED,
        &[
            &["2026", "01", "INV1", "US13", "Retail"],
            &["2026", "01", "INV2", "US13", "Retail"],
            &["2026", "01", "INV1", "US13", "Retail"],
        ],
    );
    let report = validate(&input, SOURCE);

    let duplicates = by_indicator(&report, "Duplicados");
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].outcome, "1 fila(s) duplicada(s)");
    assert_eq!(duplicates[0].detail.as_deref(), Some("Filas: [4]"));
}

#[test]
fn null_cells_cascade_into_null_type_and_domain_findings() {
    let input = table(
        &EXPECTED,
        &[
            &["", "01", "INV1", "US13", "Retail"],
            &["2026", "02", "INV2", "US13", "Retail"],
        ],
    );
    let report = validate(&input, SOURCE);

    let nulls = by_indicator(&report, "Nulos");
    assert_eq!(nulls.len(), 1);
    assert_eq!(nulls[0].outcome, "Nulo en Year");
    assert_eq!(nulls[0].detail.as_deref(), Some("Fila 2 / Year = nulo"));

    // The same cell independently fails the type and Year checks.
    let types = by_indicator(&report, "Tipo de dato");
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].outcome, "Year no es string");

    let year = by_indicator(&report, "Year");
    assert_eq!(year.len(), 1);
    assert_eq!(year[0].outcome, "Error");
    assert_eq!(
        year[0].detail.as_deref(),
        Some("Años no válidos o distintos de 2026; Filas: [2]")
    );

    assert_eq!(report.error_events, 3);
    assert!(!report.is_conforming());
}

#[test]
fn error_scenario_reports_salesorg_and_month_and_fails_overall() {
    let input = table(&EXPECTED, &[&["2026", "13", "INV1", "ZZ99", "Retail"]]);
    let report = validate(&input, SOURCE);

    let month = by_indicator(&report, "Month");
    assert_eq!(month.len(), 1);
    assert_eq!(month[0].outcome, "Error");
    assert_eq!(
        month[0].detail.as_deref(),
        Some("Mes no válido (debe estar entre 1 y 12); Filas: [2]")
    );

    let salesorg = by_indicator(&report, "SalesOrg");
    assert_eq!(salesorg.len(), 1);
    assert_eq!(salesorg[0].outcome, "Valor inválido");
    assert_eq!(
        salesorg[0].detail.as_deref(),
        Some("Fila 2 / SalesOrg = ZZ99")
    );

    assert_eq!(
        report.findings.last().unwrap().outcome,
        "Archivo con errores"
    );
    assert_eq!(report.error_events, 2);
}

#[test]
fn period_columns_are_validated_only_when_present() {
    let without_periods = table(&EXPECTED, &[&["2026", "01", "INV1", "US13", "Retail"]]);
    let report = validate(&without_periods, SOURCE);
    assert!(by_indicator(&report, "Valid_From_Period").is_empty());
    assert!(by_indicator(&report, "Valid_To_Period").is_empty());

    let with_period = table(
        &["Year", "Month", "Invoice", "SalesOrg", "Channel", "Valid_From_Period"],
        &[
            &["2026", "01", "INV1", "US13", "Retail", "2026 P01"],
            &["2026", "02", "INV2", "US13", "Retail", "2026P02"],
        ],
    );
    let report = validate(&with_period, SOURCE);

    let period = by_indicator(&report, "Valid_From_Period");
    assert_eq!(period.len(), 1);
    assert_eq!(period[0].outcome, "Formato inválido");
    assert_eq!(
        period[0].detail.as_deref(),
        Some("Fila 3 / Valid_From_Period = 2026P02")
    );
    // One structural violation (extra column) plus the period mismatch.
    assert_eq!(report.error_events, 2);
}

#[test]
fn validation_is_idempotent() {
    let input = table(
        &EXPECTED,
        &[
            &["2026", "13", "INV1", "ZZ99", "Retail"],
            &["", "01", "INV2", "US13", ""],
        ],
    );
    let first = validate(&input, SOURCE);
    let second = validate(&input, SOURCE);
    assert_eq!(first, second);
}
