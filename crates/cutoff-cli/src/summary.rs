use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use cutoff_model::{FindingsReport, Table as DataTable};

use crate::types::ValidateRunResult;

pub fn print_run(result: &ValidateRunResult, preview_rows: usize) {
    println!("Source: {}", result.source_name);
    println!("Rows: {}", result.table.height());
    if preview_rows > 0 && result.table.height() > 0 {
        println!();
        println!("Preview:");
        println!("{}", preview_table(&result.table, preview_rows));
    }
    println!();
    println!("Findings:");
    println!("{}", findings_table(&result.report));
    for path in &result.written {
        println!("Report: {}", path.display());
    }
    let overall = if result.has_errors {
        "Archivo con errores"
    } else {
        "Archivo conforme"
    };
    println!("Result: {overall}");
}

fn preview_table(data: &DataTable, limit: usize) -> Table {
    let mut table = Table::new();
    table.set_header(data.columns.iter().map(|column| header_cell(column)));
    apply_table_style(&mut table);
    for row in data.rows.iter().take(limit) {
        table.add_row(data.columns.iter().map(|column| {
            let cell = row.cell(column);
            if cell.is_missing() {
                dim_cell("-")
            } else {
                Cell::new(cell.render())
            }
        }));
    }
    table
}

fn findings_table(report: &FindingsReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule group"),
        header_cell("Indicator"),
        header_cell("Outcome"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    for finding in report.iter() {
        let outcome_cell = if finding.is_passing() {
            Cell::new(&finding.outcome).fg(comfy_table::Color::Green)
        } else {
            Cell::new(&finding.outcome)
                .fg(comfy_table::Color::Red)
                .add_attribute(Attribute::Bold)
        };
        table.add_row(vec![
            Cell::new(&finding.rule_group),
            Cell::new(&finding.indicator),
            outcome_cell,
            match &finding.detail {
                Some(detail) => Cell::new(detail),
                None => dim_cell("-"),
            },
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(comfy_table::Color::DarkGrey)
}
