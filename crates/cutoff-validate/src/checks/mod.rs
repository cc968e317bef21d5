//! Validation check modules.
//!
//! Each module performs one rule of the fixed cut-off pipeline. Checks
//! are independent: every one scans the original table and always
//! contributes at least one finding (a violation list or an explicit OK),
//! except the column-scoped checks, which skip absent columns.

mod datatype;
mod duplicates;
mod missing;
mod month;
mod period;
mod salesorg;
mod structure;
mod year;

use cutoff_model::{FindingsReport, Table};

use crate::rules::RULE_GROUP_OVERALL;
use crate::sink::FindingSink;

/// Run the fixed check pipeline over `table` and close with the overall
/// result.
pub(crate) fn run_all(table: &Table, source_name: &str) -> FindingsReport {
    let mut sink = FindingSink::new(source_name);

    // 1. Exact column set and order
    structure::check(table, &mut sink);
    // 2. Exact duplicate rows
    duplicates::check(table, &mut sink);
    // 3. Nulls in required columns
    missing::check(table, &mut sink);
    // 4. Non-text cells in required columns
    datatype::check(table, &mut sink);
    // 5. Fiscal period format
    period::check(table, &mut sink);
    // 6-8. Domain checks
    year::check(table, &mut sink);
    month::check(table, &mut sink);
    salesorg::check(table, &mut sink);

    // 9. Overall result over the violation-event counter
    let outcome = if sink.error_events() == 0 {
        "Archivo conforme"
    } else {
        "Archivo con errores"
    };
    sink.push(RULE_GROUP_OVERALL, "Resultado general", outcome, None);

    sink.into_report()
}
