//! The hard-coded rule set for this report version.

use std::sync::LazyLock;

use regex::Regex;

/// Columns the cut-off file must carry, exactly and in this order.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Year", "Month", "Invoice", "SalesOrg", "Channel"];

/// Optional fiscal-period columns, validated only when present.
pub const PERIOD_COLUMNS: [&str; 2] = ["Valid_From_Period", "Valid_To_Period"];

pub const YEAR_COLUMN: &str = "Year";
pub const MONTH_COLUMN: &str = "Month";
pub const SALESORG_COLUMN: &str = "SalesOrg";

/// The cut-off year this report version accepts.
pub const CUTOFF_YEAR: i64 = 2026;

/// Sales organizations allowed in this report version.
pub const SALESORG_ALLOWED: [&str; 14] = [
    "US13", "BO02", "CL02", "CO02", "CR02", "EC02", "SV02", "GT02", "HN02", "NI02", "PA02",
    "PE02", "PR04", "DO03",
];

pub const RULE_GROUP_STRUCTURE: &str = "Reglas de estructura";
pub const RULE_GROUP_OVERALL: &str = "Consolidado";

/// "YYYY P##" fiscal period encoding.
pub static PERIOD_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4} P\d{2}$").expect("period pattern"));

pub static YEAR_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("year pattern"));

/// 1-12, optionally zero-padded.
pub static MONTH_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0?[1-9]|1[0-2])$").expect("month pattern"));

pub fn salesorg_allowed(value: &str) -> bool {
    SALESORG_ALLOWED.contains(&value)
}
