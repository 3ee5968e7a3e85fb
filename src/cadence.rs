use crate::types::CadenceTable;
use chrono::{Datelike, NaiveDate};

/// Fetch period in days for a tag. Absent or empty tags run daily; a
/// non-positive period is invalid configuration and also falls back to daily.
pub fn period_for(tag: &str, table: &CadenceTable) -> i64 {
    if tag.is_empty() {
        return 1;
    }
    match table.get(tag) {
        Some(&period) if period > 0 => period,
        _ => 1,
    }
}

/// True when today's day-of-year lands on the tag's cadence.
pub fn should_run_today(tag: &str, table: &CadenceTable, today: NaiveDate) -> bool {
    i64::from(today.ordinal()) % period_for(tag, table) == 0
}
