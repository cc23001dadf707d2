//! Region filtering: turn the loaded table plus a [`RegionSelection`] into
//! the row subset every aggregate is computed over.

use crate::models::{RegionRecord, RegionSelection};

/// Distinct region values in first-appearance order.
///
/// This is the option list the UI's region selector is built from; keeping
/// table order (rather than sorting) matches the source report, which lists
/// regions in a fixed publication order.
pub fn distinct_regions(rows: &[RegionRecord]) -> Vec<String> {
    let mut seen = Vec::new();
    for row in rows {
        if !seen.iter().any(|r| r == &row.region) {
            seen.push(row.region.clone());
        }
    }
    seen
}

/// Apply the region filter.
///
/// `All` returns every row unchanged and in order; a concrete region returns
/// exactly the rows whose `Region` equals it, preserving original order. A
/// region with no matching rows yields an empty subset, never an error.
pub fn filter_rows(rows: &[RegionRecord], selection: &RegionSelection) -> Vec<RegionRecord> {
    match selection {
        RegionSelection::All => rows.to_vec(),
        RegionSelection::Region(r) => rows.iter().filter(|row| &row.region == r).cloned().collect(),
    }
}
