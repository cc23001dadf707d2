//! Aggregation over the (possibly filtered) report table.
//!
//! Every dimension is the same operation: sum a fixed list of columns over a
//! row subset. The `(label, accessor)` tables below declare each dimension's
//! columns and their presentation order once; [`sum_columns`] does the rest.
//! A zero-row subset sums to 0 everywhere, and percentage computations define
//! 0/0 as 0, so an empty filter result degrades to zeros instead of faulting.

use crate::filter::distinct_regions;
use crate::models::{RegionRecord, Trend};
use serde::{Deserialize, Serialize};

/// A labeled column of the report: display label plus field accessor.
pub type ColumnSpec = (&'static str, fn(&RegionRecord) -> u64);

/// Age brackets, in the report's declared order.
pub const AGE_GROUPS: [ColumnSpec; 4] = [
    ("18-24", |r| r.aged_18_24),
    ("25-44", |r| r.aged_25_44),
    ("45-64", |r| r.aged_45_64),
    ("65+", |r| r.aged_65_plus),
];

/// Accommodation access types, in the report's declared order.
pub const ACCOMMODATION_TYPES: [ColumnSpec; 4] = [
    ("Private Emergency", |r| r.private_emergency),
    ("Supported Temporary", |r| r.supported_temporary),
    ("Temporary Emergency", |r| r.temporary_emergency),
    ("Other", |r| r.other_accommodation),
];

/// Family composition columns, in the report's declared order.
pub const FAMILY_COMPOSITION: [ColumnSpec; 4] = [
    ("Families", |r| r.families),
    ("Adults in Families", |r| r.adults_in_families),
    ("Single-Parent Families", |r| r.single_parent_families),
    ("Dependants", |r| r.dependants),
];

/// Citizenship columns, in the report's declared order.
pub const CITIZENSHIP: [ColumnSpec; 3] = [
    ("Irish", |r| r.citizenship_irish),
    ("EEA/UK", |r| r.citizenship_eea_uk),
    ("Non-EEA", |r| r.citizenship_non_eea),
];

/// Sum each listed column over the row subset, keeping the declared label
/// order. An empty subset yields a 0 for every column.
pub fn sum_columns(rows: &[RegionRecord], columns: &[ColumnSpec]) -> Vec<(String, u64)> {
    columns
        .iter()
        .map(|(label, col)| (label.to_string(), rows.iter().map(|r| col(r)).sum()))
        .collect()
}

/// Percentage of `part` in `whole`, with 0/0 defined as 0.
pub fn pct(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Headline KPI totals for a row subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    pub total_adults: u64,
    pub families: u64,
    pub dependants: u64,
}

pub fn headline(rows: &[RegionRecord]) -> Headline {
    Headline {
        total_adults: rows.iter().map(|r| r.total_adults).sum(),
        families: rows.iter().map(|r| r.families).sum(),
        dependants: rows.iter().map(|r| r.dependants).sum(),
    }
}

/// Gender totals and their shares of the subset's own Total Adults sum.
///
/// Shares are sum-then-divide: column sums are taken over the whole subset
/// first and divided once, so for any non-empty subset the two percentages
/// add up to 100 (assuming the report's male + female = total consistency).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenderSplit {
    pub male: u64,
    pub female: u64,
    pub male_pct: f64,
    pub female_pct: f64,
}

pub fn gender_split(rows: &[RegionRecord]) -> GenderSplit {
    let male: u64 = rows.iter().map(|r| r.male_adults).sum();
    let female: u64 = rows.iter().map(|r| r.female_adults).sum();
    let total: u64 = rows.iter().map(|r| r.total_adults).sum();
    GenderSplit {
        male,
        female,
        male_pct: pct(male, total),
        female_pct: pct(female, total),
    }
}

/// Gender shares for one region, of that region's own Total Adults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionGender {
    pub region: String,
    pub male_pct: f64,
    pub female_pct: f64,
}

/// Per-region gender shares over the given subset, one entry per distinct
/// region in first-appearance order. Feeds the stacked gender chart.
pub fn gender_by_region(rows: &[RegionRecord]) -> Vec<RegionGender> {
    distinct_regions(rows)
        .into_iter()
        .map(|region| {
            let sub: Vec<&RegionRecord> = rows.iter().filter(|r| r.region == region).collect();
            let male: u64 = sub.iter().map(|r| r.male_adults).sum();
            let female: u64 = sub.iter().map(|r| r.female_adults).sum();
            let total: u64 = sub.iter().map(|r| r.total_adults).sum();
            RegionGender {
                region,
                male_pct: pct(male, total),
                female_pct: pct(female, total),
            }
        })
        .collect()
}

/// Total Adults per region in first-appearance order, for the regional
/// distribution chart shown when the filter is "All".
pub fn region_totals(rows: &[RegionRecord]) -> Vec<(String, u64)> {
    distinct_regions(rows)
        .into_iter()
        .map(|region| {
            let total = rows
                .iter()
                .filter(|r| r.region == region)
                .map(|r| r.total_adults)
                .sum();
            (region, total)
        })
        .collect()
}

/// Classify a filtered aggregate against its unfiltered baseline.
pub fn trend(current: u64, baseline: u64) -> Trend {
    if current > baseline {
        Trend::Above
    } else if current < baseline {
        Trend::Below
    } else {
        Trend::Equal
    }
}
