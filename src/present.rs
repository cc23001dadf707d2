//! Presentation adapter: reshape aggregates into the exact inputs the chart
//! renderers and KPI cards consume.

use crate::models::Trend;
use crate::stats::{GenderSplit, RegionGender};
use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

/// A titled category/value table for bar and pie charts.
///
/// Label order is the dimension's declared order, stable across runs and
/// independent of row order in the source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySeries {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl CategorySeries {
    /// Build from `(label, sum)` pairs as produced by `stats::sum_columns`.
    pub fn from_pairs(title: &str, pairs: Vec<(String, u64)>) -> Self {
        let (labels, values) = pairs.into_iter().unzip();
        Self {
            title: title.to_string(),
            labels,
            values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.values.iter().sum()
    }
}

/// Wide percentage table for the stacked gender chart: one column per region,
/// male/female shares of that region's own Total Adults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderStack {
    pub regions: Vec<String>,
    pub male_pct: Vec<f64>,
    pub female_pct: Vec<f64>,
}

impl GenderStack {
    pub fn from_region_genders(per_region: Vec<RegionGender>) -> Self {
        let mut regions = Vec::with_capacity(per_region.len());
        let mut male_pct = Vec::with_capacity(per_region.len());
        let mut female_pct = Vec::with_capacity(per_region.len());
        for rg in per_region {
            regions.push(rg.region);
            male_pct.push(rg.male_pct);
            female_pct.push(rg.female_pct);
        }
        Self {
            regions,
            male_pct,
            female_pct,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// One KPI card: label, value, and the trend marker against the baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: u64,
    pub trend: Trend,
}

impl Kpi {
    pub fn new(label: &str, value: u64, trend: Trend) -> Self {
        Self {
            label: label.to_string(),
            value,
            trend,
        }
    }

    /// Card text like `Total Homeless Adults: 10,805 ▼`.
    pub fn card_text(&self) -> String {
        format!(
            "{}: {} {}",
            self.label,
            format_count(self.value),
            self.trend.marker()
        )
    }
}

/// Thousands-grouped count for KPI cards and axis captions.
pub fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

/// Gender split of the current subset formatted for a summary line, e.g.
/// `Male 55.6% / Female 44.4%`.
pub fn gender_summary(split: &GenderSplit) -> String {
    format!(
        "Male {:.1}% / Female {:.1}%",
        split.male_pct, split.female_pct
    )
}
