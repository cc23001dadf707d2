use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the monthly homelessness report (one row per region).
///
/// Field names follow the report's CSV headers verbatim, including the
/// inconsistent casing of `EEA/Uk` and `Single-Parent families`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Total Adults")]
    pub total_adults: u64,
    #[serde(rename = "Male Adults")]
    pub male_adults: u64,
    #[serde(rename = "Female Adults")]
    pub female_adults: u64,
    #[serde(rename = "Adults Aged 18-24")]
    pub aged_18_24: u64,
    #[serde(rename = "Adults Aged 25-44")]
    pub aged_25_44: u64,
    #[serde(rename = "Adults Aged 45-64")]
    pub aged_45_64: u64,
    #[serde(rename = "Adults Aged 65+")]
    pub aged_65_plus: u64,
    #[serde(rename = "Number of Families")]
    pub families: u64,
    #[serde(rename = "Number of Adults in Families")]
    pub adults_in_families: u64,
    #[serde(rename = "Number of Single-Parent families")]
    pub single_parent_families: u64,
    #[serde(rename = "Number of Dependants in Families")]
    pub dependants: u64,
    #[serde(rename = "Number of people who accessed Private Emergency Accommodation")]
    pub private_emergency: u64,
    #[serde(rename = "Number of people who accessed Supported Temporary Accommodation")]
    pub supported_temporary: u64,
    #[serde(rename = "Number of people who accessed Temporary Emergency Accommodation")]
    pub temporary_emergency: u64,
    #[serde(rename = "Number of people who accessed Other Accommodation")]
    pub other_accommodation: u64,
    #[serde(rename = "Number of people with citizenship Irish")]
    pub citizenship_irish: u64,
    #[serde(rename = "Number of people with citizenship EEA/Uk")]
    pub citizenship_eea_uk: u64,
    #[serde(rename = "Number of people with citizenship Non-EEA")]
    pub citizenship_non_eea: u64,
}

/// The region filter driving a render cycle: either the "All" sentinel or a
/// concrete region name drawn from the table's own distinct values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionSelection {
    #[default]
    All,
    Region(String),
}

impl RegionSelection {
    /// Parse a selector string. "All" (any casing) is the sentinel; anything
    /// else is treated as a literal region name.
    pub fn parse(s: &str) -> Self {
        let t = s.trim();
        if t.eq_ignore_ascii_case("all") {
            RegionSelection::All
        } else {
            RegionSelection::Region(t.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, RegionSelection::All)
    }
}

impl fmt::Display for RegionSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionSelection::All => write!(f, "All"),
            RegionSelection::Region(r) => write!(f, "{}", r),
        }
    }
}

/// Relation of a filtered aggregate to its unfiltered baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Above,
    Below,
    Equal,
}

impl Trend {
    /// Glyph shown next to a KPI value (up/down/neutral).
    pub fn marker(&self) -> &'static str {
        match self {
            Trend::Above => "▲",
            Trend::Below => "▼",
            Trend::Equal => "●",
        }
    }
}

/// Chart styles offered by the UI toggles. Selects the rendered shape only;
/// the underlying label/value pairs are identical for both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartStyle {
    #[default]
    Bar,
    Pie,
}

impl fmt::Display for ChartStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartStyle::Bar => write!(f, "Bar"),
            ChartStyle::Pie => write!(f, "Pie"),
        }
    }
}
