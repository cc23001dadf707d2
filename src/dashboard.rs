//! The render-cycle pipeline: filter the table, aggregate every dimension,
//! compare against the unfiltered baseline, and shape the results for the
//! chart and KPI collaborators.

use crate::filter::filter_rows;
use crate::models::{ChartStyle, RegionRecord, RegionSelection};
use crate::present::{CategorySeries, GenderStack, Kpi};
use crate::stats::{
    self, ACCOMMODATION_TYPES, AGE_GROUPS, CITIZENSHIP, FAMILY_COMPOSITION, GenderSplit,
};
use serde::{Deserialize, Serialize};

/// The UI state driving one render cycle. Immutable once built; the caller
/// constructs a fresh value per interaction instead of mutating shared state,
/// so concurrent sessions can never leak filters into each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub region: RegionSelection,
    pub age_chart: ChartStyle,
    pub citizenship_chart: ChartStyle,
}

impl Default for SessionState {
    /// Initial UI state: "All" regions, age groups as bars, citizenship as a
    /// pie, matching the report dashboard's default toggles.
    fn default() -> Self {
        Self {
            region: RegionSelection::All,
            age_chart: ChartStyle::Bar,
            citizenship_chart: ChartStyle::Pie,
        }
    }
}

/// Everything one render cycle hands to the UI: KPI cards with trend
/// markers, the per-region gender stack, one category series per dimension,
/// and the regional distribution series (present only for the "All" filter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub kpis: [Kpi; 3],
    pub gender: GenderSplit,
    pub gender_stack: GenderStack,
    pub age: CategorySeries,
    pub accommodation: CategorySeries,
    pub family: CategorySeries,
    pub citizenship: CategorySeries,
    pub regional: Option<CategorySeries>,
}

/// Run the full pipeline for one filter state.
///
/// The baseline headline is always computed over the unfiltered table; the
/// filtered subset drives everything else. A selection with no matching rows
/// produces all-zero aggregates rather than an error.
pub fn build_view(table: &[RegionRecord], state: &SessionState) -> DashboardView {
    let filtered = filter_rows(table, &state.region);

    let baseline = stats::headline(table);
    let current = stats::headline(&filtered);

    let kpis = [
        Kpi::new(
            "Total Homeless Adults",
            current.total_adults,
            stats::trend(current.total_adults, baseline.total_adults),
        ),
        Kpi::new(
            "Total Families",
            current.families,
            stats::trend(current.families, baseline.families),
        ),
        Kpi::new(
            "Total Dependants",
            current.dependants,
            stats::trend(current.dependants, baseline.dependants),
        ),
    ];

    let regional = if state.region.is_all() {
        Some(CategorySeries::from_pairs(
            "Total Adults by Region",
            stats::region_totals(table),
        ))
    } else {
        None
    };

    DashboardView {
        kpis,
        gender: stats::gender_split(&filtered),
        gender_stack: GenderStack::from_region_genders(stats::gender_by_region(&filtered)),
        age: CategorySeries::from_pairs(
            "Adults by Age Group",
            stats::sum_columns(&filtered, &AGE_GROUPS),
        ),
        accommodation: CategorySeries::from_pairs(
            "Accommodation Access Types",
            stats::sum_columns(&filtered, &ACCOMMODATION_TYPES),
        ),
        family: CategorySeries::from_pairs(
            "Family Composition",
            stats::sum_columns(&filtered, &FAMILY_COMPOSITION),
        ),
        citizenship: CategorySeries::from_pairs(
            "Homeless Adults by Citizenship",
            stats::sum_columns(&filtered, &CITIZENSHIP),
        ),
        regional,
    }
}
