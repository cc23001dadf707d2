use hrd_rs::dashboard::{SessionState, build_view};
use hrd_rs::models::{ChartStyle, RegionRecord, RegionSelection, Trend};

fn rec(region: &str, total: u64, male: u64, female: u64) -> RegionRecord {
    RegionRecord {
        region: region.into(),
        total_adults: total,
        male_adults: male,
        female_adults: female,
        families: total / 4,
        dependants: total / 2,
        aged_25_44: total,
        citizenship_irish: total,
        ..Default::default()
    }
}

fn table() -> Vec<RegionRecord> {
    vec![rec("Dublin", 100, 60, 40), rec("Cork", 50, 20, 30)]
}

#[test]
fn all_selection_has_regional_series_and_equal_trends() {
    let rows = table();
    let view = build_view(&rows, &SessionState::default());

    for kpi in &view.kpis {
        assert_eq!(kpi.trend, Trend::Equal);
    }
    assert_eq!(view.kpis[0].value, 150);

    let regional = view.regional.expect("regional series for All");
    assert_eq!(regional.labels, vec!["Dublin", "Cork"]);
    assert_eq!(regional.values, vec![100, 50]);
}

#[test]
fn region_selection_drops_regional_series_and_marks_below() {
    let rows = table();
    let state = SessionState {
        region: RegionSelection::Region("Cork".into()),
        ..Default::default()
    };
    let view = build_view(&rows, &state);

    assert!(view.regional.is_none());
    assert_eq!(view.kpis[0].value, 50);
    assert_eq!(view.kpis[0].trend, Trend::Below);
    assert_eq!(view.gender_stack.regions, vec!["Cork"]);
    assert!((view.gender.male_pct - 40.0).abs() < 1e-9);
}

#[test]
fn chart_style_toggle_never_changes_the_series_data() {
    let rows = table();
    let bar = build_view(
        &rows,
        &SessionState {
            age_chart: ChartStyle::Bar,
            ..Default::default()
        },
    );
    let pie = build_view(
        &rows,
        &SessionState {
            age_chart: ChartStyle::Pie,
            ..Default::default()
        },
    );
    assert_eq!(bar.age, pie.age);
    assert_eq!(bar.citizenship, pie.citizenship);
}

#[test]
fn unknown_region_yields_all_zero_view() {
    let rows = table();
    let state = SessionState {
        region: RegionSelection::Region("Atlantis".into()),
        ..Default::default()
    };
    let view = build_view(&rows, &state);

    for kpi in &view.kpis {
        assert_eq!(kpi.value, 0);
        assert_eq!(kpi.trend, Trend::Below);
    }
    assert_eq!(view.gender.male_pct, 0.0);
    assert_eq!(view.gender.female_pct, 0.0);
    assert!(view.gender_stack.regions.is_empty());
    assert_eq!(view.age.values, vec![0, 0, 0, 0]);
}

#[test]
fn rerunning_the_pipeline_is_deterministic() {
    let rows = table();
    let state = SessionState {
        region: RegionSelection::Region("Dublin".into()),
        ..Default::default()
    };
    let first = build_view(&rows, &state);
    let second = build_view(&rows, &state);
    assert_eq!(first, second);
}
