use hrd_rs::dashboard::{SessionState, build_view};
use hrd_rs::models::{ChartStyle, RegionRecord, RegionSelection};
use hrd_rs::present::{CategorySeries, GenderStack};
use hrd_rs::stats::RegionGender;
use hrd_rs::viz::{self, ChartFormat};
use std::fs;
use std::path::PathBuf;

fn sample_series() -> CategorySeries {
    CategorySeries::from_pairs(
        "Adults by Age Group",
        vec![
            ("18-24".into(), 10),
            ("25-44".into(), 20),
            ("45-64".into(), 5),
            ("65+".into(), 5),
        ],
    )
}

fn sample_stack() -> GenderStack {
    GenderStack::from_region_genders(vec![
        RegionGender {
            region: "Dublin".into(),
            male_pct: 60.0,
            female_pct: 40.0,
        },
        RegionGender {
            region: "Cork".into(),
            male_pct: 40.0,
            female_pct: 60.0,
        },
    ])
}

fn write_and_check<F: Fn(&PathBuf)>(maker: F, name: &str, ext: &str) {
    let tmp = std::env::temp_dir();
    let path: PathBuf = tmp.join(format!("hrd_viz_{}.{}", name, ext));
    maker(&path);
    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "chart has content");
    fs::remove_file(&path).ok();
}

#[test]
fn bar_and_pie_produce_files() {
    let series = sample_series();
    for (i, style) in [ChartStyle::Bar, ChartStyle::Pie].iter().enumerate() {
        write_and_check(
            |p| viz::render_category_chart(&series, *style, p, 800, 480).unwrap(),
            &format!("style{}", i),
            "svg",
        );
    }
}

#[test]
fn png_backend_produces_files() {
    let series = sample_series();
    write_and_check(
        |p| viz::render_category_chart(&series, ChartStyle::Bar, p, 800, 480).unwrap(),
        "bar_png",
        "png",
    );
}

#[test]
fn gender_stack_produces_file() {
    let stack = sample_stack();
    write_and_check(
        |p| viz::render_gender_stack(&stack, p, 800, 480).unwrap(),
        "stack",
        "svg",
    );
}

#[test]
fn all_zero_series_still_renders() {
    let series = CategorySeries::from_pairs(
        "Citizenship",
        vec![
            ("Irish".into(), 0),
            ("EEA/UK".into(), 0),
            ("Non-EEA".into(), 0),
        ],
    );
    write_and_check(
        |p| viz::render_category_chart(&series, ChartStyle::Bar, p, 800, 480).unwrap(),
        "zero_bar",
        "svg",
    );
    write_and_check(
        |p| viz::render_category_chart(&series, ChartStyle::Pie, p, 800, 480).unwrap(),
        "zero_pie",
        "svg",
    );
}

#[test]
fn empty_series_is_error() {
    let series = CategorySeries {
        title: "Empty".into(),
        labels: vec![],
        values: vec![],
    };
    let tmp = std::env::temp_dir().join("hrd_viz_empty.svg");
    assert!(viz::render_category_chart(&series, ChartStyle::Bar, &tmp, 800, 480).is_err());
}

#[test]
fn dashboard_writes_one_chart_per_dimension() {
    let rows = vec![
        RegionRecord {
            region: "Dublin".into(),
            total_adults: 100,
            male_adults: 60,
            female_adults: 40,
            aged_25_44: 100,
            families: 25,
            dependants: 50,
            private_emergency: 100,
            citizenship_irish: 100,
            ..Default::default()
        },
        RegionRecord {
            region: "Cork".into(),
            total_adults: 50,
            male_adults: 20,
            female_adults: 30,
            aged_45_64: 50,
            families: 12,
            dependants: 25,
            supported_temporary: 50,
            citizenship_non_eea: 50,
            ..Default::default()
        },
    ];

    let dir = tempfile::tempdir().unwrap();

    // "All" selection: six charts, including the regional distribution.
    let state = SessionState::default();
    let view = build_view(&rows, &state);
    let written =
        viz::render_dashboard(&view, &state, dir.path(), ChartFormat::Svg, 800, 480).unwrap();
    assert_eq!(written.len(), 6);
    assert!(dir.path().join("region_totals.svg").exists());
    assert!(dir.path().join("gender_by_region.svg").exists());

    // Single region: no regional distribution chart.
    let state = SessionState {
        region: RegionSelection::Region("Cork".into()),
        ..Default::default()
    };
    let view = build_view(&rows, &state);
    let written =
        viz::render_dashboard(&view, &state, dir.path(), ChartFormat::Svg, 800, 480).unwrap();
    assert_eq!(written.len(), 5);
}
