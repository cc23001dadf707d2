//! Visualization: render the dashboard's aggregate series to **SVG** or
//! **PNG** files.
//!
//! - Vertical bar charts and pie charts over the same category/value pairs
//! - Stacked per-region percentage bars for the gender split
//! - Distinct series colors (Microsoft Office palette)
//! - Output backend chosen by file extension (`.svg` vs bitmap)

pub mod types;
pub mod util;

pub use types::ChartFormat;

use crate::dashboard::{DashboardView, SessionState};
use crate::models::ChartStyle;
use crate::present::{CategorySeries, GenderStack};
use anyhow::{Result, anyhow};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::{Path, PathBuf};
use std::sync::Once;

use util::{office_color, sector_label_pos, sector_points, y_axis_max};

/// One-time registration for a fallback "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    // Safe to call many times; only runs once.
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
    });
}

/// Render one dimension's category/value pairs as a bar or pie chart.
///
/// Both styles draw the identical label/value pairs; only the shape differs.
/// An empty series (no categories) is an error; an all-zero series renders a
/// chart with empty axes instead of failing.
pub fn render_category_chart<P: AsRef<Path>>(
    series: &CategorySeries,
    style: ChartStyle,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    if series.is_empty() {
        return Err(anyhow!("no data to plot"));
    }
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_category(root, series, style)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_category(root, series, style)?;
    }
    Ok(())
}

/// Render the per-region stacked gender percentage chart.
pub fn render_gender_stack<P: AsRef<Path>>(
    stack: &GenderStack,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    if stack.is_empty() {
        return Err(anyhow!("no data to plot"));
    }
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_gender_stack(root, stack)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_gender_stack(root, stack)?;
    }
    Ok(())
}

/// Write every chart of a render cycle into `out_dir` and return the paths.
///
/// Chart-style toggles from the session state pick bar vs pie for the age and
/// citizenship dimensions. The gender chart is skipped for an empty subset
/// (nothing to stack), and the regional chart only exists for the "All"
/// selection.
pub fn render_dashboard(
    view: &DashboardView,
    state: &SessionState,
    out_dir: &Path,
    format: ChartFormat,
    width: u32,
    height: u32,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)?;
    let ext = format.extension();
    let mut written = Vec::new();

    if !view.gender_stack.is_empty() {
        let p = out_dir.join(format!("gender_by_region.{ext}"));
        render_gender_stack(&view.gender_stack, &p, width, height)?;
        written.push(p);
    }

    let p = out_dir.join(format!("age_groups.{ext}"));
    render_category_chart(&view.age, state.age_chart, &p, width, height)?;
    written.push(p);

    let p = out_dir.join(format!("accommodation.{ext}"));
    render_category_chart(&view.accommodation, ChartStyle::Bar, &p, width, height)?;
    written.push(p);

    let p = out_dir.join(format!("family_composition.{ext}"));
    render_category_chart(&view.family, ChartStyle::Bar, &p, width, height)?;
    written.push(p);

    let p = out_dir.join(format!("citizenship.{ext}"));
    render_category_chart(&view.citizenship, state.citizenship_chart, &p, width, height)?;
    written.push(p);

    if let Some(regional) = &view.regional {
        let p = out_dir.join(format!("region_totals.{ext}"));
        render_category_chart(regional, ChartStyle::Bar, &p, width, height)?;
        written.push(p);
    }

    Ok(written)
}

fn draw_category<DB>(root: DrawingArea<DB, Shift>, series: &CategorySeries, style: ChartStyle) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;
    match style {
        ChartStyle::Bar => draw_bars(root, series),
        ChartStyle::Pie => draw_pie(root, series),
    }
}

fn draw_bars<DB>(root: DrawingArea<DB, Shift>, series: &CategorySeries) -> Result<()>
where
    DB: DrawingBackend,
{
    let n = series.labels.len() as i32;
    let tallest = series.values.iter().copied().max().unwrap_or(0) as f64;
    let y_max = y_axis_max(tallest);

    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .caption(&series.title, (FontFamily::SansSerif, 24))
        .set_label_area_size(LabelAreaPosition::Left, 64)
        .set_label_area_size(LabelAreaPosition::Bottom, 48)
        .build_cartesian_2d((0..n).into_segmented(), 0f64..y_max)
        .map_err(|e| anyhow!("{:?}", e))?;

    let labels = &series.labels;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                labels.get(*i as usize).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .y_desc("Count")
        .y_label_formatter(&|v| format!("{:.0}", v))
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    for (i, v) in series.values.iter().enumerate() {
        let color = office_color(i);
        let rect = Rectangle::new(
            [
                (SegmentValue::Exact(i as i32), 0.0),
                (SegmentValue::Exact(i as i32 + 1), *v as f64),
            ],
            color.filled(),
        );
        chart
            .draw_series(std::iter::once(rect))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_pie<DB>(root: DrawingArea<DB, Shift>, series: &CategorySeries) -> Result<()>
where
    DB: DrawingBackend,
{
    let root = root
        .titled(&series.title, (FontFamily::SansSerif, 24))
        .map_err(|e| anyhow!("{:?}", e))?;

    let total = series.total();
    if total == 0 {
        // Nothing to slice; the titled canvas is the whole chart.
        root.present().map_err(|e| anyhow!("{:?}", e))?;
        return Ok(());
    }

    let (w, h) = root.dim_in_pixel();
    let center = ((w / 2) as i32, (h / 2) as i32);
    let radius = w.min(h) as f64 * 0.35;

    let mut start_deg = 0.0f64;
    for (i, (label, v)) in series.labels.iter().zip(&series.values).enumerate() {
        if *v == 0 {
            continue;
        }
        let share = *v as f64 / total as f64;
        let end_deg = start_deg + share * 360.0;
        let color = office_color(i);
        root.draw(&Polygon::new(
            sector_points(center, radius, start_deg, end_deg),
            color.filled(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;

        let (lx, ly) = sector_label_pos(center, radius * 1.25, start_deg, end_deg);
        let text = format!("{} ({:.1}%)", label, share * 100.0);
        root.draw(&Text::new(text, (lx - 32, ly), (FontFamily::SansSerif, 14)))
            .map_err(|e| anyhow!("{:?}", e))?;

        start_deg = end_deg;
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_gender_stack<DB>(root: DrawingArea<DB, Shift>, stack: &GenderStack) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let n = stack.regions.len() as i32;
    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .caption(
            "Gender Distribution by Region (%)",
            (FontFamily::SansSerif, 24),
        )
        .set_label_area_size(LabelAreaPosition::Left, 64)
        .set_label_area_size(LabelAreaPosition::Bottom, 56)
        .build_cartesian_2d((0..n).into_segmented(), 0f64..105f64)
        .map_err(|e| anyhow!("{:?}", e))?;

    let regions = &stack.regions;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(regions.len())
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                regions.get(*i as usize).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .y_desc("% of Total Adults")
        .y_label_formatter(&|v| format!("{:.0}", v))
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let male_color = office_color(0);
    let female_color = office_color(1);

    chart
        .draw_series(stack.male_pct.iter().enumerate().map(|(i, m)| {
            Rectangle::new(
                [
                    (SegmentValue::Exact(i as i32), 0.0),
                    (SegmentValue::Exact(i as i32 + 1), *m),
                ],
                male_color.filled(),
            )
        }))
        .map_err(|e| anyhow!("{:?}", e))?
        .label("Male %")
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 5), (x + 10, y + 5)], male_color.filled())
        });

    chart
        .draw_series(
            stack
                .male_pct
                .iter()
                .zip(&stack.female_pct)
                .enumerate()
                .map(|(i, (m, f))| {
                    Rectangle::new(
                        [
                            (SegmentValue::Exact(i as i32), *m),
                            (SegmentValue::Exact(i as i32 + 1), *m + *f),
                        ],
                        female_color.filled(),
                    )
                }),
        )
        .map_err(|e| anyhow!("{:?}", e))?
        .label("Female %")
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 5), (x + 10, y + 5)], female_color.filled())
        });

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .label_font((FontFamily::SansSerif, 14))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
