use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use hrd_rs::dashboard::{SessionState, build_view};
use hrd_rs::models::{ChartStyle, RegionSelection};
use hrd_rs::present::{format_count, gender_summary};
use hrd_rs::viz::{self, ChartFormat};
use hrd_rs::{filter, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "hrd",
    version,
    about = "Load, filter, aggregate & visualize regional homelessness report data"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the dashboard for one filter state (and optionally print KPIs,
    /// write charts, and export the filtered rows).
    Report(ReportArgs),
    /// List the distinct regions present in the report.
    Regions(RegionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StyleOpt {
    Bar,
    Pie,
}

impl From<StyleOpt> for ChartStyle {
    fn from(s: StyleOpt) -> Self {
        match s {
            StyleOpt::Bar => ChartStyle::Bar,
            StyleOpt::Pie => ChartStyle::Pie,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatOpt {
    Svg,
    Png,
}

#[derive(ValueEnum, Clone, Debug)]
enum ExportFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Path to the report CSV.
    #[arg(short, long, default_value = "data/homelessness-report-march-2025.csv")]
    data: PathBuf,
    /// Region filter: "All" or a region name from the report.
    #[arg(short, long, default_value = "All")]
    region: String,
    /// Chart style for the age-group dimension.
    #[arg(long, value_enum, default_value_t = StyleOpt::Bar)]
    age_chart: StyleOpt,
    /// Chart style for the citizenship dimension.
    #[arg(long, value_enum, default_value_t = StyleOpt::Pie)]
    citizenship_chart: StyleOpt,
    /// Write the dashboard charts into this directory.
    #[arg(long)]
    charts: Option<PathBuf>,
    /// Chart file format (svg or png).
    #[arg(long, value_enum, default_value_t = FormatOpt::Svg)]
    format: FormatOpt,
    /// Width of each chart (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of each chart (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Print KPI lines with trend markers to stdout.
    #[arg(long, default_value_t = false)]
    kpis: bool,
    /// Export the filtered rows to file (format inferred by --export or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Export format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    export: Option<ExportFormat>,
}

#[derive(Args, Debug)]
struct RegionsArgs {
    /// Path to the report CSV.
    #[arg(short, long, default_value = "data/homelessness-report-march-2025.csv")]
    data: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Report(args) => cmd_report(args),
        Command::Regions(args) => cmd_regions(args),
    }
}

fn cmd_report(args: ReportArgs) -> Result<()> {
    let table = storage::load_csv(&args.data)
        .with_context(|| format!("load report {}", args.data.display()))?;

    let state = SessionState {
        region: RegionSelection::parse(&args.region),
        age_chart: args.age_chart.into(),
        citizenship_chart: args.citizenship_chart.into(),
    };

    let filtered = filter::filter_rows(&table, &state.region);
    if !state.region.is_all() && filtered.is_empty() {
        eprintln!(
            "Warning: region {:?} matches no rows; all aggregates will be zero",
            args.region
        );
    }

    let view = build_view(&table, &state);

    if args.kpis {
        println!("Region: {}", state.region);
        for kpi in &view.kpis {
            println!("{}", kpi.card_text());
        }
        println!("Gender: {}", gender_summary(&view.gender));
        for (label, value) in view.age.labels.iter().zip(&view.age.values) {
            println!("Adults aged {}: {}", label, format_count(*value));
        }
    }

    if let Some(dir) = args.charts.as_ref() {
        let format = match args.format {
            FormatOpt::Svg => ChartFormat::Svg,
            FormatOpt::Png => ChartFormat::Png,
        };
        let written = viz::render_dashboard(&view, &state, dir, format, args.width, args.height)?;
        eprintln!("Wrote {} charts to {}", written.len(), dir.display());
    }

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.export {
            Some(ExportFormat::Csv) => "csv",
            Some(ExportFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&filtered, path)?,
            "json" => storage::save_json(&filtered, path)?,
            other => anyhow::bail!("unsupported export format: {}", other),
        }
        eprintln!("Saved {} rows to {}", filtered.len(), path.display());
    }

    Ok(())
}

fn cmd_regions(args: RegionsArgs) -> Result<()> {
    let table = storage::load_csv(&args.data)
        .with_context(|| format!("load report {}", args.data.display()))?;
    for region in filter::distinct_regions(&table) {
        println!("{}", region);
    }
    Ok(())
}
