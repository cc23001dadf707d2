//! hrd-rs
//!
//! A lightweight Rust library for loading, filtering, aggregating, and
//! visualizing the monthly regional homelessness report. Pairs with the
//! `hrd` CLI and the `hrd-gui` desktop app.
//!
//! ### Features
//! - Load the report CSV into a typed in-memory table
//! - Filter by region ("All" or any region from the table)
//! - Aggregate headline totals, gender, age, accommodation, family
//!   composition, and citizenship dimensions
//! - Trend markers comparing the filtered view against the full-table
//!   baseline
//! - Generate SVG/PNG bar, pie, and stacked-percentage charts
//!
//! ### Example
//! ```no_run
//! use hrd_rs::dashboard::{SessionState, build_view};
//! use hrd_rs::models::RegionSelection;
//! use hrd_rs::{storage, viz};
//!
//! let table = storage::load_csv("homelessness-report-march-2025.csv")?;
//! let state = SessionState {
//!     region: RegionSelection::parse("Dublin"),
//!     ..Default::default()
//! };
//! let view = build_view(&table, &state);
//! for kpi in &view.kpis {
//!     println!("{}", kpi.card_text());
//! }
//! viz::render_dashboard(&view, &state, "charts".as_ref(), viz::ChartFormat::Svg, 1000, 600)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod dashboard;
pub mod filter;
pub mod models;
pub mod present;
pub mod stats;
pub mod storage;
pub mod viz;

pub use models::{ChartStyle, RegionRecord, RegionSelection, Trend};
