/*!
 * GUI application for hrd-rs - regional homelessness report dashboard
 *
 * A cross-platform desktop application providing an interactive view of the
 * monthly report:
 * - Loading the report CSV
 * - Filtering by region and toggling chart styles
 * - KPI cards with trend markers against the full-table baseline
 * - Generating SVG/PNG charts
 *
 * Platform support: Windows, macOS, Linux
 */

use eframe::egui;
use hrd_rs::dashboard::{SessionState, build_view};
use hrd_rs::models::{ChartStyle, RegionRecord, RegionSelection};
use hrd_rs::present::gender_summary;
use hrd_rs::viz::{self, ChartFormat};
use hrd_rs::{filter, storage};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

fn main() -> Result<(), eframe::Error> {
    // Enable logging for better debugging
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 650.0])
            .with_min_inner_size([640.0, 420.0])
            .with_title("Homelessness Data Dashboard - Ireland"),
        ..Default::default()
    };

    eframe::run_native(
        "Homelessness Data Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(HrdApp::new()))),
    )
}

/// Main application state
struct HrdApp {
    // Data source
    data_path: String,
    table: Option<Vec<RegionRecord>>,
    regions: Vec<String>,

    // Filter state
    selected_region: String,
    age_chart: ChartStyle,
    citizenship_chart: ChartStyle,

    // Chart output options
    output_path: String,
    chart_format: OutputFormat,
    chart_width: u32,
    chart_height: u32,

    // UI state
    is_loading: bool,
    status_message: String,
    error_message: String,

    // Background operation
    operation_receiver: Option<mpsc::Receiver<OperationResult>>,
}

#[derive(Debug, Clone, PartialEq)]
enum OutputFormat {
    Png,
    Svg,
}

#[derive(Debug)]
enum OperationResult {
    Success(String),
    Error(String),
}

impl HrdApp {
    fn new() -> Self {
        // Default to user's home directory for chart output
        let home_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .to_string_lossy()
            .to_string();

        Self {
            data_path: "data/homelessness-report-march-2025.csv".to_string(),
            table: None,
            regions: Vec::new(),

            selected_region: "All".to_string(),
            age_chart: ChartStyle::Bar,
            citizenship_chart: ChartStyle::Pie,

            output_path: home_dir,
            chart_format: OutputFormat::Png,
            chart_width: 1000,
            chart_height: 600,

            is_loading: false,
            status_message: String::new(),
            error_message: String::new(),
            operation_receiver: None,
        }
    }

    fn session_state(&self) -> SessionState {
        SessionState {
            region: RegionSelection::parse(&self.selected_region),
            age_chart: self.age_chart,
            citizenship_chart: self.citizenship_chart,
        }
    }

    fn load_table(&mut self) {
        match storage::load_csv(&self.data_path) {
            Ok(table) => {
                self.regions = filter::distinct_regions(&table);
                self.selected_region = "All".to_string();
                self.status_message = format!(
                    "Loaded {} rows ({} regions) from {}",
                    table.len(),
                    self.regions.len(),
                    self.data_path
                );
                self.error_message.clear();
                self.table = Some(table);
            }
            Err(err) => {
                self.error_message = format!("Failed to load report: {}", err);
                self.status_message.clear();
                self.table = None;
                self.regions.clear();
            }
        }
    }

    fn start_render(&mut self) {
        let table = match &self.table {
            Some(t) => t.clone(),
            None => {
                self.error_message = "Load a report CSV first".to_string();
                return;
            }
        };
        if self.output_path.trim().is_empty() {
            self.error_message = "Please specify an output directory".to_string();
            return;
        }

        self.is_loading = true;
        self.error_message.clear();
        self.status_message = "Rendering charts...".to_string();

        let (sender, receiver) = mpsc::channel();
        self.operation_receiver = Some(receiver);

        let state = self.session_state();
        let out_dir = PathBuf::from(&self.output_path);
        let format = match self.chart_format {
            OutputFormat::Png => ChartFormat::Png,
            OutputFormat::Svg => ChartFormat::Svg,
        };
        let (width, height) = (self.chart_width, self.chart_height);

        // Spawn background thread for the chart generation
        thread::spawn(move || {
            let view = build_view(&table, &state);
            let result = match viz::render_dashboard(&view, &state, &out_dir, format, width, height)
            {
                Ok(paths) => {
                    let list: Vec<String> =
                        paths.iter().map(|p| p.to_string_lossy().to_string()).collect();
                    OperationResult::Success(format!(
                        "Created {} charts:\n{}",
                        list.len(),
                        list.join("\n")
                    ))
                }
                Err(err) => OperationResult::Error(format!("Failed to render charts: {}", err)),
            };
            let _ = sender.send(result);
        });
    }

    fn check_operation_result(&mut self) {
        if let Some(receiver) = &self.operation_receiver {
            if let Ok(result) = receiver.try_recv() {
                self.is_loading = false;
                self.operation_receiver = None;

                match result {
                    OperationResult::Success(message) => {
                        self.status_message = message;
                        self.error_message.clear();
                    }
                    OperationResult::Error(error) => {
                        self.error_message = error;
                        self.status_message.clear();
                    }
                }
            }
        }
    }
}

impl eframe::App for HrdApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed background operations
        self.check_operation_result();

        // Request repaint if loading (for spinner animation)
        if self.is_loading {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Homelessness Data Dashboard - Ireland");
                ui.add_space(10.0);

                // Data source section
                ui.group(|ui| {
                    ui.label("Report Data");
                    ui.add_space(5.0);

                    ui.horizontal(|ui| {
                        ui.label("CSV file:");
                        ui.text_edit_singleline(&mut self.data_path);
                        if ui.button("Browse").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("CSV", &["csv"])
                                .pick_file()
                            {
                                self.data_path = path.to_string_lossy().to_string();
                            }
                        }
                        if ui.button("Load").clicked() {
                            self.load_table();
                        }
                    });
                });

                ui.add_space(10.0);

                // Filter section
                ui.group(|ui| {
                    ui.label("Filter Data");
                    ui.add_space(5.0);

                    ui.horizontal(|ui| {
                        ui.label("Region:");
                        egui::ComboBox::from_label("")
                            .selected_text(&self.selected_region)
                            .show_ui(ui, |ui| {
                                ui.selectable_value(
                                    &mut self.selected_region,
                                    "All".to_string(),
                                    "All",
                                );
                                for region in &self.regions {
                                    ui.selectable_value(
                                        &mut self.selected_region,
                                        region.clone(),
                                        region,
                                    );
                                }
                            });
                    });

                    ui.horizontal(|ui| {
                        ui.label("Age group chart:");
                        ui.radio_value(&mut self.age_chart, ChartStyle::Bar, "Bar");
                        ui.radio_value(&mut self.age_chart, ChartStyle::Pie, "Pie");
                    });

                    ui.horizontal(|ui| {
                        ui.label("Citizenship chart:");
                        ui.radio_value(&mut self.citizenship_chart, ChartStyle::Pie, "Pie");
                        ui.radio_value(&mut self.citizenship_chart, ChartStyle::Bar, "Bar");
                    });
                });

                ui.add_space(10.0);

                // KPI cards for the current filter state
                if let Some(table) = &self.table {
                    let state = self.session_state();
                    let view = build_view(table, &state);

                    ui.group(|ui| {
                        ui.label("Key Statistics");
                        ui.add_space(5.0);
                        for kpi in &view.kpis {
                            ui.label(kpi.card_text());
                        }
                        ui.label(format!("Gender: {}", gender_summary(&view.gender)));
                    });

                    ui.add_space(10.0);
                }

                // Chart output section
                ui.group(|ui| {
                    ui.label("Chart Output");
                    ui.add_space(5.0);

                    ui.horizontal(|ui| {
                        ui.label("Output path:");
                        ui.text_edit_singleline(&mut self.output_path);
                        if ui.button("Browse").clicked() {
                            if let Some(path) = rfd::FileDialog::new().pick_folder() {
                                self.output_path = path.to_string_lossy().to_string();
                            }
                        }
                    });

                    ui.horizontal(|ui| {
                        ui.label("Chart format:");
                        ui.radio_value(&mut self.chart_format, OutputFormat::Png, "PNG");
                        ui.radio_value(&mut self.chart_format, OutputFormat::Svg, "SVG");
                    });

                    ui.horizontal(|ui| {
                        ui.label("Dimensions:");
                        ui.add(egui::DragValue::new(&mut self.chart_width).range(200..=3000));
                        ui.label("×");
                        ui.add(egui::DragValue::new(&mut self.chart_height).range(200..=3000));
                        ui.label("pixels");
                    });
                });

                ui.add_space(15.0);

                // Action buttons
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(!self.is_loading, egui::Button::new("Render Charts"))
                        .clicked()
                    {
                        self.start_render();
                    }

                    if self.is_loading {
                        ui.spinner();
                        ui.label("Processing...");
                    }
                });

                ui.add_space(10.0);

                // Status messages
                if !self.status_message.is_empty() {
                    ui.colored_label(egui::Color32::DARK_GREEN, &self.status_message);
                }

                if !self.error_message.is_empty() {
                    ui.colored_label(egui::Color32::RED, &self.error_message);
                }
            });
        });
    }
}
