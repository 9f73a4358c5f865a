//! minichart - line and bar charts for egui
//!
//! Two chart widgets over one small scene model: every frame the active
//! widget rebuilds its drawing primitives from current data and paints
//! them, so mutating the data is all it takes to update the display.
//!
//! ## Demo application
//! - Line / Bar tabs sharing one settings panel
//! - Stopwatch that appends elapsed seconds to the bar chart
//! - Synthetic live feed for the line chart
//! - PNG export of the visible chart

use std::time::Instant;

use eframe::egui;
use serde::{Deserialize, Serialize};

mod chart;
mod export;
mod settings;

use chart::{BarChart, LineChart};
use settings::AppSettings;

/// Pixel size of exported chart images
const EXPORT_SIZE: egui::Vec2 = egui::Vec2::new(800.0, 600.0);

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting minichart");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("minichart"),
        ..Default::default()
    };

    eframe::run_native(
        "minichart",
        options,
        Box::new(|cc| Ok(Box::new(ChartsApp::new(cc)))),
    )
}

/// Which chart the demo is showing
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum ChartKind {
    Line,
    Bar,
}

impl ChartKind {
    fn name(&self) -> &'static str {
        match self {
            ChartKind::Line => "Line",
            ChartKind::Bar => "Bar",
        }
    }
}

/// Main application state
pub struct ChartsApp {
    pub line: LineChart,
    pub bar: BarChart,
    pub active_chart: ChartKind,
    pub show_settings: bool,

    // Stopwatch feeding the bar chart
    stopwatch_started: Option<Instant>,
    runs: usize,

    // Synthetic live feed for the line chart
    pub live_interval: f32,
    pub max_points: usize,
    live_enabled: bool,
    live_phase: f32,
    last_sample: Instant,

    // Manual data entry
    manual_value: f64,

    status: String,
}

impl ChartsApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            line: LineChart::new(vec![0.1, 0.4, 0.9, 0.2, 0.7]),
            bar: BarChart::new(Vec::new()),
            active_chart: ChartKind::Line,
            show_settings: true,

            stopwatch_started: None,
            runs: 0,

            live_interval: 0.25,
            max_points: 120,
            live_enabled: false,
            live_phase: 0.0,
            last_sample: Instant::now(),

            manual_value: 0.5,

            status: "Ready".to_owned(),
        };
        AppSettings::load().apply(&mut app);
        app
    }

    /// Advance the live feed when its interval has elapsed
    fn tick_live_feed(&mut self) {
        if !self.live_enabled {
            return;
        }
        if self.last_sample.elapsed().as_secs_f32() < self.live_interval {
            return;
        }
        self.last_sample = Instant::now();

        let value = 0.5 + 0.45 * self.live_phase.sin();
        self.live_phase += 0.35;
        self.line.add_value(value as f64);

        // Trim from the front so the trace scrolls instead of squeezing
        if self.line.points.len() > self.max_points {
            let excess = self.line.points.len() - self.max_points;
            self.line.points.drain(0..excess);
        }
    }

    /// Start the stopwatch, or stop it and append the run to the bar chart
    fn toggle_stopwatch(&mut self) {
        match self.stopwatch_started.take() {
            Some(started) => {
                let elapsed = started.elapsed().as_secs_f64();
                self.runs += 1;
                self.bar.add_value(elapsed);
                self.bar.x_labels.push(format!("run {}", self.runs));
                self.status = format!("Run {}: {:.2} s", self.runs, elapsed);
            }
            None => {
                self.stopwatch_started = Some(Instant::now());
                self.status = "Stopwatch running".to_owned();
            }
        }
    }

    /// Ask for a path and export the visible chart as a PNG
    fn export_active_chart(&mut self) {
        let path = match rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name("chart.png")
            .save_file()
        {
            Some(path) => path,
            None => return,
        };

        let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, EXPORT_SIZE);
        let scene = match self.active_chart {
            ChartKind::Line => self.line.scene(rect),
            ChartKind::Bar => self.bar.scene(rect),
        };

        match export::save_png(&scene, EXPORT_SIZE, &path) {
            Ok(()) => {
                self.status = format!("Exported {}", path.display());
            }
            Err(e) => {
                log::warn!("Export failed: {}", e);
                self.status = format!("Export failed: {}", e);
            }
        }
    }
}

impl eframe::App for ChartsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        self.tick_live_feed();

        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("minichart");
                ui.separator();

                ui.selectable_value(
                    &mut self.active_chart,
                    ChartKind::Line,
                    ChartKind::Line.name(),
                );
                ui.selectable_value(
                    &mut self.active_chart,
                    ChartKind::Bar,
                    ChartKind::Bar.name(),
                );
                ui.separator();

                // Stopwatch appends a run to the bar chart on stop
                let stopwatch_text = if self.stopwatch_started.is_some() {
                    "⏹ Stop"
                } else {
                    "▶ Start"
                };
                if ui.button(stopwatch_text).clicked() {
                    self.toggle_stopwatch();
                }

                ui.separator();
                ui.toggle_value(&mut self.show_settings, "⚙ Settings");

                if ui.button("Export PNG").clicked() {
                    self.export_active_chart();
                }
            });
        });

        // Settings panel
        if self.show_settings {
            egui::SidePanel::left("settings_panel")
                .min_width(220.0)
                .show(ctx, |ui| {
                    ui.heading("Chart");
                    ui.separator();

                    let y_steps = match self.active_chart {
                        ChartKind::Line => &mut self.line.y_steps,
                        ChartKind::Bar => &mut self.bar.y_steps,
                    };
                    ui.add(egui::Slider::new(y_steps, 1..=20).text("Y steps"));

                    ui.separator();

                    ui.label("Data:");
                    ui.add(egui::Slider::new(&mut self.manual_value, 0.0..=1.0).text("Value"));
                    ui.horizontal(|ui| {
                        if ui.button("Add point").clicked() {
                            match self.active_chart {
                                ChartKind::Line => self.line.add_value(self.manual_value),
                                ChartKind::Bar => self.bar.add_value(self.manual_value),
                            }
                        }
                        if ui.button("Clear").clicked() {
                            match self.active_chart {
                                ChartKind::Line => {
                                    self.line.points.clear();
                                    self.line.x_labels.clear();
                                }
                                ChartKind::Bar => {
                                    self.bar.points.clear();
                                    self.bar.x_labels.clear();
                                }
                            }
                        }
                    });

                    ui.separator();

                    ui.collapsing("Live feed", |ui| {
                        ui.checkbox(&mut self.live_enabled, "Feed sine samples");
                        ui.add(
                            egui::Slider::new(&mut self.live_interval, 0.05..=2.0)
                                .text("Interval (s)"),
                        );
                        ui.add(
                            egui::Slider::new(&mut self.max_points, 10..=500).text("Max points"),
                        );
                    });

                    ui.separator();

                    // Color presets
                    ui.collapsing("Color", |ui| {
                        let color = match self.active_chart {
                            ChartKind::Line => &mut self.line.color,
                            ChartKind::Bar => &mut self.bar.color,
                        };
                        ui.horizontal(|ui| {
                            if ui.button("Blue").clicked() {
                                *color = egui::Color32::from_rgb(0, 0, 255);
                            }
                            if ui.button("Red").clicked() {
                                *color = egui::Color32::from_rgb(200, 40, 40);
                            }
                            if ui.button("Green").clicked() {
                                *color = egui::Color32::from_rgb(40, 160, 60);
                            }
                        });
                    });
                });
        }

        // Active chart
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.active_chart {
                ChartKind::Line => {
                    self.line.show(ui, None);
                }
                ChartKind::Bar => {
                    self.bar.show(ui, None);
                }
            }

            let (points, y_steps) = match self.active_chart {
                ChartKind::Line => (self.line.points.len(), self.line.y_steps),
                ChartKind::Bar => (self.bar.points.len(), self.bar.y_steps),
            };

            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                ui.horizontal(|ui| {
                    ui.small(format!("Points: {}", points));
                    ui.separator();
                    ui.small(format!("Y steps: {}", y_steps));
                    ui.separator();
                    ui.small(&self.status);
                });
            });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        AppSettings::from_app(self).save();
    }
}
