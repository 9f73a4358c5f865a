use std::path::PathBuf;

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::{ChartKind, ChartsApp};

/// Returns the path to the settings file: `~/.config/minichart/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("minichart");
    path.push("settings.json");
    path
}

/// Persisted application settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // UI
    pub active_chart: ChartKind,
    pub show_settings: bool,

    // Chart colors (stored as u8 triples since Color32 isn't serde-friendly)
    pub line_r: u8,
    pub line_g: u8,
    pub line_b: u8,
    pub bar_r: u8,
    pub bar_g: u8,
    pub bar_b: u8,

    // Live feed
    pub live_interval: f32,
    pub max_points: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            active_chart: ChartKind::Line,
            show_settings: true,

            line_r: 0,
            line_g: 0,
            line_b: 255,
            bar_r: 0,
            bar_g: 0,
            bar_b: 255,

            live_interval: 0.25,
            max_points: 120,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        let path = settings_path();
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    log::warn!("Failed to write settings: {}", e);
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Extract current settings from the running application.
    pub fn from_app(app: &ChartsApp) -> Self {
        Self {
            active_chart: app.active_chart,
            show_settings: app.show_settings,

            line_r: app.line.color.r(),
            line_g: app.line.color.g(),
            line_b: app.line.color.b(),
            bar_r: app.bar.color.r(),
            bar_g: app.bar.color.g(),
            bar_b: app.bar.color.b(),

            live_interval: app.live_interval,
            max_points: app.max_points,
        }
    }

    /// Apply loaded settings to the running application.
    pub fn apply(&self, app: &mut ChartsApp) {
        app.active_chart = self.active_chart;
        app.show_settings = self.show_settings;

        app.line.color = egui::Color32::from_rgb(self.line_r, self.line_g, self.line_b);
        app.bar.color = egui::Color32::from_rgb(self.bar_r, self.bar_g, self.bar_b);

        app.live_interval = self.live_interval;
        app.max_points = self.max_points;
    }
}
