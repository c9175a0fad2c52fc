use std::{fs, path::Path, str::FromStr};

use serde::Deserialize;
use shared::protocol::{PayloadSlider, MAX_SLIDER_MARKS};

pub const SETTINGS_FILE: &str = "dashboard.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub dataset_path: String,
    pub slider_min: f64,
    pub slider_max: f64,
    pub slider_step: f64,
    pub command_queue_capacity: usize,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset_path: "data/launches_sample.csv".into(),
            slider_min: 0.0,
            slider_max: 10_000.0,
            slider_step: 1_000.0,
            command_queue_capacity: 64,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    dataset_path: Option<String>,
    slider_min: Option<f64>,
    slider_max: Option<f64>,
    slider_step: Option<f64>,
    command_queue_capacity: Option<usize>,
    log_filter: Option<String>,
}

impl Settings {
    /// Slider domain from configuration, or the stock `[0, 10000]` step
    /// `1000` domain when the configured one is unusable.
    pub fn payload_slider(&self) -> PayloadSlider {
        let slider = PayloadSlider {
            min: self.slider_min,
            max: self.slider_max,
            step: self.slider_step,
        };
        if slider.is_usable() {
            slider
        } else {
            tracing::warn!(
                min = slider.min,
                max = slider.max,
                step = slider.step,
                max_marks = MAX_SLIDER_MARKS,
                "ignoring unusable payload slider settings"
            );
            PayloadSlider::default()
        }
    }
}

/// Settings plus the problems met while reading them. Loading runs before
/// the log subscriber exists, so the caller logs `warnings` afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub warnings: Vec<String>,
}

pub fn load_settings() -> LoadedSettings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

fn parsed_env<T: FromStr>(
    env: &impl Fn(&str) -> Option<String>,
    key: &str,
    warnings: &mut Vec<String>,
) -> Option<T> {
    let raw = env(key)?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warnings.push(format!("ignoring {key}={raw:?}: not a valid value"));
            None
        }
    }
}

/// File values override defaults, environment overrides the file. Values
/// that fail to parse are skipped and reported in `warnings`.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> LoadedSettings {
    let mut settings = Settings::default();
    let mut warnings = Vec::new();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.dataset_path {
                    settings.dataset_path = v;
                }
                if let Some(v) = file_cfg.slider_min {
                    settings.slider_min = v;
                }
                if let Some(v) = file_cfg.slider_max {
                    settings.slider_max = v;
                }
                if let Some(v) = file_cfg.slider_step {
                    settings.slider_step = v;
                }
                if let Some(v) = file_cfg.command_queue_capacity {
                    settings.command_queue_capacity = v.max(1);
                }
                if let Some(v) = file_cfg.log_filter {
                    settings.log_filter = v;
                }
            }
            Err(err) => {
                warnings.push(format!(
                    "ignoring malformed settings file {}: {err}",
                    path.display()
                ));
            }
        }
    }

    if let Some(v) = env("DASHBOARD_DATASET_PATH") {
        settings.dataset_path = v;
    }
    if let Some(v) = env("APP__DATASET_PATH") {
        settings.dataset_path = v;
    }

    if let Some(v) = parsed_env::<f64>(&env, "APP__SLIDER_MIN", &mut warnings) {
        settings.slider_min = v;
    }
    if let Some(v) = parsed_env::<f64>(&env, "APP__SLIDER_MAX", &mut warnings) {
        settings.slider_max = v;
    }
    if let Some(v) = parsed_env::<f64>(&env, "APP__SLIDER_STEP", &mut warnings) {
        settings.slider_step = v;
    }

    if let Some(v) = parsed_env::<usize>(&env, "APP__COMMAND_QUEUE_CAPACITY", &mut warnings) {
        settings.command_queue_capacity = v.max(1);
    }

    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    LoadedSettings { settings, warnings }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
