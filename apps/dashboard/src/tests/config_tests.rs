use super::*;

use std::{collections::HashMap, io::Write};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_apply_when_file_and_env_are_absent() {
    let dir = tempfile::tempdir().expect("temp dir");

    let loaded = load_settings_from(&dir.path().join(SETTINGS_FILE), env_from(&[]));

    assert_eq!(loaded.settings, Settings::default());
    assert!(loaded.warnings.is_empty());
    assert_eq!(loaded.settings.payload_slider(), PayloadSlider::default());
}

#[test]
fn file_values_override_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "dataset_path = \"/srv/launches.csv\"\nslider_max = 16000.0\ncommand_queue_capacity = 8"
    )
    .expect("write settings");

    let settings = load_settings_from(file.path(), env_from(&[])).settings;

    assert_eq!(settings.dataset_path, "/srv/launches.csv");
    assert_eq!(settings.slider_max, 16_000.0);
    assert_eq!(settings.command_queue_capacity, 8);
    assert_eq!(settings.slider_step, 1_000.0);
}

#[test]
fn environment_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "dataset_path = \"from-file.csv\"\nlog_filter = \"warn\"").expect("write");

    let settings = load_settings_from(
        file.path(),
        env_from(&[
            ("APP__DATASET_PATH", "from-env.csv"),
            ("APP__SLIDER_STEP", "500"),
            ("APP__LOG_FILTER", "dashboard=debug"),
        ]),
    )
    .settings;

    assert_eq!(settings.dataset_path, "from-env.csv");
    assert_eq!(settings.slider_step, 500.0);
    assert_eq!(settings.log_filter, "dashboard=debug");
}

#[test]
fn unparseable_numeric_overrides_are_ignored_and_reported() {
    let dir = tempfile::tempdir().expect("temp dir");

    let loaded = load_settings_from(
        &dir.path().join(SETTINGS_FILE),
        env_from(&[
            ("APP__SLIDER_MAX", "lots"),
            ("APP__COMMAND_QUEUE_CAPACITY", "-3"),
        ]),
    );

    assert_eq!(loaded.settings.slider_max, 10_000.0);
    assert_eq!(loaded.settings.command_queue_capacity, 64);
    assert_eq!(loaded.warnings.len(), 2);
    assert!(loaded.warnings[0].contains("APP__SLIDER_MAX"));
    assert!(loaded.warnings[1].contains("APP__COMMAND_QUEUE_CAPACITY"));
}

#[test]
fn malformed_file_falls_back_to_defaults_and_is_reported() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "slider_max = [not toml").expect("write");

    let loaded = load_settings_from(file.path(), env_from(&[]));

    assert_eq!(loaded.settings, Settings::default());
    assert_eq!(loaded.warnings.len(), 1);
    assert!(loaded.warnings[0].contains("malformed settings file"));
    assert!(loaded.warnings[0].contains(&file.path().display().to_string()));
}

#[test]
fn inverted_slider_settings_fall_back_to_stock_domain() {
    let settings = Settings {
        slider_min: 5_000.0,
        slider_max: 1_000.0,
        ..Settings::default()
    };

    assert_eq!(settings.payload_slider(), PayloadSlider::default());
}

#[test]
fn slider_step_too_fine_for_the_domain_falls_back_to_stock_domain() {
    let dir = tempfile::tempdir().expect("temp dir");

    let settings = load_settings_from(
        &dir.path().join(SETTINGS_FILE),
        env_from(&[("APP__SLIDER_STEP", "0.001")]),
    )
    .settings;

    assert_eq!(settings.slider_step, 0.001);
    let slider = settings.payload_slider();
    assert_eq!(slider, PayloadSlider::default());
    assert_eq!(slider.marks().len(), 11);
}
