#![cfg(feature = "cli")]

use person_weather::utils::validation::Validate;
use person_weather::{
    AppError, CliConfig, OutputFormat, ReportEngine, TemperatureLabel, TomlConfig,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_end_to_end_from_toml_file() {
    let file = write_config(
        r#"
[[people]]
name = "Alice"
age = 18

[[people]]
name = "Bob"
age = 19

[weather]
readings = [-4, 5, 22, 23]

[output]
format = "json"
"#,
    );

    let config = TomlConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_ok());

    let engine = ReportEngine::new(config);
    let report = engine.run();
    assert_eq!(report.mature_count(), 1);
    assert_eq!(
        report.label_counts(),
        [
            (TemperatureLabel::Cold, 1),
            (TemperatureLabel::Mild, 2),
            (TemperatureLabel::Hot, 1)
        ]
    );

    let rendered = engine.run_and_render().unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["people"][0]["mature"], false);
    assert_eq!(value["people"][1]["mature"], true);
    assert_eq!(value["readings"][3]["label"], "hot");
    assert_eq!(value["readings"][3]["color"], "red");
}

#[test]
fn test_cli_appends_to_config_file() {
    let file = write_config(
        r#"
[[people]]
name = "Alice"
age = 40

[weather]
readings = [1]

[output]
format = "json"
"#,
    );

    let cli = CliConfig {
        degrees: vec![30],
        name: Some("Bob".to_string()),
        age: Some(-5),
        config: Some(file.path().to_string_lossy().into_owned()),
        format: Some(OutputFormat::Text),
        verbose: false,
    };
    assert!(cli.validate().is_ok());

    let merged = cli.resolve().unwrap();
    assert_eq!(merged.format(), OutputFormat::Text);

    let text = ReportEngine::new(merged).run_and_render().unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "person Alice (age 40): mature",
            "person Bob (age -5): not mature",
            "1 degrees: cold (blue)",
            "30 degrees: hot (red)",
        ]
    );
}

#[test]
fn test_cli_only_input() {
    let cli = CliConfig {
        degrees: vec![5, 23],
        ..CliConfig::default()
    };
    let report = ReportEngine::new(cli).run();
    assert!(report.people.is_empty());
    assert_eq!(report.readings[0].label, TemperatureLabel::Mild);
    assert_eq!(report.readings[1].label, TemperatureLabel::Hot);
}

#[test]
fn test_invalid_person_in_file_is_rejected() {
    let file = write_config(
        r#"
[[people]]
name = "Alice"
age = 20

[[people]]
name = "   "
age = 20
"#,
    );

    let config = TomlConfig::from_file(file.path()).unwrap();
    match config.validate() {
        Err(AppError::InvalidConfigValueError { field, value, .. }) => {
            assert_eq!(field, "people[1].name");
            assert_eq!(value, "   ");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_missing_config_file() {
    let cli = CliConfig {
        config: Some("/no/such/dir/person-weather.toml".to_string()),
        ..CliConfig::default()
    };
    let err = cli.resolve().unwrap_err();
    assert_eq!(err.exit_code(), 2);
}
