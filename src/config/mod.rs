pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{InputProvider, Person};
#[cfg(feature = "cli")]
use crate::domain::model::OutputFormat;
#[cfg(feature = "cli")]
use crate::utils::error::{AppError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "person-weather")]
#[command(about = "Classify temperature readings and check people for maturity")]
pub struct CliConfig {
    /// Temperature readings in degrees, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub degrees: Vec<i32>,

    /// Name of a person to check (requires --age)
    #[arg(long)]
    pub name: Option<String>,

    /// Age of the person given by --name
    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<i32>,

    /// Path to a TOML file with people and readings
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format, overrides the config file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併 TOML 檔案與命令列參數；命令列的輸入附加在檔案之後
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut merged = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let (Some(name), Some(age)) = (&self.name, self.age) {
            merged.push_person(name.clone(), age);
        }
        merged.extend_readings(&self.degrees);
        if let Some(format) = self.format {
            merged.set_format(format);
        }

        tracing::debug!(
            "Resolved input: {} people, {} readings",
            merged.people.len(),
            merged.weather.readings.len()
        );
        Ok(merged)
    }
}

#[cfg(feature = "cli")]
impl InputProvider for CliConfig {
    fn people(&self) -> Vec<Person> {
        match (&self.name, self.age) {
            (Some(name), Some(age)) => vec![Person::new(name.clone(), age)],
            _ => Vec::new(),
        }
    }

    fn readings(&self) -> &[i32] {
        &self.degrees
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

/// Checks flag pairing only; names are checked on the resolved input.
#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match (&self.name, self.age) {
            (Some(_), Some(_)) | (None, None) => Ok(()),
            (Some(_), None) => Err(AppError::config("--name requires --age")),
            (None, Some(_)) => Err(AppError::config("--age requires --name")),
        }
    }
}
