pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::report::{Report, ReportEngine};
pub use crate::core::weather::{classify_temperature, Weather};
pub use crate::domain::model::{Classification, Color, OutputFormat, Person, TemperatureLabel};
pub use crate::utils::error::{AppError, Result};
