use crate::core::{InputProvider, Person};
use crate::domain::model::OutputFormat;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_people, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub people: Vec<PersonEntry>,
    #[serde(default)]
    pub weather: WeatherConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonEntry {
    pub name: String,
    pub age: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default)]
    pub readings: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content)
            .map_err(|e| AppError::config(format!("TOML parsing error: {}", e)))
    }

    /// 替換環境變數 (例如 ${HOME_CITY_TEMP})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 取得輸出格式，未設定時為文字
    pub fn format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }

    pub fn set_format(&mut self, format: OutputFormat) {
        self.output = Some(OutputConfig {
            format: Some(format),
        });
    }

    pub fn push_person(&mut self, name: impl Into<String>, age: i32) {
        self.people.push(PersonEntry {
            name: name.into(),
            age,
        });
    }

    pub fn extend_readings(&mut self, readings: &[i32]) {
        self.weather.readings.extend_from_slice(readings);
    }
}

impl InputProvider for TomlConfig {
    fn people(&self) -> Vec<Person> {
        self.people
            .iter()
            .map(|entry| Person::new(entry.name.clone(), entry.age))
            .collect()
    }

    fn readings(&self) -> &[i32] {
        &self.weather.readings
    }

    fn output_format(&self) -> OutputFormat {
        self.format()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_people("people", self.people.iter().map(|p| p.name.as_str()))
    }
}
