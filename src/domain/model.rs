use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::error::Result;
use crate::utils::validation::{validate_name, Validate};

/// A named person with an age in years.
///
/// Fields stay private so every read and write goes through the accessors;
/// `is_mature` is recomputed from the current age on each call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    age: i32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    /// Negative ages are stored as given.
    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    /// Strictly older than 18.
    pub fn is_mature(&self) -> bool {
        self.age > 18
    }
}

impl Default for Person {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: -1,
        }
    }
}

impl Validate for Person {
    fn validate(&self) -> Result<()> {
        validate_name("name", &self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Yellow,
    Red,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Red => "red",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureLabel {
    Cold,
    Mild,
    Hot,
}

impl TemperatureLabel {
    pub const ALL: [TemperatureLabel; 3] = [
        TemperatureLabel::Cold,
        TemperatureLabel::Mild,
        TemperatureLabel::Hot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureLabel::Cold => "cold",
            TemperatureLabel::Mild => "mild",
            TemperatureLabel::Hot => "hot",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            TemperatureLabel::Cold => Color::Blue,
            TemperatureLabel::Mild => Color::Yellow,
            TemperatureLabel::Hot => Color::Red,
        }
    }
}

impl fmt::Display for TemperatureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Label plus its color. Built from the label alone, so the pair always agrees.
/// Serialize only: deserializing could produce a mismatched pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Classification {
    label: TemperatureLabel,
    color: Color,
}

impl Classification {
    pub fn new(label: TemperatureLabel) -> Self {
        Self {
            label,
            color: label.color(),
        }
    }

    pub fn label(&self) -> TemperatureLabel {
        self.label
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl From<TemperatureLabel> for Classification {
    fn from(label: TemperatureLabel) -> Self {
        Self::new(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maturity_boundary() {
        assert!(!Person::new("Alice", 18).is_mature());
        assert!(Person::new("Alice", 19).is_mature());
    }

    #[test]
    fn test_maturity_follows_set_age() {
        let mut person = Person::new("Alice", 10);
        assert!(!person.is_mature());

        person.set_age(30);
        assert!(person.is_mature());
    }

    #[test]
    fn test_negative_age_accepted() {
        let person = Person::new("Bob", -5);
        assert_eq!(person.age(), -5);
        assert!(!person.is_mature());
    }

    #[test]
    fn test_set_name() {
        let mut person = Person::new("Alice", 30);
        person.set_name("Alicia");
        assert_eq!(person.name(), "Alicia");
    }

    #[test]
    fn test_default_person() {
        let person = Person::default();
        assert_eq!(person.name(), "");
        assert_eq!(person.age(), -1);
        assert!(person.validate().is_err());
    }

    #[test]
    fn test_classification_pairs() {
        let pairs = TemperatureLabel::ALL.map(|label| Classification::new(label).color());
        assert_eq!(pairs, [Color::Blue, Color::Yellow, Color::Red]);
    }

    #[test]
    fn test_output_format_defaults_to_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
        let format: OutputFormat = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_classification_serializes_lowercase() {
        let json = serde_json::to_string(&Classification::new(TemperatureLabel::Mild)).unwrap();
        assert_eq!(json, r#"{"label":"mild","color":"yellow"}"#);
    }
}
