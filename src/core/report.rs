use crate::core::weather::Weather;
use crate::domain::model::{Color, Person, TemperatureLabel};
use crate::domain::ports::InputProvider;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

pub use crate::domain::model::OutputFormat;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub name: String,
    pub age: i32,
    pub mature: bool,
}

impl From<&Person> for PersonSummary {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name().to_string(),
            age: person.age(),
            mature: person.is_mature(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingSummary {
    pub degrees: i32,
    pub label: TemperatureLabel,
    pub color: Color,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub people: Vec<PersonSummary>,
    pub readings: Vec<ReadingSummary>,
}

impl Report {
    pub fn mature_count(&self) -> usize {
        self.people.iter().filter(|p| p.mature).count()
    }

    /// Tallies in cold, mild, hot order.
    pub fn label_counts(&self) -> [(TemperatureLabel, usize); 3] {
        TemperatureLabel::ALL.map(|label| {
            let count = self.readings.iter().filter(|r| r.label == label).count();
            (label, count)
        })
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();

        // Writing into a String cannot fail.
        for person in &self.people {
            let status = if person.mature { "mature" } else { "not mature" };
            let _ = writeln!(out, "person {} (age {}): {}", person.name, person.age, status);
        }
        for reading in &self.readings {
            let _ = writeln!(
                out,
                "{} degrees: {} ({})",
                reading.degrees, reading.label, reading.color
            );
        }
        out
    }
}

pub struct ReportEngine<P: InputProvider> {
    provider: P,
    weather: Weather,
}

impl<P: InputProvider> ReportEngine<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            weather: Weather::new(),
        }
    }

    pub fn run(&self) -> Report {
        let people: Vec<PersonSummary> = self
            .provider
            .people()
            .iter()
            .map(PersonSummary::from)
            .collect();

        let readings: Vec<ReadingSummary> = self
            .provider
            .readings()
            .iter()
            .map(|&degrees| {
                let classification = self.weather.update_weather(degrees);
                ReadingSummary {
                    degrees,
                    label: classification.label(),
                    color: classification.color(),
                }
            })
            .collect();

        tracing::info!(
            "📊 Report built: {} people, {} readings",
            people.len(),
            readings.len()
        );

        Report { people, readings }
    }

    /// Builds the report and renders it in the provider's format.
    pub fn run_and_render(&self) -> Result<String> {
        self.run().render(self.provider.output_format())
    }
}
