use crate::domain::model::{Classification, TemperatureLabel};

/// Readings below this are cold.
pub const COLD_BELOW: i32 = 5;
/// Readings at or above this are hot.
pub const HOT_FROM: i32 = 23;

/// Maps a reading in degrees to its label and color. Defined for every `i32`.
pub fn classify_temperature(degrees: i32) -> Classification {
    let label = if degrees < COLD_BELOW {
        TemperatureLabel::Cold
    } else if degrees < HOT_FROM {
        TemperatureLabel::Mild
    } else {
        TemperatureLabel::Hot
    };
    label.into()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Weather;

impl Weather {
    pub fn new() -> Self {
        Self
    }

    pub fn update_weather(&self, degrees: i32) -> Classification {
        let classification = classify_temperature(degrees);
        tracing::debug!(
            degrees,
            label = %classification.label(),
            color = %classification.color(),
            "classified temperature"
        );
        classification
    }
}
