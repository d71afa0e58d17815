pub mod report;
pub mod weather;

pub use crate::domain::model::{Classification, Color, Person, TemperatureLabel};
pub use crate::domain::ports::InputProvider;
pub use crate::utils::error::Result;
