use crate::domain::model::{OutputFormat, Person};

/// Source of the people and temperature readings a report is built from.
pub trait InputProvider {
    fn people(&self) -> Vec<Person>;
    fn readings(&self) -> &[i32];
    fn output_format(&self) -> OutputFormat;
}
