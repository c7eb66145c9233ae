use crate::{chronometer::Chronometer, samples::Sample};
use serde_json::json;
use std::{error, fmt, fmt::Display, str::FromStr};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    Table,
    Json,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseFormatError {
    value: String,
}

impl error::Error for ParseFormatError {}

impl fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown format '{}' (expected 'table' or 'json')", self.value)
    }
}

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(value: &str) -> Result<Self, ParseFormatError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(ParseFormatError { value: value.to_string() }),
        }
    }
}

#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
    format: Format,
}

impl Logger {
    pub fn new(format: Format) -> Self {
        Self {
            chronometer: Chronometer::new(),
            format,
        }
    }

    pub fn log(&self, value: impl Display) {
        match self.format {
            Format::Table => println!("{} ({} elapsed)", value, self.chronometer.elapsed()),
            Format::Json => println!(
                "{}",
                json!({
                    "message": value.to_string(),
                    "elapsed": self.chronometer.elapsed(),
                })
            ),
        }
    }

    pub fn sample(&self, sample: &Sample) {
        match self.format {
            Format::Table => self.log(sample),
            Format::Json => println!(
                "{}",
                json!({
                    "sample": sample,
                    "elapsed": self.chronometer.elapsed(),
                })
            ),
        }
    }
}
