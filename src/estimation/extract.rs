use lazy_static::lazy_static;
use regex::Regex;

use super::error::ExtractionError;

/// How a calorie value is pulled out of free-form model output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// First `\d+(\.\d+)?` token in the text.
    FirstNumber,
    /// Drop everything except ASCII digits and `.`, then parse the rest.
    DigitFilter,
}

impl ExtractionStrategy {
    pub fn extract(self, text: &str) -> Result<f64, ExtractionError> {
        match self {
            ExtractionStrategy::FirstNumber => first_number(text),
            ExtractionStrategy::DigitFilter => digit_filter(text),
        }
    }
}

pub fn first_number(text: &str) -> Result<f64, ExtractionError> {
    lazy_static! {
        static ref NUMBER_RE: Regex = Regex::new(r"\d+(\.\d+)?").unwrap();
    }
    let m = NUMBER_RE
        .find(text)
        .ok_or_else(|| ExtractionError::NoNumberFound(text.to_string()))?;
    let value = m.as_str().parse::<f64>().map_err(|source| ExtractionError::Parse {
        input: m.as_str().to_string(),
        source,
    })?;
    finite(value, m.as_str())
}

pub fn digit_filter(text: &str) -> Result<f64, ExtractionError> {
    let filtered: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    match filtered.parse::<f64>() {
        Ok(value) => finite(value, &filtered),
        Err(source) => Err(ExtractionError::Parse {
            input: filtered,
            source,
        }),
    }
}

/// Digit runs too long for `f64` parse to infinity.
fn finite(value: f64, input: &str) -> Result<f64, ExtractionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExtractionError::OutOfRange(input.to_string()))
    }
}
