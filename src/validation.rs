//! Request validation helpers
//!
//! Payload fields are decoded as `Option`s; `Required` then collects every
//! missing field so a single error can name all of them.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::error::AppError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Collects the labels of missing required fields
#[derive(Debug, Default)]
pub struct Required {
    missing: Vec<&'static str>,
}

impl Required {
    /// Pass the value through, remembering `label` when it is absent
    pub fn take<T>(&mut self, label: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.missing.push(label);
        }
        value
    }

    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }

    pub fn into_error(self) -> AppError {
        missing_fields(&self.missing)
    }
}

/// Build the validation error naming every missing field
pub fn missing_fields(labels: &[&str]) -> AppError {
    let message = match labels {
        [] => "Invalid input".to_string(),
        [only] => format!("Invalid input: {} is required", only),
        many => format!("Invalid input: {} are required fields", many.join(", ")),
    };
    AppError::Validation(message)
}

/// Deserialize a string, treating empty or whitespace-only text as absent
pub fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

/// Deserialize a `YYYY-MM-DD` date, treating an empty string as absent
pub fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid date '{}': {}", s, e))),
    }
}
