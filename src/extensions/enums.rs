use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::errors::{Error, Result};

/// Comma-separated list of every spelling an enum accepts.
pub fn choices_csv<T>() -> String
where
    T: IntoEnumIterator + AsRef<str>,
{
    T::iter()
        .map(|v| v.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a config value into a strum enum, naming the valid choices on failure.
pub fn parse_choice<T>(raw: &str, what: &str) -> Result<T>
where
    T: FromStr + IntoEnumIterator + AsRef<str>,
{
    T::from_str(raw.trim()).map_err(|_| {
        Error::config(format!(
            "Invalid {what}: '{}'. Allowed values: {}",
            raw.trim(),
            choices_csv::<T>()
        ))
    })
}
