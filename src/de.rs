//! Deserialize helpers for numbers the ticker API sends as strings
//!
//! The v1 ticker encodes every numeric field as a JSON string (`"573.137"`)
//! and uses `null` for figures it does not know, such as `max_supply` for
//! uncapped coins. The global endpoint sends plain JSON numbers. These
//! helpers accept both encodings and parse strings explicitly.

use serde::{de, Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(serde_json::Number),
    String(String),
}

impl NumberOrString {
    fn parse<T, E>(self) -> Result<Option<T>, E>
    where
        T: FromStr,
        T::Err: Display,
        E: de::Error,
    {
        let text = match self {
            NumberOrString::Number(n) => n.to_string(),
            NumberOrString::String(s) => s,
        };
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        text.parse::<T>()
            .map(Some)
            .map_err(|e| E::custom(format!("invalid number {:?}: {}", text, e)))
    }
}

/// Deserializes a required number given either as a JSON number or string
pub(crate) fn from_str_or_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    NumberOrString::deserialize(deserializer)?
        .parse::<T, D::Error>()?
        .ok_or_else(|| de::Error::custom("expected a number, found an empty string"))
}

/// Deserializes an optional number; `null` and `""` both become `None`
///
/// Pair with `#[serde(default)]` so that a missing key is also `None`.
pub(crate) fn opt_from_str_or_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(value) => value.parse(),
        None => Ok(None),
    }
}
