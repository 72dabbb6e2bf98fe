//! Decimal fields travel as exact text on the wire and are parsed only when
//! a computation needs them.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::error::{DepotError, Result};

/// Parse a decimal field strictly.
pub fn parse_decimal(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| DepotError::Parse(format!("'{}' is not a decimal: {}", text, e)))
}

/// Parse a decimal field, absorbing malformed text as zero.
///
/// `field` names the value in the warning emitted on failure.
pub fn decimal_or_zero(field: &str, text: &str) -> Decimal {
    match parse_decimal(text) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(field, raw = text, error = %e, "unparsable decimal treated as 0");
            Decimal::ZERO
        }
    }
}

/// Deserialize a decimal field as its text form, accepting JSON strings,
/// numbers, and `null` (empty text).
pub(crate) fn decimal_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Option::<Text>::deserialize(deserializer)? {
        Some(Text::Str(s)) => s,
        Some(Text::Num(n)) => n.to_string(),
        None => String::new(),
    })
}

/// Deserialize a field through `Option`, so an explicit `null` falls back to
/// the type's default just like a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
