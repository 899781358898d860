//! Sensor reading value object
//!
//! A single leaf of a sol summary: either the value reported upstream or the
//! `"N/A"` fallback.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::Reading;
//! use serde_json::json;
//!
//! let reading = Reading::from_optional(Some(&json!(-47.2)));
//! assert_eq!(serde_json::to_value(&reading).unwrap(), json!(-47.2));
//!
//! let missing = Reading::from_optional(None);
//! assert_eq!(serde_json::to_value(&missing).unwrap(), json!("N/A"));
//! ```

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Fallback emitted for every reading the upstream feed did not report
pub const NOT_AVAILABLE: &str = "N/A";

/// A reading copied from the upstream document
///
/// Values are carried as raw JSON and never coerced, so numbers stay numbers
/// and strings stay strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Reading {
    /// Value reported upstream
    Value(Value),
    /// Nothing reported (absent key or JSON `null`)
    #[default]
    NotAvailable,
}

impl Reading {
    /// Build a reading from an optional upstream node
    ///
    /// `None` and JSON `null` both map to [`Reading::NotAvailable`].
    #[must_use]
    pub fn from_optional(node: Option<&Value>) -> Self {
        match node {
            None | Some(Value::Null) => Self::NotAvailable,
            Some(value) => Self::Value(value.clone()),
        }
    }
}

impl From<Value> for Reading {
    fn from(value: Value) -> Self {
        Self::from_optional(Some(&value))
    }
}

impl Serialize for Reading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => value.serialize(serializer),
            Self::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(Value::String(s)) => write!(f, "{s}"),
            Self::Value(value) => write!(f, "{value}"),
            Self::NotAvailable => write!(f, "{NOT_AVAILABLE}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn null_is_not_available() {
        assert_eq!(Reading::from_optional(Some(&Value::Null)), Reading::NotAvailable);
        assert_eq!(Reading::from(Value::Null), Reading::NotAvailable);
    }

    #[test]
    fn zero_is_a_reported_value() {
        let reading = Reading::from(json!(0));
        assert_eq!(reading, Reading::Value(json!(0)));
    }

    #[test]
    fn values_serialize_verbatim() {
        assert_eq!(serde_json::to_value(Reading::from(json!(-90.125))).unwrap(), json!(-90.125));
        assert_eq!(serde_json::to_value(Reading::from(json!("WNW"))).unwrap(), json!("WNW"));
        assert_eq!(serde_json::to_value(Reading::from(json!(750))).unwrap(), json!(750));
    }

    #[test]
    fn not_available_serializes_as_fallback() {
        let json = serde_json::to_string(&Reading::NotAvailable).unwrap();
        assert_eq!(json, r#""N/A""#);
    }

    #[test]
    fn display_unquotes_strings() {
        assert_eq!(Reading::from(json!("winter")).to_string(), "winter");
        assert_eq!(Reading::from(json!(6.5)).to_string(), "6.5");
        assert_eq!(Reading::NotAvailable.to_string(), "N/A");
    }
}
