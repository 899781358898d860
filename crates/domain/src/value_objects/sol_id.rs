//! Sol identifier for a Martian solar day

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};

/// Identifier of one reported sol, as listed in the upstream `sol_keys`
///
/// The upstream feed uses decimal strings (`"259"`), but the value is kept
/// verbatim and never parsed. Bare integers (`259`) are accepted and stored
/// in their decimal form so they still match the document's object keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SolId(String);

impl SolId {
    /// Create a sol identifier from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SolId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SolId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for SolId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for SolId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SolIdVisitor)
    }
}

struct SolIdVisitor;

impl de::Visitor<'_> for SolIdVisitor {
    type Value = SolId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sol identifier as a string or integer")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<SolId, E> {
        Ok(SolId::from(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<SolId, E> {
        Ok(SolId::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<SolId, E> {
        Ok(SolId::from(value.to_string()))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<SolId, E> {
        Ok(SolId::from(value.to_string()))
    }
}
