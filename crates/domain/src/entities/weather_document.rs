//! Upstream InSight weather document
//!
//! The feed is one JSON object keyed by sol identifier, plus a `sol_keys`
//! array listing which of those sols are valid, in reporting order:
//!
//! ```json
//! {
//!   "sol_keys": ["259", "260"],
//!   "259": { "AT": { "av": -71.2, "mn": -101.0, "mx": -27.1 }, "Season": "fall" },
//!   "260": { "PRE": { "av": 721.4 } },
//!   "validity_checks": { "...": "..." }
//! }
//! ```
//!
//! Any group or leaf may be missing for any sol, so entries are kept as raw
//! JSON and read leaf by leaf through [`SolEntry::reading`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::value_objects::{Reading, SolId};

/// Raw weather document as returned by the InSight API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherDocument {
    /// Ordered list of sols with data, absent or `null` when none are reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sol_keys: Option<Vec<SolId>>,

    /// Every other top-level key: per-sol entries and `validity_checks`
    #[serde(flatten)]
    pub entries: Map<String, Value>,
}

impl WeatherDocument {
    /// Sols listed by the document, in upstream order
    pub fn sol_keys(&self) -> &[SolId] {
        self.sol_keys.as_deref().unwrap_or_default()
    }

    /// Check whether the document lists no sols at all
    pub fn has_no_sols(&self) -> bool {
        self.sol_keys().is_empty()
    }

    /// Look up the entry for a sol
    ///
    /// Returns `None` when the key is missing or its value is not a JSON object.
    pub fn entry(&self, sol: &SolId) -> Option<SolEntry<'_>> {
        self.entries
            .get(sol.as_str())
            .and_then(Value::as_object)
            .map(SolEntry::new)
    }
}

/// Borrowed view over the measurements of one sol
#[derive(Debug, Clone, Copy)]
pub struct SolEntry<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> SolEntry<'a> {
    /// Minimum air temperature
    pub const AIR_TEMPERATURE_MIN: &'static [&'static str] = &["AT", "mn"];
    /// Maximum air temperature
    pub const AIR_TEMPERATURE_MAX: &'static [&'static str] = &["AT", "mx"];
    /// Average air temperature
    pub const AIR_TEMPERATURE_AVERAGE: &'static [&'static str] = &["AT", "av"];
    /// Average atmospheric pressure
    pub const PRESSURE_AVERAGE: &'static [&'static str] = &["PRE", "av"];
    /// Average horizontal wind speed
    pub const WIND_SPEED_AVERAGE: &'static [&'static str] = &["HWS", "av"];
    /// Compass point of the most common wind direction
    pub const WIND_DIRECTION_MOST_COMMON: &'static [&'static str] =
        &["WD", "most_common", "compass_point"];
    /// Martian season label
    pub const SEASON: &'static [&'static str] = &["Season"];

    /// Wrap the JSON object of one sol
    pub const fn new(fields: &'a Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Read the leaf at `path`, falling back to `N/A`
    ///
    /// Walking stops at the first missing key or non-object node, so
    /// `["WD", "most_common", "compass_point"]` yields `N/A` whether `WD`,
    /// `most_common` or `compass_point` is the missing link.
    pub fn reading(&self, path: &[&str]) -> Reading {
        let Some((first, rest)) = path.split_first() else {
            return Reading::NotAvailable;
        };

        let leaf = self.fields.get(*first).and_then(|root| {
            rest.iter().try_fold(root, |node, key| node.as_object()?.get(*key))
        });

        Reading::from_optional(leaf)
    }
}
