//! Normalized per-sol weather summaries

use serde::Serialize;

use crate::value_objects::{Reading, SolId};

/// Message returned in place of summaries when the feed lists no sols
pub const NO_DATA_MESSAGE: &str = "No data available for recent Sols.";

/// Air temperature statistics for one sol
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemperatureSummary {
    pub min: Reading,
    pub max: Reading,
    pub average: Reading,
}

/// Wind statistics for one sol
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WindSummary {
    pub speed: Reading,
    pub direction: Reading,
}

/// Fixed-shape weather summary for one sol
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    /// Sol this summary describes
    pub sol: SolId,
    pub temperature: TemperatureSummary,
    pub pressure: Reading,
    pub wind: WindSummary,
    pub season: Reading,
}

impl PeriodSummary {
    /// Summary with every reading set to `N/A`
    pub fn not_available(sol: SolId) -> Self {
        Self {
            sol,
            temperature: TemperatureSummary::default(),
            pressure: Reading::NotAvailable,
            wind: WindSummary::default(),
            season: Reading::NotAvailable,
        }
    }
}

/// Result of normalizing one upstream document
///
/// Serialized untagged: summaries become a bare JSON array, the no-data case
/// becomes `{ "message": "..." }`. Clients tell them apart by shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarsWeatherReport {
    /// One summary per listed sol, in upstream order
    Summaries(Vec<PeriodSummary>),
    /// The feed listed no sols
    NoData { message: String },
}

impl MarsWeatherReport {
    /// The no-data report
    pub fn no_data() -> Self {
        Self::NoData {
            message: NO_DATA_MESSAGE.to_string(),
        }
    }

    /// Number of sols summarized
    pub fn sol_count(&self) -> usize {
        match self {
            Self::Summaries(summaries) => summaries.len(),
            Self::NoData { .. } => 0,
        }
    }

    /// Summaries, empty for the no-data report
    pub fn summaries(&self) -> &[PeriodSummary] {
        match self {
            Self::Summaries(summaries) => summaries.as_slice(),
            Self::NoData { .. } => &[],
        }
    }
}
