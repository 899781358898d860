//! Weather document normalization
//!
//! Turns the raw InSight document into one fixed-shape [`PeriodSummary`] per
//! listed sol. Every leaf is read independently and falls back to `N/A`, so a
//! sparse entry still yields a complete summary.

use domain::{
    MarsWeatherReport, PeriodSummary, SolEntry, SolId, TemperatureSummary, WeatherDocument,
    WindSummary,
};

use crate::error::ApplicationError;

/// Normalize a weather document into per-sol summaries
///
/// Summaries follow the order of `sol_keys`. A missing, `null` or empty
/// `sol_keys` yields [`MarsWeatherReport::NoData`].
///
/// # Errors
///
/// Returns [`ApplicationError::MalformedDocument`] if a listed sol has no entry
/// or its entry is not a JSON object.
pub fn normalize(document: &WeatherDocument) -> Result<MarsWeatherReport, ApplicationError> {
    if document.has_no_sols() {
        return Ok(MarsWeatherReport::no_data());
    }

    document
        .sol_keys()
        .iter()
        .map(|sol| {
            document
                .entry(sol)
                .map(|entry| summarize(sol.clone(), &entry))
                .ok_or_else(|| ApplicationError::MalformedDocument(sol.clone()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(MarsWeatherReport::Summaries)
}

fn summarize(sol: SolId, entry: &SolEntry<'_>) -> PeriodSummary {
    PeriodSummary {
        sol,
        temperature: TemperatureSummary {
            min: entry.reading(SolEntry::AIR_TEMPERATURE_MIN),
            max: entry.reading(SolEntry::AIR_TEMPERATURE_MAX),
            average: entry.reading(SolEntry::AIR_TEMPERATURE_AVERAGE),
        },
        pressure: entry.reading(SolEntry::PRESSURE_AVERAGE),
        wind: WindSummary {
            speed: entry.reading(SolEntry::WIND_SPEED_AVERAGE),
            direction: entry.reading(SolEntry::WIND_DIRECTION_MOST_COMMON),
        },
        season: entry.reading(SolEntry::SEASON),
    }
}
