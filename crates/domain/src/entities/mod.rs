//! Domain entities - Upstream documents and the summaries derived from them

mod period_summary;
mod weather_document;

pub use period_summary::{
    MarsWeatherReport, NO_DATA_MESSAGE, PeriodSummary, TemperatureSummary, WindSummary,
};
pub use weather_document::{SolEntry, WeatherDocument};
