//! Mars weather service - Fetch and normalize the InSight feed

use std::{fmt, sync::Arc, time::Instant};

use domain::MarsWeatherReport;
use tracing::{debug, instrument, warn};

use crate::{error::ApplicationError, ports::MarsWeatherPort, services::normalize};

/// Service producing the per-sol weather report
///
/// Stateless: every call issues exactly one upstream fetch.
pub struct MarsWeatherService {
    weather: Arc<dyn MarsWeatherPort>,
}

impl fmt::Debug for MarsWeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarsWeatherService").finish_non_exhaustive()
    }
}

impl MarsWeatherService {
    /// Create a new Mars weather service
    pub fn new(weather: Arc<dyn MarsWeatherPort>) -> Self {
        Self { weather }
    }

    /// Fetch the upstream document and normalize it
    #[instrument(skip(self))]
    pub async fn current_report(&self) -> Result<MarsWeatherReport, ApplicationError> {
        let start = Instant::now();

        let document = self.weather.fetch_weather().await?;

        let report = normalize(&document).inspect_err(|e| {
            warn!(error = %e, "Upstream weather document could not be normalized");
        })?;

        debug!(
            sols = report.sol_count(),
            latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Mars weather report ready"
        );

        Ok(report)
    }
}
