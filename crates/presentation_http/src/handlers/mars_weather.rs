//! Mars weather handler

use axum::{Json, extract::State};
use domain::MarsWeatherReport;
use tracing::{error, instrument};

use crate::{error::ApiError, state::AppState};

/// Fetch the InSight feed and return one summary per sol
///
/// Responds with a JSON array of summaries, or `{ "message": ... }` when the
/// feed lists no sols. Any upstream failure becomes a 500 with a fixed body.
#[instrument(skip(state))]
pub async fn get_mars_weather(
    State(state): State<AppState>,
) -> Result<Json<MarsWeatherReport>, ApiError> {
    let report = state
        .weather_service
        .current_report()
        .await
        .inspect_err(|e| error!(error = %e, "Error in /mars-weather route"))?;

    Ok(Json(report))
}
