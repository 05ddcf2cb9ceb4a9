//! API route handlers

use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pipeline::{PipelineError, ScoredSeries, SensorSeries};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub rows: usize,
    pub alerts: usize,
    pub timestamps: Vec<i64>,
    pub value: Vec<f64>,
    pub value_normalized: Vec<f64>,
    pub predicted_failure: Vec<u8>,
    pub autoencoder_anomaly: Vec<u8>,
    pub maintenance_alert: Vec<u8>,
}

impl From<ScoredSeries> for ScoreResponse {
    fn from(scored: ScoredSeries) -> Self {
        Self {
            rows: scored.len(),
            alerts: scored.alert_timestamps().len(),
            timestamps: scored.timestamps,
            value: scored.values,
            value_normalized: scored.value_normalized,
            predicted_failure: scored.predicted_failure,
            autoencoder_anomaly: scored.autoencoder_anomaly,
            maintenance_alert: scored.maintenance_alert,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_status(err: &PipelineError) -> StatusCode {
    match err {
        PipelineError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        PipelineError::Preprocess(_) | PipelineError::Scoring(_) | PipelineError::Evaluation(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        PipelineError::ArtifactLoad(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Score an uploaded CSV batch against the loaded artifacts.
///
/// The body is raw CSV with `timestamp` and `value` columns, matching the
/// files operators already export; the response carries every input row
/// with the alert columns attached.
pub async fn score(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ScoreResponse>, (StatusCode, Json<ErrorResponse>)> {
    let series = SensorSeries::from_csv(body.as_bytes()).map_err(reject)?;
    let scored = state.context.score_series(&series).map_err(reject)?;

    tracing::info!(
        rows = scored.len(),
        alerts = scored.alert_timestamps().len(),
        "scored batch"
    );
    Ok(Json(ScoreResponse::from(scored)))
}

fn reject(err: PipelineError) -> (StatusCode, Json<ErrorResponse>) {
    tracing::warn!("scoring request rejected: {}", err);
    (
        error_status(&err),
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
