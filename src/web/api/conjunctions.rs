use axum::{body::Bytes, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::analysis::{analyze_conjunctions, ConjunctionEvent};
use crate::web::state::AppState;

pub const MODEL_VERSION: &str = "mock-v1.0";

/// No field is read; unknown keys and malformed bodies are accepted.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AnalysisRequest {}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConjunctionAnalysisResponse {
    pub conjunctions: Vec<ConjunctionEvent>,
    pub analysis_time: DateTime<Utc>,
    pub total_analyzed: usize,
    pub ai_model_version: &'static str,
}

/// Any request body is accepted; its contents do not influence the result.
#[utoipa::path(
    post,
    path = "/api/v1/conjunctions/analyze",
    tag = "conjunctions",
    request_body = AnalysisRequest,
    responses(
        (status = 200, description = "Generated conjunction events", body = ConjunctionAnalysisResponse)
    )
)]
pub async fn analyze(State(state): State<AppState>, _body: Bytes) -> Json<ConjunctionAnalysisResponse> {
    let now = Utc::now();
    let mut backend = state.backend.lock().await;
    let backend = &mut *backend;
    let conjunctions = analyze_conjunctions(&backend.catalog, &mut backend.rng, now);
    log::debug!("Generated {} conjunctions", conjunctions.len());
    for event in &conjunctions {
        log::debug!(
            "{}: {} / {} risk {}",
            event.id,
            event.primary_satellite.norad_id,
            event.secondary_satellite.norad_id,
            event.risk_level
        );
    }

    Json(ConjunctionAnalysisResponse {
        conjunctions,
        analysis_time: now,
        total_analyzed: backend.catalog.len(),
        ai_model_version: MODEL_VERSION,
    })
}
