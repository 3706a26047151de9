use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::analysis::{generate_alerts, Alert};
use crate::web::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct AlertsResponse {
    pub alerts: Vec<Alert>,
    pub timestamp: DateTime<Utc>,
}

/// Single-shot snapshot of current alerts. Despite the path this does not
/// hold the connection open.
#[utoipa::path(
    get,
    path = "/api/v1/alerts/stream",
    tag = "alerts",
    responses(
        (status = 200, description = "Current alerts", body = AlertsResponse)
    )
)]
pub async fn stream_alerts(State(state): State<AppState>) -> Json<AlertsResponse> {
    let now = Utc::now();
    let mut backend = state.backend.lock().await;
    let backend = &mut *backend;
    let alerts = generate_alerts(&backend.catalog, &mut backend.rng, now);
    for alert in &alerts {
        log::debug!(
            "{} alert {} ({}) for {}",
            alert.severity,
            alert.id,
            alert.alert_type,
            alert.satellite_id
        );
    }

    Json(AlertsResponse {
        alerts,
        timestamp: now,
    })
}
