use axum::{extract::State, Json};
use chrono::Utc;

use crate::analysis::{summarize, Statistics};
use crate::web::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/statistics",
    tag = "statistics",
    responses(
        (status = 200, description = "Catalog statistics", body = Statistics)
    )
)]
pub async fn get_statistics(State(state): State<AppState>) -> Json<Statistics> {
    let mut backend = state.backend.lock().await;
    let backend = &mut *backend;
    Json(summarize(&backend.catalog, &mut backend.rng, Utc::now()))
}
