use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::catalog::{PropagatedSatellite, Satellite};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListSatellitesQuery {
    /// Zero-based page index, used together with `limit`
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SatelliteListResponse {
    pub satellites: Vec<Satellite>,
    pub total_count: usize,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PropagateQuery {
    /// Target time, echoed back verbatim
    pub time: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PropagateResponse {
    pub satellites: Vec<PropagatedSatellite>,
    pub target_time: String,
    pub timestamp: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/api/v1/satellites",
    tag = "satellites",
    params(ListSatellitesQuery),
    responses(
        (status = 200, description = "All tracked satellites", body = SatelliteListResponse)
    )
)]
pub async fn list_satellites(
    State(state): State<AppState>,
    query: Result<Query<ListSatellitesQuery>, QueryRejection>,
) -> Json<SatelliteListResponse> {
    // Malformed paging parameters are ignored rather than rejected.
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let now = Utc::now();

    let mut backend = state.backend.lock().await;
    let backend = &mut *backend;
    backend.catalog.drift(&mut backend.rng, now);

    let satellites = backend.catalog.satellites();
    Json(SatelliteListResponse {
        satellites: paginate(satellites, query.page, query.limit).to_vec(),
        total_count: satellites.len(),
        timestamp: now,
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/satellite/{norad_id}",
    tag = "satellites",
    params(
        ("norad_id" = u32, Path, description = "NORAD catalog number")
    ),
    responses(
        (status = 200, description = "Satellite record", body = Satellite),
        (status = 404, description = "Unknown or non-numeric id", body = ErrorResponse)
    )
)]
pub async fn get_satellite(
    State(state): State<AppState>,
    Path(norad_id): Path<String>,
) -> ApiResult<Json<Satellite>> {
    let now = Utc::now();
    let mut backend = state.backend.lock().await;
    let backend = &mut *backend;
    backend.catalog.drift(&mut backend.rng, now);

    // Non-numeric ids are treated as an unmatched route, not a bad request.
    let satellite = norad_id
        .parse::<u32>()
        .ok()
        .and_then(|id| backend.catalog.find(id))
        .ok_or_else(|| {
            log::debug!("Satellite lookup missed: {}", norad_id);
            ApiError::SatelliteNotFound
        })?;

    Ok(Json(satellite.clone()))
}

#[utoipa::path(
    get,
    path = "/api/v1/satellites/propagate",
    tag = "satellites",
    params(PropagateQuery),
    responses(
        (status = 200, description = "Satellites moved to the target time", body = PropagateResponse)
    )
)]
pub async fn propagate_satellites(
    State(state): State<AppState>,
    query: Result<Query<PropagateQuery>, QueryRejection>,
) -> Json<PropagateResponse> {
    let now = Utc::now();
    let target_time = query
        .ok()
        .and_then(|Query(q)| q.time)
        .unwrap_or_else(|| now.to_rfc3339());

    let mut backend = state.backend.lock().await;
    let backend = &mut *backend;
    backend.catalog.drift(&mut backend.rng, now);
    let satellites = backend.catalog.propagate(&mut backend.rng, &target_time);

    Json(PropagateResponse {
        satellites,
        target_time,
        timestamp: now,
    })
}

fn paginate<T>(items: &[T], page: Option<usize>, limit: Option<usize>) -> &[T] {
    let (Some(page), Some(limit)) = (page, limit) else {
        return items;
    };
    let start = page.saturating_mul(limit);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(limit).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::paginate;

    #[test]
    fn paginate_requires_both_parameters() {
        let items = [1, 2, 3];
        assert_eq!(paginate(&items, None, Some(1)), &[1, 2, 3]);
        assert_eq!(paginate(&items, Some(1), None), &[1, 2, 3]);
    }

    #[test]
    fn paginate_slices_and_runs_off_the_end() {
        let items = [1, 2, 3];
        assert_eq!(paginate(&items, Some(0), Some(2)), &[1, 2]);
        assert_eq!(paginate(&items, Some(1), Some(2)), &[3]);
        assert!(paginate(&items, Some(2), Some(2)).is_empty());
        assert!(paginate(&items, Some(usize::MAX), Some(usize::MAX)).is_empty());
    }
}
