use axum::{body::Bytes, extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use utoipa::ToSchema;

use crate::analysis::{predict_risk, RiskPrediction};
use crate::web::api::body::lenient_json;
use crate::web::state::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RiskRequest {
    /// Echoed back as-is, whatever its type. Defaults to the first catalog
    /// entry only when the key is absent.
    #[serde(default, deserialize_with = "present")]
    pub satellite_id: Option<Value>,
}

/// Keeps an explicit `null` as `Some(Value::Null)` so only a missing key falls
/// back to the default.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[utoipa::path(
    post,
    path = "/api/v1/risk/predict",
    tag = "risk",
    request_body = RiskRequest,
    responses(
        (status = 200, description = "Risk prediction", body = RiskPrediction)
    )
)]
pub async fn predict(State(state): State<AppState>, body: Bytes) -> Json<RiskPrediction> {
    let request: RiskRequest = lenient_json(&body);

    let mut backend = state.backend.lock().await;
    let backend = &mut *backend;
    let satellite_id = request
        .satellite_id
        .or_else(|| backend.catalog.first_id().map(Value::from))
        .unwrap_or_default();

    let prediction = predict_risk(satellite_id, &mut backend.rng, Utc::now());
    log::debug!(
        "Predicted {} risk for {}",
        prediction.predicted_risk,
        prediction.satellite_id
    );
    Json(prediction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none_but_null_is_kept() {
        let missing: RiskRequest = lenient_json(&Bytes::from_static(b"{}"));
        assert!(missing.satellite_id.is_none());

        let null: RiskRequest = lenient_json(&Bytes::from_static(br#"{"satellite_id": null}"#));
        assert_eq!(null.satellite_id, Some(Value::Null));
    }

    #[test]
    fn any_json_type_is_accepted() {
        let text: RiskRequest = lenient_json(&Bytes::from_static(br#"{"satellite_id": "ISS"}"#));
        assert_eq!(text.satellite_id, Some(Value::from("ISS")));

        let negative: RiskRequest = lenient_json(&Bytes::from_static(br#"{"satellite_id": -5}"#));
        assert_eq!(negative.satellite_id, Some(Value::from(-5)));
    }
}
