use axum::body::Bytes;
use serde::de::DeserializeOwned;

/// Parse a JSON request body, falling back to `T::default()` for anything
/// that does not fit (empty body, not JSON, wrong shape).
pub fn lenient_json<T: DeserializeOwned + Default>(body: &Bytes) -> T {
    serde_json::from_slice(body).unwrap_or_default()
}
