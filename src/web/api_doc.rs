use utoipa::OpenApi;

use super::api::{alerts, conjunctions, error, health, risk, satellites, statistics};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        satellites::list_satellites,
        satellites::get_satellite,
        satellites::propagate_satellites,
        statistics::get_statistics,
        conjunctions::analyze,
        risk::predict,
        alerts::stream_alerts,
    ),
    components(
        schemas(
            health::HealthResponse,
            satellites::SatelliteListResponse,
            satellites::PropagateResponse,
            conjunctions::AnalysisRequest,
            conjunctions::ConjunctionAnalysisResponse,
            risk::RiskRequest,
            alerts::AlertsResponse,
            error::ErrorResponse,
            crate::catalog::Satellite,
            crate::catalog::PropagatedSatellite,
            crate::catalog::Position,
            crate::catalog::Velocity,
            crate::catalog::RiskLevel,
            crate::catalog::RiskDistribution,
            crate::catalog::SatelliteRef,
            crate::analysis::Statistics,
            crate::analysis::ConjunctionEvent,
            crate::analysis::RiskPrediction,
            crate::analysis::ContributingFactor,
            crate::analysis::Impact,
            crate::analysis::Alert,
            crate::analysis::AlertType,
            crate::analysis::Severity,
        )
    ),
    info(
        title = "Mock Satellite API",
        description = "Randomized stand-in for the satellite tracking backend",
        version = "1.0.0"
    ),
    tags(
        (name = "health", description = "Liveness"),
        (name = "satellites", description = "Satellite positions"),
        (name = "statistics", description = "Catalog statistics"),
        (name = "conjunctions", description = "Close approach analysis"),
        (name = "risk", description = "Risk prediction"),
        (name = "alerts", description = "Alerts")
    )
)]
pub struct ApiDoc;
