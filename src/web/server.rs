use axum::{routing::get, routing::post, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::api::alerts as alert_handlers;
use super::api::conjunctions as conjunction_handlers;
use super::api::health as health_handlers;
use super::api::risk as risk_handlers;
use super::api::satellites as satellite_handlers;
use super::api::statistics as statistics_handlers;
use super::api_doc::ApiDoc;
use super::config::Config;
use super::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handlers::health))
        // Satellite endpoints
        .route("/api/v1/satellites", get(satellite_handlers::list_satellites))
        .route(
            "/api/v1/satellites/propagate",
            get(satellite_handlers::propagate_satellites),
        )
        .route(
            "/api/v1/satellite/{norad_id}",
            get(satellite_handlers::get_satellite),
        )
        .route(
            "/api/v1/statistics",
            get(statistics_handlers::get_statistics),
        )
        // Analysis endpoints
        .route(
            "/api/v1/conjunctions/analyze",
            post(conjunction_handlers::analyze),
        )
        .route("/api/v1/risk/predict", post(risk_handlers::predict))
        .route("/api/v1/alerts/stream", get(alert_handlers::stream_alerts))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind;
    match config.simulation.seed {
        Some(seed) => log::info!("Seeding mock catalog with {}", seed),
        None => log::info!("Seeding mock catalog from OS entropy"),
    }

    let app = router(AppState::new(config.simulation.seed));

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}
