//! healthbot-server library crate
//!
//! Exposes `build_app` and `config` for integration tests.
//! The actual binary entrypoint is in `main.rs`.

mod ai;
pub mod config;
pub mod dataset;
mod error;
mod middleware;
mod routes;
mod session;

use std::sync::Arc;

use axum::{Extension, Router, middleware as axum_mw, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use healthbot_core::Dataset;
use session::SessionStore;

/// Shared application state: the immutable dataset loaded at startup
/// plus the per-session conversation store.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub sessions: SessionStore,
}

/// Build the full application router with all routes and middleware.
///
/// Extracted from `main()` so integration tests can construct the app
/// without binding to a TCP port.
pub fn build_app(dataset: Arc<Dataset>, config: &Config) -> Router {
    // Create rate limiter
    let rate_limiter = middleware::create_rate_limiter(config.rate_limit_rps);

    // Create Gemini client (None if GEMINI_API_KEY not set; main() has
    // already made that fatal for production runs, tests run without it)
    let gemini_client: Option<ai::GeminiClient> = config
        .gemini_api_key
        .as_ref()
        .map(|key| ai::GeminiClient::new(key.clone()));

    let state = AppState {
        dataset,
        sessions: SessionStore::new(),
    };

    // Conversation routes (rate limited)
    let chat_routes = routes::chat_routes()
        .layer(axum_mw::from_fn(middleware::rate_limit_middleware))
        .layer(Extension(rate_limiter));

    // Install Prometheus metrics recorder.
    // build_recorder() + set_global_recorder() keeps repeated calls
    // (e.g. in integration tests) from panicking: the second install is
    // silently ignored and we still get a valid handle for /metrics.
    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    let prometheus_handle = recorder.handle();
    let _ = metrics::set_global_recorder(recorder);

    let public_routes = Router::new()
        .route("/health", get(routes::health::check))
        .route("/metrics", get(routes::metrics::get))
        .layer(Extension(prometheus_handle));

    // Build CORS layer
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Build application
    Router::new()
        .merge(public_routes)
        .nest("/chat", chat_routes)
        .with_state(state)
        .layer(Extension(gemini_client))
        .layer(axum_mw::from_fn(middleware::audit_middleware))
        .layer(axum_mw::from_fn(middleware::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_mw::from_fn(middleware::metrics_middleware))
}
