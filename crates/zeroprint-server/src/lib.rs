//! zeroprint-server
//!
//! The HTTP boundary: estimator, coefficient table, content tables, and the
//! translation relay behind one axum router.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router over the given state.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/carbon/factors", get(routes::factors::get_factors))
        .route("/api/carbon/estimate", post(routes::estimate::post_estimate))
        .route("/api/translate", post(routes::translate::post_translate))
        .route("/api/content/tips", get(routes::content::get_tips))
        .route("/api/content/sponsors", get(routes::content::get_sponsors))
        .route("/api/content/tips/export", post(routes::content::export_tips))
        .route(
            "/api/content/sponsors/export",
            post(routes::content::export_sponsors),
        )
        .route(
            "/api/preferences/defaults",
            get(routes::preferences::default_preferences),
        )
        // Raw table text, fetched directly by the public page and the admin
        // surface.
        .route("/tips.csv", get(routes::content::raw_tips))
        .route("/sponsors.csv", get(routes::content::raw_sponsors))
        .layer(cors)
        .with_state(state)
}
