//! haven-lambda
//!
//! HTTP API for the Haven app, served from AWS Lambda. Everything except
//! `/health` and `/instruments` requires a bearer token.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/assessments/interpret", post(routes::interpret::interpret))
        .route(
            "/assessments/{type}/submit",
            post(routes::assessments::submit_assessment),
        )
        .route("/assessments/results", get(routes::assessments::list_results))
        .route(
            "/assessments/results/{id}",
            get(routes::assessments::get_result),
        )
        .route(
            "/activities",
            get(routes::activities::list_activities).post(routes::activities::record_activity),
        )
        .route("/profile", get(routes::profile::get_profile))
        .route("/badges", get(routes::badges::list_badges))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Instruments (no auth, public schema data)
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{type}",
            get(routes::instruments::get_instrument_detail),
        )
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
