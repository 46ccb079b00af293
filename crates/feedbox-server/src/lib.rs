//! feedbox-server
//!
//! HTTP surface of the feedback service: the public submission endpoint,
//! admin login, and the token-protected admin dashboard API.

use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // route_layer only wraps routes added before it, so login stays public.
    let admin = Router::new()
        .route("/feedback", get(routes::dashboard::list_feedback))
        .route("/feedback/{id}", get(routes::dashboard::get_feedback))
        .route("/feedback/{id}/status", put(routes::dashboard::set_status))
        .route("/feedback/{id}/toggle", post(routes::dashboard::toggle_status))
        .route("/stats", get(routes::dashboard::stats))
        .route("/categories", get(routes::dashboard::categories))
        .route("/dashboard", get(routes::dashboard::dashboard))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ))
        .route("/login", post(routes::admin::login));

    Router::new()
        // Public
        .route("/health", get(routes::health::health_check))
        .route("/categories", get(routes::feedback::list_categories))
        .route("/feedback", post(routes::feedback::submit_feedback))
        .nest("/admin", admin)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
