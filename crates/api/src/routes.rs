use crate::handlers;
use crate::middleware::require_basic_auth;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/lookup/{hostname}", get(handlers::lookup_hostname))
        .route(
            "/verify_target/{hostname1}/{hostname2}",
            get(handlers::verify_target),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_basic_auth,
        ))
        .fallback(handlers::not_found)
        .with_state(state)
}
