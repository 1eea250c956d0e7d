//! HTTP API application wiring (axum router + service wiring).
//!
//! Folder layout:
//! - `services.rs`: store/service/registry wiring shared by all handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use sparestock_auth::Hs256TokenCodec;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(jwt_secret: String) -> Router {
    let tokens = Arc::new(Hs256TokenCodec::new(jwt_secret.as_bytes()));
    let auth_state = middleware::AuthState {
        tokens: tokens.clone(),
    };

    let services = Arc::new(services::build_services(tokens));

    // Protected routes: require a valid operator token.
    let protected = routes::router()
        .layer(Extension(services.clone()))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest(
            "/api/auth",
            routes::auth::router().layer(Extension(services)),
        )
        .merge(protected)
}
