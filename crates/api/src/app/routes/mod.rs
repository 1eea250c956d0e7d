use axum::{Router, routing::get};

pub mod auth;
pub mod reports;
pub mod spares;
pub mod system;
pub mod transactions;

/// Router for all token-protected endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/api/whoami", get(system::whoami))
        .nest("/api/spares", spares::router())
        .nest("/api/transactions", transactions::router())
        .nest("/api/reports", reports::router())
}
