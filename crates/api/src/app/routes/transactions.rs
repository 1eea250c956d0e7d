use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", get(list_transactions))
}

/// Full movement history, newest first. Unbounded — the single-warehouse
/// ledger stays small enough that pagination was never part of the contract.
pub async fn list_transactions(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let records = match services.inventory.transactions() {
        Ok(records) => records,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let body: Vec<serde_json::Value> = records.iter().map(dto::record_to_json).collect();
    (StatusCode::OK, Json(body)).into_response()
}
