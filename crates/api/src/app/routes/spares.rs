use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
};

use sparestock_core::PartId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_parts).post(create_part))
        .route("/:id", get(get_part).delete(delete_part))
        .route("/:id/consume", patch(consume_part))
        .route("/:id/restock", patch(restock_part))
}

fn parse_part_id(id: &str) -> Result<PartId, axum::response::Response> {
    id.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid part id")
    })
}

pub async fn list_parts(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let parts = match services.inventory.list() {
        Ok(parts) => parts,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let body: Vec<serde_json::Value> = parts.iter().map(dto::part_to_json).collect();
    (StatusCode::OK, Json(body)).into_response()
}

pub async fn create_part(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreatePartRequest>,
) -> axum::response::Response {
    match services.inventory.create(body.into_draft()) {
        Ok(part) => (StatusCode::CREATED, Json(dto::part_to_json(&part))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_part(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_part_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.inventory.get(id) {
        Ok(part) => (StatusCode::OK, Json(dto::part_to_json(&part))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn consume_part(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::QuantityRequest>,
) -> axum::response::Response {
    let id = match parse_part_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.inventory.consume(id, body.quantity) {
        Ok(part) => (StatusCode::OK, Json(dto::part_to_json(&part))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn restock_part(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::QuantityRequest>,
) -> axum::response::Response {
    let id = match parse_part_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.inventory.restock(id, body.quantity) {
        Ok(part) => (StatusCode::OK, Json(dto::part_to_json(&part))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_part(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_part_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.inventory.delete(id) {
        Ok(_) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Deleted successfully" })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
