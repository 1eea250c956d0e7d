use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CredentialsRequest>,
) -> axum::response::Response {
    let operator = match services.operators.register(&body.username, &body.password) {
        Ok(op) => op,
        Err(e) => return errors::credential_error_to_response(e),
    };

    tracing::info!(username = %operator.username, "operator registered");

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "id": operator.id.to_string(),
            "username": operator.username,
        })),
    )
        .into_response()
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CredentialsRequest>,
) -> axum::response::Response {
    let operator = match services.operators.verify(&body.username, &body.password) {
        Ok(op) => op,
        Err(e) => return errors::credential_error_to_response(e),
    };

    let token = match services.tokens.issue(operator.id, &operator.username, Utc::now()) {
        Ok(t) => t,
        Err(_) => {
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "token_error",
                "failed to issue session token",
            );
        }
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "token": token,
            "username": operator.username,
        })),
    )
        .into_response()
}
