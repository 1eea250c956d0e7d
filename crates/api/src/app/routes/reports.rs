use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/today", get(movement_today))
        .route("/abc", get(abc_classification))
        .route("/value", get(inventory_value))
        .route("/export.csv", get(export_csv))
}

/// Units received/dispatched today, bucketed by the local calendar date.
pub async fn movement_today(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.inventory.movement_today() {
        Ok(movement) => (StatusCode::OK, Json(dto::movement_to_json(movement))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// ABC/Pareto classification, recomputed per request over the live
/// collection. Nothing is persisted.
pub async fn abc_classification(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.inventory.abc_report() {
        Ok(report) => (StatusCode::OK, Json(dto::abc_report_to_json(&report))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn inventory_value(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.inventory.value_report() {
        Ok(summary) => (StatusCode::OK, Json(dto::value_summary_to_json(summary))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// CSV snapshot of the inventory for spreadsheet import.
pub async fn export_csv(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let parts = match services.inventory.list() {
        Ok(parts) => parts,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let csv = dto::parts_to_csv(&parts);
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"inventory_report.csv\"",
            ),
        ],
        csv,
    )
        .into_response()
}
