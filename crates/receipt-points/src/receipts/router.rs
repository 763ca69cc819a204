use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{error, warn};

use super::domain::{ReceiptId, ReceiptSubmission};
use super::repository::ReceiptRepository;
use super::service::{ReceiptService, ReceiptServiceError};

/// Router exposing receipt processing, points lookup, and listing.
pub fn receipt_router<R>(service: Arc<ReceiptService<R>>) -> Router
where
    R: ReceiptRepository + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<R>))
        .route("/receipts/list", get(list_handler::<R>))
        .route("/receipts/:receipt_id/points", get(points_handler::<R>))
        .with_state(service)
}

pub(crate) async fn process_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    payload: Result<Json<ReceiptSubmission>, JsonRejection>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    let Json(submission) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("rejected receipt body: {rejection}");
            return error_response(StatusCode::BAD_REQUEST, "Invalid JSON");
        }
    };

    match service.process(submission) {
        Ok(record) => (StatusCode::OK, Json(record.processed_view())).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(receipt_id): Path<String>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    match service.get(&ReceiptId(receipt_id)) {
        Ok(record) => (StatusCode::OK, Json(record.points_view())).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<ReceiptService<R>>>) -> Response
where
    R: ReceiptRepository + 'static,
{
    match service.list() {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(err) => service_error_response(err),
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

pub(crate) fn service_error_response(err: ReceiptServiceError) -> Response {
    match err {
        ReceiptServiceError::NotFound(ref id) => {
            let payload = json!({
                "error": "Receipt Not Found",
                "message": format!("Receipt ID {id} does not exist."),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        err if err.is_client_error() => {
            error_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
        err => {
            error!("receipt store failure: {err}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}
