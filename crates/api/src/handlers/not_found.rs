use crate::dto::ErrorResponse;
use axum::{http::StatusCode, Json};

pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("not found")))
}
