use crate::dto::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dnsverify_domain::DomainError;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            DomainError::InvalidDomainName(_) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(self.0.to_string()))
            }

            DomainError::Verification { hostname, reason } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::for_hostname(reason.clone(), hostname.clone()),
            ),

            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(self.0.to_string()),
            ),
        };

        (status, Json(body)).into_response()
    }
}
