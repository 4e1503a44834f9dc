use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::json;
use tracing::warn;

const BASIC_PREFIX: &str = "Basic ";

/// Rejects any request whose Basic-Auth credentials do not match the
/// configured user and password.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = match extract_credentials(request.headers()) {
        Ok(Some((user, password))) => state.credentials.matches(&user, &password),
        Ok(None) => false,
        Err(reason) => {
            warn!(path = %request.uri().path(), reason = %reason, "Undecodable Basic-Auth credentials");
            false
        }
    };

    if authorized {
        next.run(request).await
    } else {
        unauthorized()
    }
}

/// `Ok(None)` when no Basic credentials were presented at all.
pub fn extract_credentials(headers: &HeaderMap) -> Result<Option<(String, String)>, String> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };
    let value = value
        .to_str()
        .map_err(|_| "authorization header is not ASCII".to_string())?;

    let Some(encoded) = value.strip_prefix(BASIC_PREFIX) else {
        return Ok(None);
    };

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|e| format!("invalid base64: {}", e))?;
    let decoded = String::from_utf8(decoded).map_err(|_| "credentials are not UTF-8".to_string())?;

    let (user, password) = decoded.split_once(':').unwrap_or((decoded.as_str(), ""));
    Ok(Some((user.to_string(), password.to_string())))
}

fn unauthorized() -> Response {
    let mut response =
        (StatusCode::UNAUTHORIZED, Json(json!({ "error": "unauthorized" }))).into_response();
    response.headers_mut().insert(
        header::WWW_AUTHENTICATE,
        HeaderValue::from_static("Basic realm=\"dnsverify\""),
    );
    response
}
