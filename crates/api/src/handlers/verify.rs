use crate::{
    dto::{VerifyParams, VerifyResponse},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use dnsverify_domain::{DomainName, VerificationRequest};
use tracing::debug;

pub async fn verify_target(
    State(state): State<AppState>,
    Path((hostname1, hostname2)): Path<(String, String)>,
    Query(params): Query<VerifyParams>,
) -> Result<Json<VerifyResponse>, ApiError> {
    let primary = DomainName::fqdn(&hostname1)?;
    let secondary = DomainName::fqdn(&hostname2)?;
    let alias = params.target_alias().map(DomainName::fqdn).transpose()?;

    debug!(
        primary = %primary,
        secondary = %secondary,
        target_alias = ?alias.as_ref().map(DomainName::as_str),
        nocache = params.nocache(),
        "Verification requested"
    );

    let request = VerificationRequest::new(primary, secondary)
        .with_target_alias(alias)
        .with_nocache(params.nocache());

    let outcome = state.verify.execute(&request).await?;
    Ok(Json(VerifyResponse::from(&outcome)))
}
