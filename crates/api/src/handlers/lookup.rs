use crate::{
    dto::{LookupParams, LookupResponse},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use dnsverify_domain::DomainName;
use tracing::debug;

pub async fn lookup_hostname(
    State(state): State<AppState>,
    Path(hostname): Path<String>,
    Query(params): Query<LookupParams>,
) -> Result<Json<LookupResponse>, ApiError> {
    let fqdn = DomainName::fqdn(&hostname)?;
    let nocache = params.nocache();

    debug!(hostname = %fqdn, nocache, "Lookup requested");

    let result = state.lookup.execute(&fqdn, nocache).await?;
    Ok(Json(LookupResponse::from(&result)))
}
