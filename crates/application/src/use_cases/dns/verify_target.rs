use super::LookupHostnameUseCase;
use dnsverify_domain::{
    DomainError, DomainName, MatchKind, ResolutionResult, VerificationOutcome, VerificationPolicy,
    VerificationRequest,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Classifies how a primary hostname relates to a secondary one.
///
/// Checks run in a fixed order and the first hit wins: direct CNAME, CNAME
/// chain (when enabled), shared A address, no match.
pub struct VerifyTargetUseCase {
    lookup: Arc<LookupHostnameUseCase>,
    policy: VerificationPolicy,
}

impl VerifyTargetUseCase {
    pub fn new(lookup: Arc<LookupHostnameUseCase>, policy: VerificationPolicy) -> Self {
        Self { lookup, policy }
    }

    pub fn policy(&self) -> VerificationPolicy {
        self.policy
    }

    pub async fn execute(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationOutcome, DomainError> {
        let primary = self.resolve(&request.primary, request.nocache).await?;

        if primary.cname_is(&request.secondary) {
            return Ok(self.outcome(
                request,
                MatchKind::DirectCname,
                vec![(request.primary.clone(), primary)],
            ));
        }

        let target = self.comparison_target(request);
        let comparison = self.resolve(target, request.nocache).await?;

        let kind = if self.policy.enable_chain_detection && comparison.cname_is(&request.secondary)
        {
            MatchKind::CnameChain
        } else if primary.addresses.intersects(&comparison.addresses) {
            MatchKind::SharedAddress
        } else {
            MatchKind::NoMatch
        };

        Ok(self.outcome(
            request,
            kind,
            vec![(request.primary.clone(), primary), (target.clone(), comparison)],
        ))
    }

    /// The name resolved for comparison: the alias when one is supplied and
    /// the policy lets it stand in for the secondary.
    fn comparison_target<'a>(&self, request: &'a VerificationRequest) -> &'a DomainName {
        match &request.target_alias {
            Some(alias) if self.policy.alias_overrides_secondary => alias,
            _ => &request.secondary,
        }
    }

    async fn resolve(
        &self,
        hostname: &DomainName,
        nocache: bool,
    ) -> Result<ResolutionResult, DomainError> {
        self.lookup
            .execute(hostname, nocache)
            .await
            .map_err(|e| DomainError::Verification {
                hostname: hostname.to_string(),
                reason: e.to_string(),
            })
    }

    fn outcome(
        &self,
        request: &VerificationRequest,
        kind: MatchKind,
        results: Vec<(DomainName, ResolutionResult)>,
    ) -> VerificationOutcome {
        let status = self.policy.status_for(kind);
        info!(
            primary = %request.primary,
            secondary = %request.secondary,
            code = kind.code(),
            status = status.as_str(),
            "Verification classified"
        );

        // the comparison target can be the primary itself; its first resolution wins
        let mut per_host = HashMap::with_capacity(results.len());
        for (hostname, result) in results {
            per_host.entry(hostname).or_insert(result);
        }
        VerificationOutcome::new(kind, status, per_host)
    }
}
