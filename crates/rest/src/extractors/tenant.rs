//! Resolved tenant extractor.
//!
//! Reads the [`TenantContext`] stored by the identification middleware.

use axum::{extract::FromRequestParts, http::request::Parts};
use tenancy_control::identification::{IdentificationStrategy, TenantContext};
use tenancy_persistence::tenant::TenantId;

use crate::error::{RestError, TENANT_CONTEXT_MISSING};

/// Axum extractor for the tenant identified by the middleware.
///
/// Only usable on routes behind
/// [`identification_middleware`](crate::middleware::identification_middleware).
/// Elsewhere it rejects with `401 Unauthorized`.
///
/// # Example
///
/// ```rust,ignore
/// use tenancy_rest::extractors::ResolvedTenant;
///
/// async fn handler(tenant: ResolvedTenant) {
///     println!("Tenant ID: {}", tenant.tenant_id());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ResolvedTenant(pub TenantContext);

impl ResolvedTenant {
    /// Returns the tenant ID.
    pub fn tenant_id(&self) -> &TenantId {
        &self.0.tenant_id
    }

    /// Returns the strategy that identified the tenant.
    pub fn strategy(&self) -> IdentificationStrategy {
        self.0.strategy
    }

    /// Consumes the extractor and returns the tenant context.
    pub fn into_context(self) -> TenantContext {
        self.0
    }
}

impl std::fmt::Display for ResolvedTenant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tenant_id())
    }
}

impl<S> FromRequestParts<S> for ResolvedTenant
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<TenantContext>()
            .cloned()
            .map(ResolvedTenant)
            .ok_or_else(|| RestError::unauthorized(TENANT_CONTEXT_MISSING))
    }
}
