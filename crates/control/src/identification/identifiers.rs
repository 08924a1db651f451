//! Tenant identifiers, one per identification strategy.
//!
//! Each identifier is a pure function of one slice of the request. The
//! keyed identifiers read a [`TenantRegistry`] they share with the
//! resolver; the others hold no state at all.

use std::sync::Arc;

use tenancy_persistence::tenant::TenantId;

use super::registry::TenantRegistry;
use super::request::{RequestContext, X_API_KEY, X_TENANT_ID};
use super::strategy::IdentificationStrategy;

/// Path prefix recognised by [`PathTenantIdentifier`].
pub const TENANTS_PATH_PREFIX: &str = "/tenants/";

/// Trait for deriving a tenant identity from one aspect of a request.
pub trait TenantIdentifier: Send + Sync {
    /// Attempts to identify the tenant. `None` means this strategy missed.
    fn identify(&self, request: &RequestContext) -> Option<TenantId>;

    /// Returns the strategy this identifier implements.
    fn strategy(&self) -> IdentificationStrategy;
}

/// Identifies the tenant from the `X-Tenant-Id` header.
///
/// The header's presence is enough: its value is taken verbatim, even when
/// empty.
#[derive(Debug, Default)]
pub struct HeaderTenantIdentifier;

impl TenantIdentifier for HeaderTenantIdentifier {
    fn identify(&self, request: &RequestContext) -> Option<TenantId> {
        request.header(X_TENANT_ID).map(TenantId::new)
    }

    fn strategy(&self) -> IdentificationStrategy {
        IdentificationStrategy::Header
    }
}

/// Identifies the tenant from a registered `X-Api-Key` header.
#[derive(Debug, Default)]
pub struct ApiKeyTenantIdentifier {
    registry: Arc<TenantRegistry>,
}

impl ApiKeyTenantIdentifier {
    /// Creates an identifier reading the given registry.
    pub fn new(registry: Arc<TenantRegistry>) -> Self {
        Self { registry }
    }

    /// Registers `api_key` for `tenant_id`, replacing any earlier owner.
    pub fn register(&self, tenant_id: TenantId, api_key: impl Into<String>) -> Option<TenantId> {
        self.registry.register(api_key, tenant_id)
    }
}

impl TenantIdentifier for ApiKeyTenantIdentifier {
    fn identify(&self, request: &RequestContext) -> Option<TenantId> {
        let api_key = request.header(X_API_KEY)?;
        self.registry.lookup(api_key)
    }

    fn strategy(&self) -> IdentificationStrategy {
        IdentificationStrategy::ApiKey
    }
}

/// Identifies the tenant from a registered custom domain (the full host).
#[derive(Debug, Default)]
pub struct CustomDomainTenantIdentifier {
    registry: Arc<TenantRegistry>,
}

impl CustomDomainTenantIdentifier {
    /// Creates an identifier reading the given registry.
    pub fn new(registry: Arc<TenantRegistry>) -> Self {
        Self { registry }
    }

    /// Registers `domain` for `tenant_id`, replacing any earlier owner.
    pub fn register(&self, tenant_id: TenantId, domain: impl Into<String>) -> Option<TenantId> {
        self.registry.register(domain, tenant_id)
    }
}

impl TenantIdentifier for CustomDomainTenantIdentifier {
    fn identify(&self, request: &RequestContext) -> Option<TenantId> {
        self.registry.lookup(request.host())
    }

    fn strategy(&self) -> IdentificationStrategy {
        IdentificationStrategy::CustomDomain
    }
}

/// Identifies the tenant from the first label of a registered subdomain.
///
/// Only hosts with more than two dot-separated labels carry a subdomain:
/// `demo.platform.io` yields `demo`, `platform.io` yields nothing.
#[derive(Debug, Default)]
pub struct SubdomainTenantIdentifier {
    registry: Arc<TenantRegistry>,
}

impl SubdomainTenantIdentifier {
    /// Creates an identifier reading the given registry.
    pub fn new(registry: Arc<TenantRegistry>) -> Self {
        Self { registry }
    }

    /// Registers `subdomain` for `tenant_id`, replacing any earlier owner.
    pub fn register(&self, tenant_id: TenantId, subdomain: impl Into<String>) -> Option<TenantId> {
        self.registry.register(subdomain, tenant_id)
    }

    /// Returns the first label of `host` when it has more than two labels.
    pub fn extract_subdomain(host: &str) -> Option<&str> {
        let mut labels = host.split('.');
        let first = labels.next()?;
        // need at least two more labels after the first
        if labels.nth(1).is_some() {
            Some(first)
        } else {
            None
        }
    }
}

impl TenantIdentifier for SubdomainTenantIdentifier {
    fn identify(&self, request: &RequestContext) -> Option<TenantId> {
        let subdomain = Self::extract_subdomain(request.host())?;
        self.registry.lookup(subdomain)
    }

    fn strategy(&self) -> IdentificationStrategy {
        IdentificationStrategy::Subdomain
    }
}

/// Identifies the tenant from a `/tenants/{id}` path prefix.
///
/// The segment after the prefix is returned as-is; no registry is
/// consulted, so any value is accepted, including an empty one.
#[derive(Debug, Default)]
pub struct PathTenantIdentifier;

impl PathTenantIdentifier {
    /// Returns the third `/`-delimited segment of a `/tenants/...` path.
    pub fn extract_tenant_segment(path: &str) -> Option<&str> {
        if !path.starts_with(TENANTS_PATH_PREFIX) {
            return None;
        }
        path.split('/').nth(2)
    }
}

impl TenantIdentifier for PathTenantIdentifier {
    fn identify(&self, request: &RequestContext) -> Option<TenantId> {
        Self::extract_tenant_segment(request.path()).map(TenantId::new)
    }

    fn strategy(&self) -> IdentificationStrategy {
        IdentificationStrategy::Path
    }
}
