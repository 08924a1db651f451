//! Tenant resolution across all identification strategies.
//!
//! Provides the [`TenantResolver`], which tries each strategy in the fixed
//! order of [`IdentificationStrategy::RESOLUTION_ORDER`] and stops at the
//! first match.

use tenancy_persistence::tenant::TenantId;
use tracing::{debug, trace};

use super::context::TenantContext;
use super::identifiers::{
    ApiKeyTenantIdentifier, CustomDomainTenantIdentifier, HeaderTenantIdentifier,
    PathTenantIdentifier, SubdomainTenantIdentifier, TenantIdentifier,
};
use super::jwt::JwtClaimTenantIdentifier;
use super::registry::Registries;
use super::request::RequestContext;
use super::strategy::IdentificationStrategy;

/// Resolves the tenant of a request.
///
/// The resolver itself takes no locks; the keyed identifiers lock their
/// registries internally. Registration may therefore happen at any time,
/// including while other threads are resolving.
#[derive(Debug)]
pub struct TenantResolver {
    header: HeaderTenantIdentifier,
    jwt: JwtClaimTenantIdentifier,
    api_key: ApiKeyTenantIdentifier,
    custom_domain: CustomDomainTenantIdentifier,
    subdomain: SubdomainTenantIdentifier,
    path: PathTenantIdentifier,
}

impl TenantResolver {
    /// Creates a resolver reading the given registries.
    pub fn new(registries: Registries) -> Self {
        Self {
            header: HeaderTenantIdentifier,
            jwt: JwtClaimTenantIdentifier,
            api_key: ApiKeyTenantIdentifier::new(registries.api_keys),
            custom_domain: CustomDomainTenantIdentifier::new(registries.custom_domains),
            subdomain: SubdomainTenantIdentifier::new(registries.subdomains),
            path: PathTenantIdentifier,
        }
    }

    /// Returns the strategies in the order they are tried.
    pub fn resolution_order(&self) -> &'static [IdentificationStrategy] {
        &IdentificationStrategy::RESOLUTION_ORDER
    }

    fn identifier(&self, strategy: IdentificationStrategy) -> &dyn TenantIdentifier {
        match strategy {
            IdentificationStrategy::Header => &self.header,
            IdentificationStrategy::JwtClaim => &self.jwt,
            IdentificationStrategy::ApiKey => &self.api_key,
            IdentificationStrategy::CustomDomain => &self.custom_domain,
            IdentificationStrategy::Subdomain => &self.subdomain,
            IdentificationStrategy::Path => &self.path,
        }
    }

    /// Resolves the tenant from the request.
    ///
    /// Returns the first match in resolution order, or `None` when every
    /// strategy misses.
    pub fn resolve(&self, request: &RequestContext) -> Option<TenantContext> {
        for &strategy in self.resolution_order() {
            match self.identifier(strategy).identify(request) {
                Some(tenant_id) => {
                    debug!(tenant_id = %tenant_id, strategy = %strategy, "Resolved tenant");
                    return Some(TenantContext::new(tenant_id, strategy));
                }
                None => trace!(strategy = %strategy, "Strategy did not match"),
            }
        }

        debug!(host = %request.host(), path = %request.path(), "No strategy identified a tenant");
        None
    }

    /// Registers an API key for a tenant.
    pub fn register_api_key(&self, tenant_id: TenantId, api_key: impl Into<String>) {
        if let Some(previous) = self.api_key.register(tenant_id.clone(), api_key) {
            debug!(previous = %previous, tenant_id = %tenant_id, "API key reassigned");
        }
    }

    /// Registers a subdomain label for a tenant.
    pub fn register_subdomain(&self, tenant_id: TenantId, subdomain: impl Into<String>) {
        if let Some(previous) = self.subdomain.register(tenant_id.clone(), subdomain) {
            debug!(previous = %previous, tenant_id = %tenant_id, "Subdomain reassigned");
        }
    }

    /// Registers a custom domain for a tenant.
    pub fn register_custom_domain(&self, tenant_id: TenantId, domain: impl Into<String>) {
        if let Some(previous) = self.custom_domain.register(tenant_id.clone(), domain) {
            debug!(previous = %previous, tenant_id = %tenant_id, "Custom domain reassigned");
        }
    }
}

impl Default for TenantResolver {
    fn default() -> Self {
        Self::new(Registries::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

    fn bearer_for(tenant: &str) -> String {
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"tenant_id":"{}"}}"#, tenant));
        format!("Bearer h.{}.s", payload)
    }

    /// Builds a request that every strategy would match, each with a
    /// different tenant.
    fn request_matching_everything(resolver: &TenantResolver) -> RequestContext {
        resolver.register_api_key(TenantId::new("from-api-key"), "k1");
        resolver.register_custom_domain(TenantId::new("from-domain"), "acme.platform.io");
        resolver.register_subdomain(TenantId::new("from-subdomain"), "acme");

        RequestContext::new("acme.platform.io", "/tenants/from-path")
            .with_header("X-Tenant-Id", "from-header")
            .with_header("Authorization", bearer_for("from-jwt"))
            .with_header("X-Api-Key", "k1")
    }

    #[test]
    fn test_header_beats_everything() {
        let resolver = TenantResolver::default();
        let request = request_matching_everything(&resolver);

        let resolved = resolver.resolve(&request).unwrap();
        assert_eq!(resolved.tenant_id_str(), "from-header");
        assert_eq!(resolved.strategy, IdentificationStrategy::Header);
    }

    #[test]
    fn test_precedence_chain() {
        let resolver = TenantResolver::default();
        resolver.register_api_key(TenantId::new("from-api-key"), "k1");
        resolver.register_custom_domain(TenantId::new("from-domain"), "acme.platform.io");
        resolver.register_subdomain(TenantId::new("from-subdomain"), "acme");

        let jwt = RequestContext::new("acme.platform.io", "/tenants/from-path")
            .with_header("Authorization", bearer_for("from-jwt"))
            .with_header("X-Api-Key", "k1");
        assert_eq!(resolver.resolve(&jwt).unwrap().strategy, IdentificationStrategy::JwtClaim);

        let api_key =
            RequestContext::new("acme.platform.io", "/tenants/from-path").with_header("X-Api-Key", "k1");
        assert_eq!(resolver.resolve(&api_key).unwrap().strategy, IdentificationStrategy::ApiKey);

        let domain = RequestContext::new("acme.platform.io", "/tenants/from-path");
        let resolved = resolver.resolve(&domain).unwrap();
        assert_eq!(resolved.strategy, IdentificationStrategy::CustomDomain);
        assert_eq!(resolved.tenant_id_str(), "from-domain");

        let subdomain = RequestContext::new("acme.other.io", "/tenants/from-path");
        let resolved = resolver.resolve(&subdomain).unwrap();
        assert_eq!(resolved.strategy, IdentificationStrategy::Subdomain);
        assert_eq!(resolved.tenant_id_str(), "from-subdomain");

        let path = RequestContext::new("platform.io", "/tenants/from-path");
        let resolved = resolver.resolve(&path).unwrap();
        assert_eq!(resolved.strategy, IdentificationStrategy::Path);
        assert_eq!(resolved.tenant_id_str(), "from-path");
    }

    #[test]
    fn test_unregistered_api_key_falls_through() {
        let resolver = TenantResolver::default();
        let request = RequestContext::new("platform.io", "/tenants/acme").with_header("X-Api-Key", "nope");

        let resolved = resolver.resolve(&request).unwrap();
        assert_eq!(resolved.strategy, IdentificationStrategy::Path);
    }

    #[test]
    fn test_malformed_bearer_falls_through() {
        let resolver = TenantResolver::default();
        resolver.register_api_key(TenantId::new("acme"), "k1");
        let request = RequestContext::new("platform.io", "/")
            .with_header("Authorization", "Bearer not-a-jwt")
            .with_header("X-Api-Key", "k1");

        let resolved = resolver.resolve(&request).unwrap();
        assert_eq!(resolved.strategy, IdentificationStrategy::ApiKey);
        assert_eq!(resolved.tenant_id_str(), "acme");
    }

    #[test]
    fn test_unresolved() {
        let resolver = TenantResolver::default();
        let request = RequestContext::new("platform.io", "/api/v1/tenant");
        assert!(resolver.resolve(&request).is_none());
    }

    #[test]
    fn test_shared_registries() {
        let registries = Registries::new();
        let resolver = TenantResolver::new(registries.clone());

        registries.api_keys.register("k9", TenantId::new("acme"));
        let request = RequestContext::new("h", "/").with_header("X-Api-Key", "k9");
        assert_eq!(resolver.resolve(&request).unwrap().tenant_id_str(), "acme");
    }

    #[test]
    fn test_resolution_order() {
        let resolver = TenantResolver::default();
        assert_eq!(
            resolver.resolution_order(),
            &[
                IdentificationStrategy::Header,
                IdentificationStrategy::JwtClaim,
                IdentificationStrategy::ApiKey,
                IdentificationStrategy::CustomDomain,
                IdentificationStrategy::Subdomain,
                IdentificationStrategy::Path,
            ]
        );
    }
}
