//! The control plane facade.

use std::sync::Arc;

use tenancy_persistence::backends::memory::InMemoryTenantStore;
use tenancy_persistence::capability::{Capability, CapabilityType, ResourceQuota};
use tenancy_persistence::core::TenantStore;
use tenancy_persistence::error::IdentificationError;
use tenancy_persistence::tenant::{Tenant, TenantId};
use tenancy_persistence::ControlPlaneResult;
use tracing::debug;

use crate::identification::{RequestContext, TenantContext, TenantResolver};
use crate::service::{CapabilityService, TenantService};

/// Everything the boundary layer calls into.
///
/// Combines the lifecycle service, the capability service and the resolver
/// over a single store. Cloning is cheap and every clone shares the same
/// state, so one instance can be handed to each request handler.
///
/// # Example
///
/// ```
/// use tenancy_control::ControlPlane;
/// use tenancy_control::identification::{IdentificationStrategy, RequestContext};
/// use tenancy_persistence::capability::CapabilityType;
///
/// let plane = ControlPlane::in_memory();
/// let tenant = plane.onboard_tenant("Acme");
/// plane.activate_tenant(&tenant.id).unwrap();
/// plane
///     .provision_capability(&tenant.id, CapabilityType::ApiCalls, "api", 10_000)
///     .unwrap();
/// plane.register_api_key(tenant.id.clone(), "k1");
///
/// let request = RequestContext::new("localhost", "/api/v1/authorize").with_header("X-Api-Key", "k1");
/// let ctx = plane.resolve(&request).unwrap();
/// assert_eq!(ctx.strategy, IdentificationStrategy::ApiKey);
/// assert!(plane.authorize_request(&ctx.tenant_id, "api", 500));
/// ```
pub struct ControlPlane<S = InMemoryTenantStore> {
    store: Arc<S>,
    tenants: TenantService<S>,
    capabilities: CapabilityService<S>,
    resolver: Arc<TenantResolver>,
}

impl<S> Clone for ControlPlane<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            tenants: self.tenants.clone(),
            capabilities: self.capabilities.clone(),
            resolver: Arc::clone(&self.resolver),
        }
    }
}

impl ControlPlane<InMemoryTenantStore> {
    /// Creates a control plane over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTenantStore::new()))
    }
}

impl<S: TenantStore> ControlPlane<S> {
    /// Creates a control plane over `store` with empty registries.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_resolver(store, TenantResolver::default())
    }

    /// Creates a control plane over `store` using the given resolver.
    pub fn with_resolver(store: Arc<S>, resolver: TenantResolver) -> Self {
        debug!(backend = store.backend_name(), "Building control plane");
        Self {
            tenants: TenantService::new(Arc::clone(&store)),
            capabilities: CapabilityService::new(Arc::clone(&store)),
            resolver: Arc::new(resolver),
            store,
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Returns the resolver.
    pub fn resolver(&self) -> &TenantResolver {
        &self.resolver
    }

    // Tenants

    /// Creates a tenant in `Provisioning` status.
    pub fn onboard_tenant(&self, name: impl Into<String>) -> Tenant {
        self.tenants.create_tenant(name)
    }

    /// Activates a tenant.
    pub fn activate_tenant(&self, tenant_id: &TenantId) -> ControlPlaneResult<()> {
        self.tenants.activate_tenant(tenant_id)
    }

    /// Suspends a tenant.
    pub fn suspend_tenant(&self, tenant_id: &TenantId) -> ControlPlaneResult<()> {
        self.tenants.suspend_tenant(tenant_id)
    }

    /// Returns a tenant.
    pub fn get_tenant(&self, tenant_id: &TenantId) -> ControlPlaneResult<Tenant> {
        self.tenants.get_tenant(tenant_id)
    }

    /// Returns every tenant, in no particular order.
    pub fn list_tenants(&self) -> Vec<Tenant> {
        self.tenants.list_tenants()
    }

    // Capabilities

    /// Grants a capability to an active tenant.
    pub fn provision_capability(
        &self,
        tenant_id: &TenantId,
        capability_type: CapabilityType,
        name: impl Into<String>,
        max_limit: u64,
    ) -> ControlPlaneResult<Capability> {
        self.capabilities
            .enable_capability(tenant_id, capability_type, name, max_limit)
    }

    /// Returns the tenant's capabilities.
    pub fn get_capabilities(&self, tenant_id: &TenantId) -> Vec<Capability> {
        self.capabilities.get_capabilities(tenant_id)
    }

    /// Decides whether the tenant may consume `units` of a capability.
    ///
    /// Requires an active tenant and room in the quota. Unknown tenants and
    /// capabilities are a plain `false`, never an error.
    pub fn authorize_request(&self, tenant_id: &TenantId, capability: &str, units: u64) -> bool {
        let Some(tenant) = self.store.find_by_id(tenant_id) else {
            debug!(tenant_id = %tenant_id, "Authorization denied: unknown tenant");
            return false;
        };

        if !tenant.is_active() {
            debug!(tenant_id = %tenant_id, status = %tenant.status, "Authorization denied: tenant not active");
            return false;
        }

        self.capabilities.check_quota(tenant_id, capability, units)
    }

    /// Sets the absolute usage of a capability.
    pub fn record_usage(
        &self,
        tenant_id: &TenantId,
        capability: &str,
        usage: u64,
    ) -> ControlPlaneResult<ResourceQuota> {
        self.capabilities.update_usage(tenant_id, capability, usage)
    }

    // Identification

    /// Identifies the tenant of a request.
    pub fn resolve(&self, request: &RequestContext) -> Option<TenantContext> {
        self.resolver.resolve(request)
    }

    /// Identifies the tenant of a request, failing with `Unresolved`.
    pub fn require_tenant(&self, request: &RequestContext) -> ControlPlaneResult<TenantContext> {
        self.resolve(request)
            .ok_or_else(|| IdentificationError::Unresolved.into())
    }

    /// Registers an API key for a tenant.
    pub fn register_api_key(&self, tenant_id: TenantId, api_key: impl Into<String>) {
        self.resolver.register_api_key(tenant_id, api_key);
    }

    /// Registers a subdomain label for a tenant.
    pub fn register_subdomain(&self, tenant_id: TenantId, subdomain: impl Into<String>) {
        self.resolver.register_subdomain(tenant_id, subdomain);
    }

    /// Registers a custom domain for a tenant.
    pub fn register_custom_domain(&self, tenant_id: TenantId, domain: impl Into<String>) {
        self.resolver.register_custom_domain(tenant_id, domain);
    }
}

impl Default for ControlPlane<InMemoryTenantStore> {
    fn default() -> Self {
        Self::in_memory()
    }
}
