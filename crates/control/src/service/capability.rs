//! Capability provisioning, quota checks and usage accounting.

use std::sync::Arc;

use tenancy_persistence::capability::{Capability, CapabilityType, ResourceQuota};
use tenancy_persistence::core::TenantStore;
use tenancy_persistence::error::{CapabilityError, TenantError};
use tenancy_persistence::tenant::TenantId;
use tenancy_persistence::ControlPlaneResult;
use tracing::{debug, info};

/// Grants capabilities to tenants and tracks usage against their quotas.
///
/// Checking a quota and recording usage are separate calls with nothing
/// holding them together. Two callers that both pass [`check_quota`]
/// before either records usage can jointly exceed the limit.
///
/// [`check_quota`]: CapabilityService::check_quota
pub struct CapabilityService<S> {
    store: Arc<S>,
}

impl<S> Clone for CapabilityService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: TenantStore> CapabilityService<S> {
    /// Creates a service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Grants a new, enabled capability with zero usage to an active tenant.
    ///
    /// An existing capability with the same name is left in place and the
    /// new one is appended after it; name lookups keep returning the older
    /// grant.
    pub fn enable_capability(
        &self,
        tenant_id: &TenantId,
        capability_type: CapabilityType,
        name: impl Into<String>,
        max_limit: u64,
    ) -> ControlPlaneResult<Capability> {
        let tenant = self
            .store
            .find_by_id(tenant_id)
            .ok_or_else(|| TenantError::NotFound {
                tenant_id: tenant_id.clone(),
            })?;

        if !tenant.is_active() {
            return Err(TenantError::NotActive {
                tenant_id: tenant.id,
                status: tenant.status,
            }
            .into());
        }

        let capability = Capability::new(capability_type, name, max_limit);
        self.store.add_capability(tenant_id, capability.clone());

        info!(
            tenant_id = %tenant_id,
            capability = %capability.name,
            capability_type = %capability_type,
            max_limit,
            "Capability provisioned"
        );
        Ok(capability)
    }

    /// Returns the tenant's capabilities; empty for unknown tenants.
    pub fn get_capabilities(&self, tenant_id: &TenantId) -> Vec<Capability> {
        self.store.get_capabilities(tenant_id)
    }

    /// Returns `true` if `requested` more units fit within the named
    /// capability's quota.
    ///
    /// Missing or disabled capabilities never fit. Nothing is reserved.
    pub fn check_quota(&self, tenant_id: &TenantId, name: &str, requested: u64) -> bool {
        match self.store.find_capability(tenant_id, name) {
            Some(capability) => {
                let allowed = capability.can_allocate(requested);
                if !allowed {
                    debug!(
                        tenant_id = %tenant_id,
                        capability = %name,
                        requested,
                        current_usage = capability.quota.current_usage,
                        max_limit = capability.quota.max_limit,
                        enabled = capability.enabled,
                        "Quota check denied"
                    );
                }
                allowed
            }
            None => {
                debug!(tenant_id = %tenant_id, capability = %name, "Quota check on unknown capability");
                false
            }
        }
    }

    /// Sets the capability's usage to `usage`.
    ///
    /// The value replaces the current counter; it is not added to it, and
    /// it is not checked against the limit.
    pub fn update_usage(
        &self,
        tenant_id: &TenantId,
        name: &str,
        usage: u64,
    ) -> ControlPlaneResult<ResourceQuota> {
        let quota = self
            .store
            .set_usage(tenant_id, name, usage)
            .ok_or_else(|| CapabilityError::NotFound {
                tenant_id: tenant_id.clone(),
                name: name.to_string(),
            })?;

        debug!(
            tenant_id = %tenant_id,
            capability = %name,
            current_usage = quota.current_usage,
            max_limit = quota.max_limit,
            "Usage recorded"
        );
        Ok(quota)
    }
}
