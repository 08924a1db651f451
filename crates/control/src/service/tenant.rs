//! Tenant lifecycle.

use std::sync::Arc;

use tenancy_persistence::core::TenantStore;
use tenancy_persistence::error::TenantError;
use tenancy_persistence::tenant::{Tenant, TenantId, TenantStatus};
use tenancy_persistence::ControlPlaneResult;
use tracing::{debug, info};

/// Creates tenants and moves them through their lifecycle.
///
/// ```text
/// Provisioning ──activate──▶ Active ◀──activate── Suspended
///                              │                     ▲
///                              └──────suspend────────┘
/// ```
///
/// Both transitions are unconditional and idempotent: suspending a tenant
/// that is still provisioning is allowed, as is activating an active one.
/// No operation leads back to `Provisioning` or into `Inactive`.
pub struct TenantService<S> {
    store: Arc<S>,
}

impl<S> Clone for TenantService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: TenantStore> TenantService<S> {
    /// Creates a service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Creates a tenant with a fresh identity in `Provisioning` status.
    ///
    /// A generated identity that is already taken is discarded and a new one
    /// drawn, so an existing tenant is never replaced.
    pub fn create_tenant(&self, name: impl Into<String>) -> Tenant {
        self.create_tenant_with(name, TenantId::generate)
    }

    fn create_tenant_with(
        &self,
        name: impl Into<String>,
        mut next_id: impl FnMut() -> TenantId,
    ) -> Tenant {
        let name = name.into();
        loop {
            let tenant = Tenant::new(next_id(), name.clone());
            if self.store.insert_new(tenant.clone()) {
                info!(tenant_id = %tenant.id, name = %tenant.name, "Tenant created");
                return tenant;
            }
            debug!(tenant_id = %tenant.id, "Generated tenant id collided, retrying");
        }
    }

    /// Sets the tenant's status to `Active`.
    pub fn activate_tenant(&self, tenant_id: &TenantId) -> ControlPlaneResult<()> {
        self.transition(tenant_id, TenantStatus::Active)?;
        info!(tenant_id = %tenant_id, "Tenant activated");
        Ok(())
    }

    /// Sets the tenant's status to `Suspended`.
    pub fn suspend_tenant(&self, tenant_id: &TenantId) -> ControlPlaneResult<()> {
        self.transition(tenant_id, TenantStatus::Suspended)?;
        info!(tenant_id = %tenant_id, "Tenant suspended");
        Ok(())
    }

    /// Returns the tenant, or `NotFound`.
    pub fn get_tenant(&self, tenant_id: &TenantId) -> ControlPlaneResult<Tenant> {
        self.store
            .find_by_id(tenant_id)
            .ok_or_else(|| not_found(tenant_id).into())
    }

    /// Returns every tenant, in no particular order.
    pub fn list_tenants(&self) -> Vec<Tenant> {
        self.store.find_all()
    }

    fn transition(&self, tenant_id: &TenantId, status: TenantStatus) -> ControlPlaneResult<()> {
        let mut tenant = self.get_tenant(tenant_id)?;
        tenant.status = status;
        self.store.save(tenant);
        Ok(())
    }
}

fn not_found(tenant_id: &TenantId) -> TenantError {
    TenantError::NotFound {
        tenant_id: tenant_id.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenancy_persistence::backends::memory::InMemoryTenantStore;
    use tenancy_persistence::capability::{Capability, CapabilityType};

    fn service() -> TenantService<InMemoryTenantStore> {
        TenantService::new(Arc::new(InMemoryTenantStore::new()))
    }

    #[test]
    fn test_create_tenant() {
        let service = service();
        let tenant = service.create_tenant("Acme");

        assert!(tenant.id.is_generated());
        assert_eq!(tenant.name, "Acme");
        assert_eq!(tenant.status, TenantStatus::Provisioning);
        assert_eq!(service.get_tenant(&tenant.id).unwrap(), tenant);
    }

    #[test]
    fn test_created_ids_are_distinct() {
        let service = service();
        let a = service.create_tenant("A");
        let b = service.create_tenant("A");
        assert_ne!(a.id, b.id);
        assert_eq!(service.list_tenants().len(), 2);
    }

    #[test]
    fn test_colliding_id_is_regenerated() {
        let service = service();
        let existing = service.create_tenant_with("Old", || TenantId::new("tenant-deadbeef"));
        service.activate_tenant(&existing.id).unwrap();
        service
            .store
            .add_capability(&existing.id, Capability::new(CapabilityType::Storage, "s", 10));

        let mut ids = vec![TenantId::new("tenant-0000beef"), TenantId::new("tenant-deadbeef")];
        let created = service.create_tenant_with("New", || ids.pop().unwrap());

        assert_eq!(created.id, TenantId::new("tenant-0000beef"));
        assert_eq!(created.status, TenantStatus::Provisioning);
        assert!(service.store.get_capabilities(&created.id).is_empty());

        let old = service.get_tenant(&existing.id).unwrap();
        assert_eq!(old.name, "Old");
        assert_eq!(old.status, TenantStatus::Active);
        assert_eq!(service.store.get_capabilities(&existing.id).len(), 1);
        assert_eq!(service.list_tenants().len(), 2);
    }

    #[test]
    fn test_activate_and_suspend() {
        let service = service();
        let tenant = service.create_tenant("Acme");

        service.activate_tenant(&tenant.id).unwrap();
        assert_eq!(service.get_tenant(&tenant.id).unwrap().status, TenantStatus::Active);

        service.suspend_tenant(&tenant.id).unwrap();
        assert_eq!(service.get_tenant(&tenant.id).unwrap().status, TenantStatus::Suspended);

        service.activate_tenant(&tenant.id).unwrap();
        assert_eq!(service.get_tenant(&tenant.id).unwrap().status, TenantStatus::Active);
    }

    #[test]
    fn test_suspend_from_provisioning() {
        let service = service();
        let tenant = service.create_tenant("Acme");
        service.suspend_tenant(&tenant.id).unwrap();
        assert_eq!(service.get_tenant(&tenant.id).unwrap().status, TenantStatus::Suspended);
    }

    #[test]
    fn test_transitions_preserve_record() {
        let service = service();
        let tenant = service.create_tenant("Acme");
        service.activate_tenant(&tenant.id).unwrap();

        let stored = service.get_tenant(&tenant.id).unwrap();
        assert_eq!(stored.name, tenant.name);
        assert_eq!(stored.created_at, tenant.created_at);
    }

    #[test]
    fn test_unknown_tenant() {
        let service = service();
        let missing = TenantId::new("tenant-missing");

        assert!(service.get_tenant(&missing).unwrap_err().is_not_found());
        assert!(service.activate_tenant(&missing).unwrap_err().is_not_found());
        assert!(service.suspend_tenant(&missing).unwrap_err().is_not_found());
        assert!(service.list_tenants().is_empty());
    }
}
