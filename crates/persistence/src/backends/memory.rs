//! In-memory tenant store.
//!
//! Keeps tenants and capabilities in process memory behind a single
//! reader/writer lock. Nothing survives a restart.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::trace;

use crate::capability::{Capability, ResourceQuota};
use crate::core::TenantStore;
use crate::tenant::{Tenant, TenantId};

/// Both maps sit under one lock so that `save` can touch them together.
#[derive(Debug, Default)]
struct StoreState {
    tenants: HashMap<TenantId, Tenant>,
    capabilities: HashMap<TenantId, Vec<Capability>>,
}

/// A [`TenantStore`] backed by hash maps.
#[derive(Debug, Default)]
pub struct InMemoryTenantStore {
    state: RwLock<StoreState>,
}

impl InMemoryTenantStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tenants held.
    pub fn tenant_count(&self) -> usize {
        self.state.read().tenants.len()
    }
}

impl TenantStore for InMemoryTenantStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn save(&self, tenant: Tenant) {
        let mut state = self.state.write();
        trace!(tenant_id = %tenant.id, status = %tenant.status, "Saving tenant");
        state.capabilities.entry(tenant.id.clone()).or_default();
        state.tenants.insert(tenant.id.clone(), tenant);
    }

    fn insert_new(&self, tenant: Tenant) -> bool {
        let mut state = self.state.write();
        if state.tenants.contains_key(&tenant.id) {
            trace!(tenant_id = %tenant.id, "Tenant identity already taken");
            return false;
        }
        state.capabilities.insert(tenant.id.clone(), Vec::new());
        state.tenants.insert(tenant.id.clone(), tenant);
        true
    }

    fn find_by_id(&self, tenant_id: &TenantId) -> Option<Tenant> {
        self.state.read().tenants.get(tenant_id).cloned()
    }

    fn find_all(&self) -> Vec<Tenant> {
        self.state.read().tenants.values().cloned().collect()
    }

    fn add_capability(&self, tenant_id: &TenantId, capability: Capability) {
        let mut state = self.state.write();
        trace!(tenant_id = %tenant_id, capability = %capability.name, "Adding capability");
        state
            .capabilities
            .entry(tenant_id.clone())
            .or_default()
            .push(capability);
    }

    fn get_capabilities(&self, tenant_id: &TenantId) -> Vec<Capability> {
        self.state
            .read()
            .capabilities
            .get(tenant_id)
            .cloned()
            .unwrap_or_default()
    }

    fn find_capability(&self, tenant_id: &TenantId, name: &str) -> Option<Capability> {
        self.state
            .read()
            .capabilities
            .get(tenant_id)?
            .iter()
            .find(|c| c.name == name)
            .cloned()
    }

    fn set_usage(&self, tenant_id: &TenantId, name: &str, usage: u64) -> Option<ResourceQuota> {
        let mut state = self.state.write();
        let capability = state
            .capabilities
            .get_mut(tenant_id)?
            .iter_mut()
            .find(|c| c.name == name)?;
        capability.quota.current_usage = usage;
        Some(capability.quota.clone())
    }
}
