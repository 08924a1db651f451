//! Core tenant storage trait.
//!
//! This module defines the [`TenantStore`] trait, which owns every read and
//! write of tenant and capability records.

use crate::capability::{Capability, ResourceQuota};
use crate::tenant::{Tenant, TenantId};

/// Storage for tenants and the capabilities they hold.
///
/// Implementations must be safe to share between request-handling threads.
/// Reads may run concurrently with other reads; a write excludes every
/// other reader and writer of the same records. No operation performs I/O
/// or blocks indefinitely, so the trait is synchronous.
///
/// Records are handed out by value. A caller that wants to change a tenant
/// reads it, modifies the copy and passes it back to [`save`](Self::save).
///
/// # Example
///
/// ```
/// use tenancy_persistence::backends::memory::InMemoryTenantStore;
/// use tenancy_persistence::capability::{Capability, CapabilityType};
/// use tenancy_persistence::core::TenantStore;
/// use tenancy_persistence::tenant::{Tenant, TenantId};
///
/// let store = InMemoryTenantStore::new();
/// let tenant = Tenant::new(TenantId::new("tenant-0a1b2c3d"), "Acme");
/// store.save(tenant.clone());
///
/// store.add_capability(&tenant.id, Capability::new(CapabilityType::Storage, "storage", 1000));
/// let found = store.find_capability(&tenant.id, "storage").unwrap();
/// assert_eq!(found.quota.max_limit, 1000);
/// ```
pub trait TenantStore: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Inserts or replaces a tenant by identity.
    ///
    /// The first save of a tenant also creates its (empty) capability list;
    /// later saves leave the list untouched.
    fn save(&self, tenant: Tenant);

    /// Inserts a tenant whose identity is not taken yet.
    ///
    /// Returns `false`, leaving the store untouched, when a tenant with the
    /// same identity already exists. The check and the insert happen under
    /// one write.
    fn insert_new(&self, tenant: Tenant) -> bool;

    /// Looks up a tenant by identity.
    fn find_by_id(&self, tenant_id: &TenantId) -> Option<Tenant>;

    /// Returns every tenant, in no particular order.
    fn find_all(&self) -> Vec<Tenant>;

    /// Appends a capability to the tenant's list.
    ///
    /// Existing capabilities are never replaced or merged, even when one
    /// with the same name is already present.
    fn add_capability(&self, tenant_id: &TenantId, capability: Capability);

    /// Returns the tenant's capabilities in insertion order.
    ///
    /// Unknown tenants yield an empty list.
    fn get_capabilities(&self, tenant_id: &TenantId) -> Vec<Capability>;

    /// Returns the first capability of the tenant with the given name.
    fn find_capability(&self, tenant_id: &TenantId, name: &str) -> Option<Capability>;

    /// Overwrites `current_usage` of the first capability with the given name.
    ///
    /// Returns the quota as it stands after the write, or `None` when the
    /// tenant holds no such capability. The value is not checked against the
    /// limit.
    fn set_usage(&self, tenant_id: &TenantId, name: &str, usage: u64) -> Option<ResourceQuota>;
}
