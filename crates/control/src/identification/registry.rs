//! Key → tenant registries consulted by the keyed strategies.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tenancy_persistence::tenant::TenantId;

/// A lock-protected mapping from an exact key to a tenant.
///
/// Registration overwrites: the last tenant registered for a key wins.
/// Lookups may run concurrently with each other and with registration.
#[derive(Debug, Default)]
pub struct TenantRegistry {
    entries: RwLock<HashMap<String, TenantId>>,
}

impl TenantRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `key` to `tenant_id`, returning the tenant it previously mapped to.
    pub fn register(&self, key: impl Into<String>, tenant_id: TenantId) -> Option<TenantId> {
        self.entries.write().insert(key.into(), tenant_id)
    }

    /// Exact-match lookup.
    pub fn lookup(&self, key: &str) -> Option<TenantId> {
        self.entries.read().get(key).cloned()
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// The registries owned by a resolver.
///
/// Cloning shares the underlying registries, so a caller can keep a handle
/// and register keys after the resolver is built.
#[derive(Debug, Clone, Default)]
pub struct Registries {
    /// API key → tenant.
    pub api_keys: Arc<TenantRegistry>,
    /// Custom domain → tenant.
    pub custom_domains: Arc<TenantRegistry>,
    /// Subdomain label → tenant.
    pub subdomains: Arc<TenantRegistry>,
}

impl Registries {
    /// Creates a set of empty registries.
    pub fn new() -> Self {
        Self::default()
    }
}
