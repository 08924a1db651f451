//! The outcome of tenant identification.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tenancy_persistence::tenant::TenantId;

use super::strategy::IdentificationStrategy;

/// Per-request tenant identity produced by the resolver.
///
/// A context only says which tenant a request *claims* to belong to and how
/// that was worked out. It does not mean the tenant exists or is active;
/// authorization checks do that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantContext {
    /// The identified tenant.
    pub tenant_id: TenantId,
    /// The strategy that matched.
    pub strategy: IdentificationStrategy,
    /// Extra request-scoped annotations.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl TenantContext {
    /// Creates a context with empty metadata.
    pub fn new(tenant_id: TenantId, strategy: IdentificationStrategy) -> Self {
        Self {
            tenant_id,
            strategy,
            metadata: BTreeMap::new(),
        }
    }

    /// Adds a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Returns the tenant ID as a string reference.
    pub fn tenant_id_str(&self) -> &str {
        self.tenant_id.as_str()
    }
}
