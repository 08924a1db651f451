//! The tenant record.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::TenantId;
use super::status::TenantStatus;

/// A tenant as held by the repository.
///
/// Records are owned by the store; services read a copy, change it and save
/// it back. There is no delete operation, so a record lives as long as the
/// store does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    /// Stable identity, generated once.
    #[serde(rename = "tenant_id")]
    pub id: TenantId,
    /// Display name.
    pub name: String,
    /// Lifecycle status.
    pub status: TenantStatus,
    /// When the tenant was onboarded.
    pub created_at: DateTime<Utc>,
    /// Free-form string metadata.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl Tenant {
    /// Creates a tenant in [`TenantStatus::Provisioning`], timestamped now.
    pub fn new(id: TenantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: TenantStatus::Provisioning,
            created_at: Utc::now(),
            metadata: BTreeMap::new(),
        }
    }

    /// Adds a metadata entry, replacing any previous value for the key.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Returns `true` if the tenant is active.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
