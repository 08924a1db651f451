//! Capabilities and their quotas.
//!
//! A [`Capability`] is a named, typed resource grant owned by one tenant. It
//! carries a [`ResourceQuota`] and a small typed [`CapabilityConfig`].
//!
//! Capability names are the lookup key within a tenant, but nothing here
//! enforces uniqueness: a tenant may end up holding two capabilities with the
//! same name, in which case lookups see the first one added.

mod config;
mod quota;

pub use config::{CapabilityConfig, ConfigValue};
pub use quota::{DEFAULT_QUOTA_UNIT, ResourceQuota};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The closed set of capability kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapabilityType {
    /// Object or block storage.
    Storage,
    /// Compute time.
    Compute,
    /// Outbound API calls.
    ApiCalls,
    /// Managed database.
    Database,
    /// Messaging / queues.
    Messaging,
}

impl CapabilityType {
    /// All capability types.
    pub const ALL: [CapabilityType; 5] = [
        CapabilityType::Storage,
        CapabilityType::Compute,
        CapabilityType::ApiCalls,
        CapabilityType::Database,
        CapabilityType::Messaging,
    ];

    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityType::Storage => "STORAGE",
            CapabilityType::Compute => "COMPUTE",
            CapabilityType::ApiCalls => "API_CALLS",
            CapabilityType::Database => "DATABASE",
            CapabilityType::Messaging => "MESSAGING",
        }
    }
}

impl fmt::Display for CapabilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CapabilityType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CapabilityType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownCapabilityType {
                value: s.to_string(),
            })
    }
}

/// A resource grant held by a tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capability {
    /// Kind of resource.
    #[serde(rename = "type")]
    pub capability_type: CapabilityType,
    /// User-chosen name, the lookup key within the tenant.
    pub name: String,
    /// Disabled capabilities never authorize.
    pub enabled: bool,
    /// Extra settings.
    #[serde(default)]
    pub config: CapabilityConfig,
    /// Limit and usage.
    pub quota: ResourceQuota,
}

impl Capability {
    /// Creates an enabled capability with zero usage against `max_limit`.
    pub fn new(capability_type: CapabilityType, name: impl Into<String>, max_limit: u64) -> Self {
        Self {
            capability_type,
            name: name.into(),
            enabled: true,
            config: CapabilityConfig::new(),
            quota: ResourceQuota::new(max_limit),
        }
    }

    /// Returns `true` if the capability is enabled and `requested` units fit.
    pub fn can_allocate(&self, requested: u64) -> bool {
        self.enabled && self.quota.can_allocate(requested)
    }
}
