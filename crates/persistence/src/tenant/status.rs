//! Tenant lifecycle status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a tenant.
///
/// ```text
/// Provisioning ──activate──▶ Active ◀──activate── Suspended
///                              │                      ▲
///                              └──────suspend─────────┘
/// ```
///
/// Every tenant starts in [`Provisioning`](Self::Provisioning). No operation
/// moves a tenant back to `Provisioning`, and no operation reaches
/// [`Inactive`](Self::Inactive); the variant exists so that stored records
/// and wire payloads using it still parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenantStatus {
    /// Created but not yet activated.
    Provisioning,
    /// Serving requests; capabilities may be provisioned.
    Active,
    /// Temporarily blocked; every authorization check fails.
    Suspended,
    /// Declared but unreachable through the lifecycle operations.
    Inactive,
}

impl TenantStatus {
    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TenantStatus::Provisioning => "PROVISIONING",
            TenantStatus::Active => "ACTIVE",
            TenantStatus::Suspended => "SUSPENDED",
            TenantStatus::Inactive => "INACTIVE",
        }
    }

    /// Returns `true` for [`TenantStatus::Active`].
    pub fn is_active(&self) -> bool {
        matches!(self, TenantStatus::Active)
    }
}

impl fmt::Display for TenantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(TenantStatus::Provisioning.to_string(), "PROVISIONING");
        assert_eq!(TenantStatus::Active.to_string(), "ACTIVE");
        assert_eq!(TenantStatus::Suspended.to_string(), "SUSPENDED");
        assert_eq!(TenantStatus::Inactive.to_string(), "INACTIVE");
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&TenantStatus::Provisioning).unwrap();
        assert_eq!(json, "\"PROVISIONING\"");
        let parsed: TenantStatus = serde_json::from_str("\"SUSPENDED\"").unwrap();
        assert_eq!(parsed, TenantStatus::Suspended);
    }

    #[test]
    fn test_is_active() {
        assert!(TenantStatus::Active.is_active());
        assert!(!TenantStatus::Provisioning.is_active());
        assert!(!TenantStatus::Suspended.is_active());
        assert!(!TenantStatus::Inactive.is_active());
    }
}
