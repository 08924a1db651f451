//! Error types for the tenancy control plane.
//!
//! Errors are grouped by what they concern: tenants, capabilities, request
//! identification and input validation. [`ControlPlaneError`] wraps each
//! group. None of them is fatal; every error is a value handed back to the
//! caller, and the engine never retries on its own.
//!
//! Disabled capabilities and exhausted quotas are not errors. They surface
//! as a `false` authorization outcome.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::tenant::{TenantId, TenantStatus};

/// The primary error type for control plane operations.
#[derive(Error, Debug)]
pub enum ControlPlaneError {
    /// Tenant lookup and lifecycle errors
    #[error(transparent)]
    Tenant(#[from] TenantError),

    /// Capability lookup errors
    #[error(transparent)]
    Capability(#[from] CapabilityError),

    /// Request identification errors
    #[error(transparent)]
    Identification(#[from] IdentificationError),

    /// Input validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors related to tenants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TenantError {
    /// The referenced tenant does not exist.
    #[error("tenant not found: {tenant_id}")]
    NotFound { tenant_id: TenantId },

    /// The operation requires an active tenant.
    #[error("tenant must be active: {tenant_id} is {status}")]
    NotActive {
        tenant_id: TenantId,
        status: TenantStatus,
    },
}

/// Errors related to capabilities.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    /// The tenant holds no capability with this name.
    #[error("capability not found: {name} (tenant {tenant_id})")]
    NotFound { tenant_id: TenantId, name: String },
}

/// Errors raised while identifying the tenant of a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentificationError {
    /// No identification strategy matched the request.
    #[error("tenant identification failed")]
    Unresolved,
}

/// Errors raised while parsing closed enumerations from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown capability type: {value}")]
    UnknownCapabilityType { value: String },
}

impl ControlPlaneError {
    /// Returns `true` if a referenced tenant or capability does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ControlPlaneError::Tenant(TenantError::NotFound { .. })
                | ControlPlaneError::Capability(CapabilityError::NotFound { .. })
        )
    }

    /// Returns `true` if the operation is invalid for the tenant's current status.
    pub fn is_precondition_failed(&self) -> bool {
        matches!(
            self,
            ControlPlaneError::Tenant(TenantError::NotActive { .. })
        )
    }

    /// Returns `true` if no identification strategy matched.
    pub fn is_unresolved(&self) -> bool {
        matches!(
            self,
            ControlPlaneError::Identification(IdentificationError::Unresolved)
        )
    }
}

/// Result type alias for control plane operations.
pub type ControlPlaneResult<T> = Result<T, ControlPlaneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenant_not_found_display() {
        let err = TenantError::NotFound {
            tenant_id: TenantId::new("tenant-0a1b2c3d"),
        };
        assert_eq!(err.to_string(), "tenant not found: tenant-0a1b2c3d");
    }

    #[test]
    fn test_not_active_display() {
        let err = TenantError::NotActive {
            tenant_id: TenantId::new("acme"),
            status: TenantStatus::Provisioning,
        };
        let msg = err.to_string();
        assert!(msg.contains("tenant must be active"));
        assert!(msg.contains("PROVISIONING"));
    }

    #[test]
    fn test_classifiers() {
        let not_found: ControlPlaneError = TenantError::NotFound {
            tenant_id: TenantId::new("x"),
        }
        .into();
        assert!(not_found.is_not_found());
        assert!(!not_found.is_precondition_failed());

        let cap_missing: ControlPlaneError = CapabilityError::NotFound {
            tenant_id: TenantId::new("x"),
            name: "storage".to_string(),
        }
        .into();
        assert!(cap_missing.is_not_found());

        let inactive: ControlPlaneError = TenantError::NotActive {
            tenant_id: TenantId::new("x"),
            status: TenantStatus::Suspended,
        }
        .into();
        assert!(inactive.is_precondition_failed());
        assert!(!inactive.is_not_found());

        let unresolved: ControlPlaneError = IdentificationError::Unresolved.into();
        assert!(unresolved.is_unresolved());
        assert_eq!(unresolved.to_string(), "tenant identification failed");
    }
}
