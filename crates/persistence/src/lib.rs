//! Tenancy Control Plane Persistence Layer
//!
//! This crate holds the data model of the tenancy control plane and the
//! storage that backs it: tenants, the capabilities they are granted, and
//! the resource quotas attached to those capabilities.
//!
//! # Architecture
//!
//! - [`tenant`] - Tenant identity, lifecycle status and record
//! - [`capability`] - Capability types, quotas and typed configuration
//! - [`error`] - Error taxonomy shared by every layer above
//! - [`core`] - The [`TenantStore`](core::TenantStore) storage trait
//! - [`backends`] - Storage implementations
//!
//! # Durability
//!
//! The only backend keeps its state in process memory. Restarting the
//! process loses every tenant.
//!
//! # Quick Start
//!
//! ```
//! use tenancy_persistence::backends::memory::InMemoryTenantStore;
//! use tenancy_persistence::capability::{Capability, CapabilityType};
//! use tenancy_persistence::core::TenantStore;
//! use tenancy_persistence::tenant::{Tenant, TenantId, TenantStatus};
//!
//! let store = InMemoryTenantStore::new();
//!
//! let mut tenant = Tenant::new(TenantId::generate(), "Acme Corp");
//! tenant.status = TenantStatus::Active;
//! store.save(tenant.clone());
//!
//! store.add_capability(
//!     &tenant.id,
//!     Capability::new(CapabilityType::ApiCalls, "api", 10_000),
//! );
//!
//! let api = store.find_capability(&tenant.id, "api").unwrap();
//! assert!(api.quota.can_allocate(500));
//! ```

#![warn(missing_docs)]

pub mod backends;
pub mod capability;
pub mod core;
pub mod error;
pub mod tenant;

pub use error::{ControlPlaneError, ControlPlaneResult};
