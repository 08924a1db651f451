//! Tenant records and identity.
//!
//! - [`TenantId`] - Opaque, stable tenant identity
//! - [`TenantStatus`] - Lifecycle state
//! - [`Tenant`] - The record the repository owns
//!
//! # Examples
//!
//! ```
//! use tenancy_persistence::tenant::{Tenant, TenantId, TenantStatus};
//!
//! let tenant = Tenant::new(TenantId::generate(), "Acme Corp");
//! assert_eq!(tenant.status, TenantStatus::Provisioning);
//! ```

mod id;
mod record;
mod status;

pub use id::{TENANT_ID_PREFIX, TenantId};
pub use record::Tenant;
pub use status::TenantStatus;
