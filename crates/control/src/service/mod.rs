//! Services over the tenant store.
//!
//! - [`TenantService`] - tenant creation and lifecycle transitions
//! - [`CapabilityService`] - capability provisioning, quota checks and usage

mod capability;
mod tenant;

pub use capability::CapabilityService;
pub use tenant::TenantService;
