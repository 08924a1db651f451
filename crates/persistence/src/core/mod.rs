//! Core storage abstractions.
//!
//! - [`TenantStore`] - Tenant and capability storage used by the services
//!
//! Backends implementing the trait live in [`crate::backends`].

mod store;

pub use store::TenantStore;
