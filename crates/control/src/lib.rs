//! Tenancy Control Plane Engine
//!
//! This crate identifies which tenant a request belongs to and enforces the
//! per-tenant capability quotas that gate resource-consuming operations.
//!
//! # Architecture
//!
//! - [`identification`] - The six identification strategies and the
//!   [`TenantResolver`](identification::TenantResolver) that orders them
//! - [`service`] - Tenant lifecycle and capability/quota services
//! - [`ControlPlane`] - The facade the boundary layer calls into
//!
//! Identification and authorization are independent steps. Resolving a
//! request says which tenant it claims to be; [`ControlPlane::authorize_request`]
//! then checks that the tenant is active and has quota left.
//!
//! # Concurrency
//!
//! Every shared structure sits behind a reader/writer lock and no operation
//! performs I/O. A quota check and the usage write that follows it are two
//! separate calls, so concurrent callers can over-allocate.

#![warn(missing_docs)]

mod control_plane;
pub mod identification;
pub mod service;

pub use control_plane::ControlPlane;
pub use tenancy_persistence::{ControlPlaneError, ControlPlaneResult};
