//! HTTP middleware for the tenancy REST API.
//!
//! - [`identification`] - Tenant identification for protected routes

pub mod identification;

pub use identification::{identification_middleware, request_context};
