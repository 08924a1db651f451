//! Axum extractors for the tenancy REST API.
//!
//! - [`ResolvedTenant`] - The tenant identified by the middleware
//! - [`JsonBody`] - JSON bodies with API-style rejections

mod json;
mod tenant;

pub use json::JsonBody;
pub use tenant::ResolvedTenant;
