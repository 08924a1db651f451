//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test server over an in-memory control plane
//! - [`assertions`] - HTTP response assertions

#![allow(dead_code)]

pub mod assertions;
pub mod harness;
