//! Storage backend implementations.
//!
//! | Backend | Description |
//! |---------|-------------|
//! | [`memory`] | Process-local hash maps behind a reader/writer lock |
//!
//! # Example
//!
//! ```
//! use tenancy_persistence::backends::memory::InMemoryTenantStore;
//! use tenancy_persistence::core::TenantStore;
//!
//! let store = InMemoryTenantStore::new();
//! assert_eq!(store.backend_name(), "memory");
//! ```

pub mod memory;
