// ABOUTME: Library root for depstat - deployment status lookups over a key-value store.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod deployment;
pub mod error;
pub mod store;
pub mod types;
