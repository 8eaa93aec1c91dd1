//! Networking modules for the proxy HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the two proxy calls and `types` defines the wire schema,
//! including the parsed-bill result.

pub mod api;
pub mod types;
