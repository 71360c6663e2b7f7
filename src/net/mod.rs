//! Networking modules for the blog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs one HTTP call per backend operation, `error` is the shared
//! failure type, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
