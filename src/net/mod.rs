//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the transport port and endpoint helpers, `types` defines the
//! wire schema, and `error` the single request-failure type.

pub mod api;
pub mod error;
pub mod types;
