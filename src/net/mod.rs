//! Networking modules for the storefront API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against the external storefront server and
//! `types` defines the shared wire schema. All business logic lives behind
//! that API; this client only issues requests and renders results.

pub mod api;
pub mod types;
