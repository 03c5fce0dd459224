//! # Kivu Infrastructure
//!
//! Infrastructure implementation of the core gateway port.
//!
//! This crate contains:
//! - The XML-RPC wire codec (request serialization, response parsing)
//! - An HTTP client with bounded timeouts
//! - [`OdooClient`], the `ErpGateway` implementation for an Odoo-style ERP
//! - Environment-based configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `kivu-core`
//! - Depends on `kivu-domain` and `kivu-core`
//! - Contains all "impure" code (network I/O, process environment)

pub mod config;
pub mod errors;
pub mod http;
pub mod odoo;
pub mod xmlrpc;

// Re-export commonly used items
pub use config::load_from_env;
pub use errors::InfraError;
pub use http::HttpClient;
pub use odoo::OdooClient;
