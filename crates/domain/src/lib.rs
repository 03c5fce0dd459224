//! # Kivu Domain
//!
//! Business domain types and models for the Kivu ERP gateway.
//!
//! This crate contains:
//! - View-model types for every dashboard entity (Site, Invoice, Ticket, ...)
//! - The generic ERP record model and its wire-value conventions
//! - Domain error types and Result definitions
//! - Connection configuration structures
//!
//! ## Architecture
//! - No dependencies on other Kivu crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod record;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use record::*;
pub use types::*;
