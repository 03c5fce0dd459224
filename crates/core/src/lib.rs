//! # Kivu Core
//!
//! Pure gateway logic - no transport dependencies.
//!
//! This crate contains:
//! - The [`ErpGateway`] port every entity accessor is built on
//! - Per-entity accessors and record-to-view-model mappers
//! - The generic save/delete write actions
//!
//! ## Architecture Principles
//! - Only depends on `kivu-domain`
//! - No HTTP or wire-protocol code
//! - All external dependencies via traits
//!
//! ## Failure policy
//! Reads fail open: an accessor resolves to an empty list (or `None`) so a
//! dashboard page never crashes solely because the ERP is unreachable. The
//! port signatures make this visible - read operations return plain values,
//! write operations return `Result`. Writes fail loud and are normalized
//! into an [`actions::ActionOutcome`] at the action boundary.

pub mod actions;
pub mod catalog;
pub mod ports;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export specific items to avoid ambiguity
pub use actions::{delete_record, save_record, ActionOutcome};
pub use ports::{CacheInvalidator, Clause, Domain, ErpGateway, NoopInvalidator, DEFAULT_LIMIT};
