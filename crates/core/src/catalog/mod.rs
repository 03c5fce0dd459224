//! Per-entity accessors
//!
//! One module per dashboard entity. Each accessor issues a `search_read`
//! (or `read_one`) with a fixed field list and filter, then maps every raw
//! record into the entity's view model with the defaulting rules from
//! `kivu_domain::record`. Accessors are isolated from each other: a
//! misconfigured helpdesk module on the ERP side empties the tickets page
//! and nothing else.

pub mod audits;
pub mod calendar;
pub mod companies;
pub mod inventories;
pub mod invoices;
pub mod messaging;
pub mod partners;
pub mod recovery;
pub mod reports;
pub mod sites;
pub mod tickets;
