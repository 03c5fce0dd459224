//! Odoo-style ERP gateway

pub mod client;

pub use client::OdooClient;
