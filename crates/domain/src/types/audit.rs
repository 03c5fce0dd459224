//! Audit trail view model

use serde::{Deserialize, Serialize};

/// One entry of the ERP's message log, shown on the audit page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: i64,
    pub date: String,
    /// Who made the change, "—" when the ERP recorded no author.
    pub author: String,
    /// Technical model the change touched (e.g. "res.partner").
    pub model: String,
    /// Display name of the touched record.
    pub res_name: String,
    /// HTML body describing the change.
    pub body: String,
}
