//! Debt recovery view models

use serde::{Deserialize, Serialize};

/// Severity bucket for an unpaid invoice, derived from how many days it is
/// overdue: more than 60 days is critical, more than 30 is medium,
/// everything else is low.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverdueLevel {
    #[default]
    Low,
    Medium,
    Critical,
}

impl OverdueLevel {
    pub fn from_days_overdue(days: i64) -> Self {
        if days > 60 {
            Self::Critical
        } else if days > 30 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// An unpaid, overdue invoice on the recovery board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryItem {
    pub id: i64,
    pub invoice_ref: String,
    pub partner_name: String,
    pub partner_phone: String,
    /// Due date as "YYYY-MM-DD".
    pub due_date: String,
    /// Amount still owed.
    pub amount_due: f64,
    pub days_overdue: i64,
    pub level: OverdueLevel,
}
