//! Maintenance ticket view models

use serde::{Deserialize, Serialize};

/// Kanban column for a ticket. The ERP models stages as referenced records
/// with free-form names; the mapper folds the stage label into these three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStage {
    #[default]
    New,
    Progress,
    Done,
}

impl TicketStage {
    /// Fold a stage label into a dashboard column. Unknown labels land in
    /// "new" so a freshly configured helpdesk still renders.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("done") || label.contains("solved") || label.contains("closed") {
            Self::Done
        } else if label.contains("progress") {
            Self::Progress
        } else {
            Self::New
        }
    }
}

/// ERP star priority, "0" (none) through "3" (urgent).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TicketPriority {
    #[default]
    #[serde(rename = "0")]
    None,
    #[serde(rename = "1")]
    Low,
    #[serde(rename = "2")]
    High,
    #[serde(rename = "3")]
    Urgent,
}

impl TicketPriority {
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "1" => Self::Low,
            "2" => Self::High,
            "3" => Self::Urgent,
            _ => Self::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub name: String,
    /// Who raised the ticket, "—" when unset.
    pub partner_name: String,
    /// Which site it concerns, "—" when unset.
    pub site_name: String,
    pub stage: TicketStage,
    pub priority: TicketPriority,
    pub description: String,
    pub create_date: String,
}
