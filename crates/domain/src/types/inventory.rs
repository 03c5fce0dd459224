//! Move-in / move-out inventory ("état des lieux") view models

use serde::{Deserialize, Serialize};

/// Direction of an inventory: tenant moving in or out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryKind {
    #[default]
    Incoming,
    Outgoing,
}

impl InventoryKind {
    /// Map the ERP's picking type code, defaulting to incoming.
    pub fn from_wire(code: &str) -> Self {
        match code {
            "outgoing" => Self::Outgoing,
            _ => Self::Incoming,
        }
    }
}

/// Lifecycle state of an inventory, collapsed from the ERP's richer
/// picking states into the three the dashboard shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryState {
    #[default]
    Draft,
    Confirm,
    Done,
}

impl InventoryState {
    pub fn from_wire(state: &str) -> Self {
        match state {
            "done" => Self::Done,
            "confirmed" | "assigned" | "confirm" => Self::Confirm,
            _ => Self::Draft,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub id: i64,
    /// Reference (e.g. "EDL/2024/005").
    pub name: String,
    pub date: String,
    /// The property concerned, empty when unset.
    pub site_name: String,
    /// The tenant, "—" when unset.
    pub partner_name: String,
    pub kind: InventoryKind,
    pub state: InventoryState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_wire_states() {
        assert_eq!(InventoryState::from_wire("draft"), InventoryState::Draft);
        assert_eq!(InventoryState::from_wire("waiting"), InventoryState::Draft);
        assert_eq!(InventoryState::from_wire("confirmed"), InventoryState::Confirm);
        assert_eq!(InventoryState::from_wire("assigned"), InventoryState::Confirm);
        assert_eq!(InventoryState::from_wire("done"), InventoryState::Done);
    }

    #[test]
    fn unknown_picking_code_defaults_to_incoming() {
        assert_eq!(InventoryKind::from_wire("outgoing"), InventoryKind::Outgoing);
        assert_eq!(InventoryKind::from_wire("internal"), InventoryKind::Incoming);
    }
}
