//! Move-in/move-out inventory accessor

use kivu_domain::{Inventory, InventoryKind, InventoryState, Record};

use crate::ports::{ErpGateway, DEFAULT_LIMIT};

pub const MODEL: &str = "stock.picking";

const FIELDS: &[&str] =
    &["id", "name", "scheduled_date", "partner_id", "origin", "state", "picking_type_code"];

pub async fn all_inventories(gateway: &dyn ErpGateway) -> Vec<Inventory> {
    gateway
        .search_read(MODEL, FIELDS, Vec::new(), DEFAULT_LIMIT)
        .await
        .iter()
        .map(map_inventory)
        .collect()
}

pub fn map_inventory(record: &Record) -> Inventory {
    Inventory {
        id: record.id(),
        name: record.str_or("name", ""),
        date: record.str_or("scheduled_date", ""),
        site_name: record.str_or("origin", ""),
        partner_name: record.reference("partner_id").display_label(),
        kind: InventoryKind::from_wire(&record.str_or("picking_type_code", "")),
        state: InventoryState::from_wire(&record.str_or("state", "")),
    }
}
