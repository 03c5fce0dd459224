//! Maintenance ticket accessor
//!
//! Served by the ERP's helpdesk module, which may simply not be installed;
//! in that case the read fails, the accessor resolves to an empty board and
//! the rest of the dashboard is unaffected.

use kivu_domain::{Record, Ticket, TicketPriority, TicketStage};

use crate::ports::{ErpGateway, DEFAULT_LIMIT};

pub const MODEL: &str = "helpdesk.ticket";

const FIELDS: &[&str] = &[
    "id",
    "name",
    "partner_id",
    "x_studio_site",
    "stage_id",
    "priority",
    "description",
    "create_date",
];

pub async fn all_tickets(gateway: &dyn ErpGateway) -> Vec<Ticket> {
    gateway
        .search_read(MODEL, FIELDS, Vec::new(), DEFAULT_LIMIT)
        .await
        .iter()
        .map(map_ticket)
        .collect()
}

pub fn map_ticket(record: &Record) -> Ticket {
    let stage = record.reference("stage_id");
    Ticket {
        id: record.id(),
        name: record.str_or("name", ""),
        partner_name: record.reference("partner_id").display_label(),
        site_name: record.reference("x_studio_site").display_label(),
        stage: TicketStage::from_label(&stage.label),
        priority: TicketPriority::from_wire(&record.str_or("priority", "0")),
        description: record.str_or("description", ""),
        create_date: record.str_or("create_date", ""),
    }
}

#[cfg(test)]
mod tests {
    use kivu_domain::FieldValue as FV;

    use super::*;

    fn relational(id: i64, label: &str) -> FV {
        FV::Array(vec![FV::Int(id), FV::Str(label.to_string())])
    }

    #[test]
    fn maps_ticket_with_stage_and_priority() {
        let record = Record::new()
            .with("id", 4i64)
            .with("name", "Fuite d'eau Cuisine")
            .with("partner_id", relational(3, "Jean Kabuya"))
            .with("x_studio_site", relational(12, "Apt A2"))
            .with("stage_id", relational(2, "In Progress"))
            .with("priority", "3")
            .with("create_date", "2024-05-01 08:00:00");

        let ticket = map_ticket(&record);

        assert_eq!(ticket.stage, TicketStage::Progress);
        assert_eq!(ticket.priority, TicketPriority::Urgent);
        assert_eq!(ticket.partner_name, "Jean Kabuya");
        assert_eq!(ticket.site_name, "Apt A2");
    }

    #[test]
    fn unset_stage_lands_in_new_column() {
        let record = Record::new().with("id", 4i64).with("stage_id", false);

        let ticket = map_ticket(&record);

        assert_eq!(ticket.stage, TicketStage::New);
        assert_eq!(ticket.priority, TicketPriority::None);
        assert_eq!(ticket.partner_name, "—");
    }
}
