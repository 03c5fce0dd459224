//! Finance accessor

use kivu_domain::{Invoice, InvoiceStatus, PaymentState, Record};

use crate::ports::{Clause, ErpGateway, DEFAULT_LIMIT};

pub const MODEL: &str = "account.move";

const FIELDS: &[&str] =
    &["id", "name", "partner_id", "invoice_date", "amount_total", "state", "payment_state"];

/// Customer invoices for the finance table.
pub async fn all_invoices(gateway: &dyn ErpGateway) -> Vec<Invoice> {
    gateway
        .search_read(
            MODEL,
            FIELDS,
            vec![Clause::eq("move_type", "out_invoice")],
            DEFAULT_LIMIT,
        )
        .await
        .iter()
        .map(map_invoice)
        .collect()
}

pub fn map_invoice(record: &Record) -> Invoice {
    Invoice {
        id: record.id(),
        name: record.str_or("name", ""),
        partner_name: record.reference("partner_id").display_label(),
        date: record.str_or("invoice_date", ""),
        amount: record.f64_or("amount_total", 0.0),
        status: InvoiceStatus::from_wire(&record.str_or("state", "")),
        payment_state: PaymentState::from_wire(&record.str_or("payment_state", "")),
    }
}
