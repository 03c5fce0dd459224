//! Audit trail accessor

use kivu_domain::{AuditLog, Record};

use crate::ports::{Clause, ErpGateway, DEFAULT_LIMIT};

pub const MODEL: &str = "mail.message";

const FIELDS: &[&str] = &["id", "date", "author_id", "model", "record_name", "body"];

/// Tracking notifications across all models, newest first as returned by
/// the ERP.
pub async fn all_audit_logs(gateway: &dyn ErpGateway) -> Vec<AuditLog> {
    gateway
        .search_read(
            MODEL,
            FIELDS,
            vec![Clause::eq("message_type", "notification")],
            DEFAULT_LIMIT,
        )
        .await
        .iter()
        .map(map_audit_log)
        .collect()
}

pub fn map_audit_log(record: &Record) -> AuditLog {
    AuditLog {
        id: record.id(),
        date: record.str_or("date", ""),
        author: record.reference("author_id").display_label(),
        model: record.str_or("model", ""),
        res_name: record.str_or("record_name", ""),
        body: record.str_or("body", ""),
    }
}
