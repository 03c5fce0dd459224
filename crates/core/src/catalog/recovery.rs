//! Debt recovery accessor
//!
//! The only real business rule in the gateway: overdue invoices are
//! bucketed by how late they are. Everything else on the board is a plain
//! projection of unpaid invoice records.

use chrono::{NaiveDate, Utc};
use kivu_domain::{OverdueLevel, Record, RecoveryItem};

use crate::ports::{Clause, ErpGateway, DEFAULT_LIMIT};

pub const MODEL: &str = "account.move";

const FIELDS: &[&str] = &[
    "id",
    "name",
    "partner_id",
    "partner_phone",
    "invoice_date_due",
    "amount_residual",
];

/// Unpaid invoices past their due date, bucketed by severity.
pub async fn overdue_invoices(gateway: &dyn ErpGateway) -> Vec<RecoveryItem> {
    overdue_invoices_at(gateway, Utc::now().date_naive()).await
}

/// Same as [`overdue_invoices`] with an explicit "today", for determinism
/// in tests.
pub async fn overdue_invoices_at(gateway: &dyn ErpGateway, today: NaiveDate) -> Vec<RecoveryItem> {
    let domain = vec![
        Clause::eq("move_type", "out_invoice"),
        Clause::eq("payment_state", "not_paid"),
        Clause::lt("invoice_date_due", today.format("%Y-%m-%d").to_string()),
    ];

    gateway
        .search_read(MODEL, FIELDS, domain, DEFAULT_LIMIT)
        .await
        .iter()
        .map(|r| map_recovery_item(r, today))
        .collect()
}

/// Whole days between the due date and `today`, as an absolute value.
///
/// The filter in [`overdue_invoices_at`] excludes not-yet-due invoices, so
/// in practice the difference is always positive. The absolute value means
/// this function reports a positive "days overdue" for a future due date
/// if it is ever called without that filter.
pub fn days_overdue(due_date: &str, today: NaiveDate) -> i64 {
    match NaiveDate::parse_from_str(due_date, "%Y-%m-%d") {
        Ok(due) => (today - due).num_days().abs(),
        Err(_) => 0,
    }
}

pub fn map_recovery_item(record: &Record, today: NaiveDate) -> RecoveryItem {
    let due_date = record.str_or("invoice_date_due", "");
    let days = days_overdue(&due_date, today);
    RecoveryItem {
        id: record.id(),
        invoice_ref: record.str_or("name", ""),
        partner_name: record.reference("partner_id").display_label(),
        partner_phone: record.str_or("partner_phone", ""),
        due_date,
        amount_due: record.f64_or("amount_residual", 0.0),
        days_overdue: days,
        level: OverdueLevel::from_days_overdue(days),
    }
}

#[cfg(test)]
mod tests {
    use kivu_domain::FieldValue as FV;

    use super::*;
    use crate::test_support::MockGateway;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn unpaid(id: i64, due: &str, amount: f64) -> Record {
        Record::new()
            .with("id", id)
            .with("name", format!("INV/2024/{id:03}"))
            .with("partner_id", FV::Array(vec![FV::Int(3), FV::Str("Jean Kabuya".into())]))
            .with("invoice_date_due", due)
            .with("amount_residual", amount)
    }

    #[test]
    fn level_boundaries_match_bucketing_rule() {
        // d = 30 -> low, d = 31 -> medium, d = 60 -> medium, d = 61 -> critical
        assert_eq!(map_recovery_item(&unpaid(1, "2024-05-02", 100.0), today()).level, OverdueLevel::Low);
        assert_eq!(map_recovery_item(&unpaid(2, "2024-05-01", 100.0), today()).level, OverdueLevel::Medium);
        assert_eq!(map_recovery_item(&unpaid(3, "2024-04-02", 100.0), today()).level, OverdueLevel::Medium);
        assert_eq!(map_recovery_item(&unpaid(4, "2024-04-01", 100.0), today()).level, OverdueLevel::Critical);
    }

    #[test]
    fn absolute_difference_also_counts_future_due_dates() {
        let item = map_recovery_item(&unpaid(5, "2024-06-11", 100.0), today());
        assert_eq!(item.days_overdue, 10);
        assert_eq!(item.level, OverdueLevel::Low);
    }

    #[test]
    fn unparseable_due_date_counts_as_zero_days() {
        let item = map_recovery_item(&unpaid(6, "not-a-date", 100.0), today());
        assert_eq!(item.days_overdue, 0);
        assert_eq!(item.level, OverdueLevel::Low);
    }

    #[tokio::test]
    async fn accessor_maps_and_buckets() {
        let gateway =
            MockGateway::new().with_records(MODEL, vec![unpaid(7, "2024-02-01", 12000.0)]);

        let items = overdue_invoices_at(&gateway, today()).await;

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].invoice_ref, "INV/2024/007");
        assert_eq!(items[0].amount_due, 12000.0);
        assert_eq!(items[0].days_overdue, 121);
        assert_eq!(items[0].level, OverdueLevel::Critical);
    }
}
