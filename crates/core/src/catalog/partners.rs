//! Tenant/contact accessors

use kivu_domain::{Partner, Record};

use crate::ports::{Clause, ErpGateway};

pub const MODEL: &str = "res.partner";

const FIELDS: &[&str] = &["id", "name", "email", "phone", "function", "image_1920"];

/// Individual contacts (companies are served by the companies accessor).
pub async fn all_partners(gateway: &dyn ErpGateway) -> Vec<Partner> {
    gateway
        .search_read(MODEL, FIELDS, vec![Clause::eq("is_company", false)], 50)
        .await
        .iter()
        .map(map_partner)
        .collect()
}

pub async fn partner_by_id(gateway: &dyn ErpGateway, id: i64) -> Option<Partner> {
    gateway.read_one(MODEL, id, FIELDS).await.map(|r| map_partner(&r))
}

pub fn map_partner(record: &Record) -> Partner {
    Partner {
        id: record.id(),
        name: record.str_or("name", ""),
        email: record.str_or("email", ""),
        phone: record.str_or("phone", ""),
        job: record.str_or("function", ""),
        image: record.base64_or_none("image_1920"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_unset_contact_fields_to_empty_strings() {
        let record = Record::new()
            .with("id", 3i64)
            .with("name", "Jean Kabuya")
            .with("email", false)
            .with("phone", false)
            .with("function", false)
            .with("image_1920", false);

        let partner = map_partner(&record);

        assert_eq!(partner.name, "Jean Kabuya");
        assert_eq!(partner.email, "");
        assert_eq!(partner.phone, "");
        assert_eq!(partner.job, "");
        assert!(partner.image.is_none());
    }
}
