//! Company directory accessor

use kivu_domain::{Company, Record};

use crate::ports::{Clause, ErpGateway, DEFAULT_LIMIT};

pub const MODEL: &str = "res.partner";

const FIELDS: &[&str] = &[
    "id",
    "name",
    "email",
    "phone",
    "website",
    "vat",
    "image_1920",
    "supplier_rank",
    "customer_rank",
    "category_id",
];

pub async fn all_companies(gateway: &dyn ErpGateway) -> Vec<Company> {
    gateway
        .search_read(MODEL, FIELDS, vec![Clause::eq("is_company", true)], DEFAULT_LIMIT)
        .await
        .iter()
        .map(map_company)
        .collect()
}

pub fn map_company(record: &Record) -> Company {
    Company {
        id: record.id(),
        name: record.str_or("name", ""),
        email: record.str_or("email", ""),
        phone: record.str_or("phone", ""),
        website: record.str_or("website", ""),
        vat: record.str_or("vat", ""),
        image: record.base64_or_none("image_1920"),
        is_supplier: record.i64_or("supplier_rank", 0) > 0,
        is_customer: record.i64_or("customer_rank", 0) > 0,
        tags: record.str_array("category_id"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_above_zero_set_roles() {
        let record = Record::new()
            .with("id", 9i64)
            .with("name", "SNELELEC Sprl")
            .with("supplier_rank", 2i64)
            .with("customer_rank", 0i64);

        let company = map_company(&record);

        assert!(company.is_supplier);
        assert!(!company.is_customer);
    }

    #[test]
    fn unset_ranks_mean_no_role() {
        let record = Record::new()
            .with("id", 9i64)
            .with("name", "TMB Bank")
            .with("supplier_rank", false)
            .with("customer_rank", false);

        let company = map_company(&record);

        assert!(!company.is_supplier);
        assert!(!company.is_customer);
        assert!(company.tags.is_empty());
    }
}
