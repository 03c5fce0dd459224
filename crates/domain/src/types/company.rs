//! Company directory view model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    /// VAT / tax identification number.
    pub vat: String,
    pub image: Option<String>,
    /// Derived from the ERP's supplier rank (> 0 means supplier).
    pub is_supplier: bool,
    /// Derived from the ERP's customer rank (> 0 means customer).
    pub is_customer: bool,
    pub tags: Vec<String>,
}
