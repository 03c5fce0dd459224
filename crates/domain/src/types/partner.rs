//! Partner (tenant/contact) view models

use serde::{Deserialize, Serialize};

/// An individual contact from the ERP partner table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Job position, empty when unset.
    pub job: String,
    pub image: Option<String>,
}

/// A province, used for site geolocation and the site creation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    pub id: i64,
    pub name: String,
}
