//! Property site view models

use serde::{Deserialize, Serialize};

/// A managed property site as shown on the sites list, detail page and map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: i64,
    pub name: String,
    /// Internal reference (e.g. "REF-0042"), empty when unset.
    pub ref_code: String,
    pub city: String,
    /// Label of the province reference, "—" when unset.
    pub province: String,
    /// Id of the province reference, 0 when unset.
    pub province_id: i64,
    /// Surface in square meters.
    pub surface: f64,
    pub latitude: String,
    pub longitude: String,
    pub total_revenue: f64,
    /// Base64 photo, `None` when the site has no image.
    pub image: Option<String>,
}

/// Fields accepted by the site creation form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteInput {
    pub name: String,
    pub reference: String,
    pub city: String,
    /// Province id, 0 or negative meaning "not selected".
    pub province_id: i64,
    pub surface: f64,
    pub latitude: String,
    pub longitude: String,
    /// Base64 image payload, already stripped of any data-URL prefix.
    pub image_base64: Option<String>,
}
