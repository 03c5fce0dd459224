//! Site accessors
//!
//! Sites live in a studio-customized model, hence the `x_`-prefixed field
//! names. The province is a many-to-one whose id is kept alongside the
//! label because the site form needs it for selection.

use kivu_domain::{Province, Record, Site, SiteInput};

use crate::ports::{Clause, ErpGateway, DEFAULT_LIMIT};

pub const MODEL: &str = "x_sites";
pub const PROVINCE_MODEL: &str = "x_provinces";

const LIST_FIELDS: &[&str] = &[
    "id",
    "x_name",
    "x_studio_reference_1",
    "x_studio_ville",
    "x_studio_province_1",
    "x_studio_superficie",
    "x_studio_latitude_1",
    "x_studio_longitude_1",
    "x_studio_total_revenue",
];

const DETAIL_FIELDS: &[&str] = &[
    "id",
    "x_name",
    "x_studio_reference_1",
    "x_studio_ville",
    "x_studio_province_1",
    "x_studio_superficie",
    "x_studio_latitude_1",
    "x_studio_longitude_1",
    "x_studio_total_revenue",
    "x_avatar_image",
];

/// All sites, for the list, map and reports pages.
pub async fn all_sites(gateway: &dyn ErpGateway) -> Vec<Site> {
    gateway
        .search_read(MODEL, LIST_FIELDS, Vec::new(), DEFAULT_LIMIT)
        .await
        .iter()
        .map(map_site)
        .collect()
}

/// One site with its image, for the detail page.
pub async fn site_by_id(gateway: &dyn ErpGateway, id: i64) -> Option<Site> {
    gateway.read_one(MODEL, id, DETAIL_FIELDS).await.map(|r| map_site(&r))
}

/// Provinces for the site form's selector.
pub async fn all_provinces(gateway: &dyn ErpGateway) -> Vec<Province> {
    gateway
        .search_read(PROVINCE_MODEL, &["id", "x_name"], Vec::new(), DEFAULT_LIMIT)
        .await
        .iter()
        .map(|r| Province { id: r.id(), name: r.str_or("x_name", "") })
        .collect()
}

pub fn map_site(record: &Record) -> Site {
    let province = record.reference("x_studio_province_1");
    Site {
        id: record.id(),
        name: record.str_or("x_name", ""),
        ref_code: record.str_or("x_studio_reference_1", ""),
        city: record.str_or("x_studio_ville", ""),
        province: province.display_label(),
        province_id: province.id,
        surface: record.f64_or("x_studio_superficie", 0.0),
        latitude: record.str_or("x_studio_latitude_1", ""),
        longitude: record.str_or("x_studio_longitude_1", ""),
        total_revenue: record.f64_or("x_studio_total_revenue", 0.0),
        image: record.base64_or_none("x_avatar_image"),
    }
}

/// Write payload for the site creation form. An unselected province is sent
/// as `false`, the ERP's convention for clearing a many-to-one.
pub fn site_values(input: &SiteInput) -> Record {
    let mut values = Record::new()
        .with("x_name", input.name.as_str())
        .with("x_studio_reference_1", input.reference.as_str())
        .with("x_studio_ville", input.city.as_str())
        .with("x_studio_superficie", input.surface)
        .with("x_studio_latitude_1", input.latitude.as_str())
        .with("x_studio_longitude_1", input.longitude.as_str());

    if input.province_id > 0 {
        values.set("x_studio_province_1", input.province_id);
    } else {
        values.set("x_studio_province_1", false);
    }

    match &input.image_base64 {
        Some(image) => values.set("x_avatar_image", image.as_str()),
        None => values.set("x_avatar_image", false),
    };

    values
}

/// Convenience for callers that filter sites by province client-side.
pub fn province_filter(province_id: i64) -> Vec<Clause> {
    vec![Clause::eq("x_studio_province_1", province_id)]
}
