//! Reports page view models
//!
//! All report figures are computed client-side from raw invoice and site
//! records; the ERP stores none of these aggregates.

use serde::{Deserialize, Serialize};

/// Income vs. expense for one month, keyed "YYYY-MM".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: String,
    pub revenue: f64,
    pub expense: f64,
}

/// Number of sites in one province.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneOccupancy {
    pub name: String,
    pub count: u32,
}

/// Revenue attributed to one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteRevenue {
    pub name: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub revenue_by_month: Vec<MonthlyRevenue>,
    pub occupancy_by_zone: Vec<ZoneOccupancy>,
    pub top_sites: Vec<SiteRevenue>,
}
