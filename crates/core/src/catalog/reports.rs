//! Reports page aggregation
//!
//! The ERP stores no aggregates; everything here is computed from raw
//! posted invoices and the site list. Two reads total, both fail-open, so
//! a broken finance module yields empty charts rather than a broken page.

use std::collections::BTreeMap;

use kivu_domain::{MonthlyRevenue, Record, ReportData, Site, SiteRevenue, ZoneOccupancy};

use crate::catalog::sites;
use crate::ports::{Clause, ErpGateway};

const INVOICE_MODEL: &str = "account.move";
const INVOICE_FIELDS: &[&str] = &["id", "invoice_date", "amount_total", "move_type"];

/// Months of revenue history shown on the dashboard.
const MONTHS_SHOWN: usize = 6;
/// Sites listed in the "top sites" ranking.
const TOP_SITES: usize = 5;

pub async fn report_data(gateway: &dyn ErpGateway) -> ReportData {
    let invoices = gateway
        .search_read(
            INVOICE_MODEL,
            INVOICE_FIELDS,
            vec![Clause::eq("state", "posted")],
            1000,
        )
        .await;
    let sites = sites::all_sites(gateway).await;

    ReportData {
        revenue_by_month: revenue_by_month(&invoices),
        occupancy_by_zone: occupancy_by_zone(&sites),
        top_sites: top_sites(&sites),
    }
}

/// Income vs. expense per month, oldest of the last six first.
pub fn revenue_by_month(invoices: &[Record]) -> Vec<MonthlyRevenue> {
    let mut months: BTreeMap<String, (f64, f64)> = BTreeMap::new();

    for invoice in invoices {
        let date = invoice.str_or("invoice_date", "");
        // "YYYY-MM" prefix; get() keeps this total for non-date wire strings.
        let Some(month) = date.get(..7).map(str::to_string) else {
            continue;
        };
        let amount = invoice.f64_or("amount_total", 0.0);
        let entry = months.entry(month).or_insert((0.0, 0.0));
        match invoice.str_or("move_type", "").as_str() {
            "out_invoice" => entry.0 += amount,
            "in_invoice" => entry.1 += amount,
            _ => {}
        }
    }

    let mut series: Vec<MonthlyRevenue> = months
        .into_iter()
        .map(|(month, (revenue, expense))| MonthlyRevenue { month, revenue, expense })
        .collect();

    if series.len() > MONTHS_SHOWN {
        series.drain(..series.len() - MONTHS_SHOWN);
    }
    series
}

/// Number of sites per province; unset provinces group under the
/// placeholder label.
pub fn occupancy_by_zone(sites: &[Site]) -> Vec<ZoneOccupancy> {
    let mut zones: BTreeMap<String, u32> = BTreeMap::new();
    for site in sites {
        *zones.entry(site.province.clone()).or_insert(0) += 1;
    }
    zones.into_iter().map(|(name, count)| ZoneOccupancy { name, count }).collect()
}

/// The highest-earning sites, best first.
pub fn top_sites(sites: &[Site]) -> Vec<SiteRevenue> {
    let mut ranked: Vec<SiteRevenue> = sites
        .iter()
        .filter(|s| s.total_revenue > 0.0)
        .map(|s| SiteRevenue { name: s.name.clone(), revenue: s.total_revenue })
        .collect();
    ranked.sort_by(|a, b| b.revenue.partial_cmp(&a.revenue).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(TOP_SITES);
    ranked
}
