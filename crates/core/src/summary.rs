//! Aggregation pipeline over the raw sales table.
//!
//! Every function recomputes from the table it is given; there is no
//! caching layer. The table is small and access is infrequent, so callers
//! reload per request.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::dataset::SalesTable;
use crate::model::SalesRecord;

/// Assumed flat profit margin applied to total revenue. Not derived from
/// cost data.
pub const PROFIT_MARGIN: f64 = 0.30;

/// Sentinel filter value that disables a dimension filter.
pub const FILTER_ALL: &str = "All";

/// Headline metrics for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TotalSummary {
    /// Sum of derived revenue over all rows, truncated to an integer
    pub total_revenue: i64,
    /// Count of distinct order identifiers
    pub total_orders: usize,
    /// `PROFIT_MARGIN × total_revenue`, truncated
    pub profit: i64,
}

/// Total revenue, distinct order count and the assumed profit figure.
pub fn total_summary(table: &SalesTable) -> TotalSummary {
    let total: f64 = table.records().iter().map(SalesRecord::revenue).sum();
    let total_revenue = total as i64;

    let total_orders = table
        .records()
        .iter()
        .map(|r| r.order_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    TotalSummary {
        total_revenue,
        total_orders,
        profit: (total_revenue as f64 * PROFIT_MARGIN) as i64,
    }
}

/// Revenue summed per region, deterministically ordered by region name.
pub fn region_breakdown(table: &SalesTable) -> BTreeMap<String, f64> {
    let mut by_region = BTreeMap::new();
    for record in table.records() {
        *by_region.entry(record.region.clone()).or_insert(0.0) += record.revenue();
    }
    by_region
}

/// Revenue summed per year, ascending by year.
pub fn yearly_trend(table: &SalesTable) -> Vec<(i32, f64)> {
    let mut by_year = BTreeMap::new();
    for record in table.records() {
        *by_year.entry(record.year()).or_insert(0.0) += record.revenue();
    }
    by_year.into_iter().collect()
}

/// Region breakdown over the subset matching the given filters.
///
/// A filter is applied when present, non-empty and not the sentinel
/// [`FILTER_ALL`]. Filtering on a value absent from the data yields an
/// empty map, never an error.
pub fn filtered_region_summary(
    table: &SalesTable,
    region: Option<&str>,
    category: Option<&str>,
) -> BTreeMap<String, f64> {
    let mut by_region = BTreeMap::new();
    for record in table.records() {
        if !matches_filter(&record.region, region) || !matches_filter(&record.category, category) {
            continue;
        }
        *by_region.entry(record.region.clone()).or_insert(0.0) += record.revenue();
    }
    by_region
}

fn matches_filter(value: &str, filter: Option<&str>) -> bool {
    match filter {
        Some(f) if !f.is_empty() && f != FILTER_ALL => value == f,
        _ => true,
    }
}
