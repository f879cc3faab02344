//! Data model for raw sales rows and the derived forecast tables.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Fixed month labels used by the serving layer when reshaping forecast
/// rows into chart payloads.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One row of the raw sales table.
///
/// `order_id` is not unique; multiple line items may share an order.
/// Revenue is always derived, never stored in the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub order_id: String,
    pub date: NaiveDate,
    pub region: String,
    pub category: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl SalesRecord {
    /// Derived revenue: `quantity × unit_price`
    pub fn revenue(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

/// Revenue summed over one (year, month) period. Internal to the forecast fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyRevenue {
    pub year: i32,
    pub month: u32,
    pub revenue: f64,
}

/// One forecasted month, integer-truncated. Negative values are preserved;
/// the fitted line is never clamped at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRow {
    #[serde(rename = "Month")]
    pub month: u32,
    #[serde(rename = "Forecasted_Revenue")]
    pub forecasted_revenue: i64,
}

/// A region's slice of the total forecast, proportional to its historical
/// revenue share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionForecastRow {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Forecasted_Revenue")]
    pub forecasted_revenue: i64,
}

/// Actual revenue for one month of the latest year; months with no
/// transactions report 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyActualRow {
    #[serde(rename = "Month")]
    pub month: u32,
    #[serde(rename = "Revenue")]
    pub revenue: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_is_quantity_times_price() {
        let record = SalesRecord {
            order_id: "1001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            region: "North".to_string(),
            category: "Widgets".to_string(),
            quantity: 4,
            unit_price: 12.5,
        };

        assert!((record.revenue() - 50.0).abs() < 1e-10);
        assert_eq!(record.year(), 2024);
        assert_eq!(record.month(), 3);
    }

    #[test]
    fn test_month_labels_cover_a_year() {
        assert_eq!(MONTH_LABELS.len(), 12);
        assert_eq!(MONTH_LABELS[0], "Jan");
        assert_eq!(MONTH_LABELS[11], "Dec");
    }
}
