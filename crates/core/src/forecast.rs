//! Forecast generation
//!
//! A one-shot batch computation: aggregate monthly revenue, fit a linear
//! trend over the latest year's months, extrapolate a full twelve-month
//! year, and split the total across regions by historical revenue share.
//! Everything is produced in memory as a [`ForecastBundle`]; persistence
//! lives in [`crate::persist`].

use std::collections::BTreeMap;

use tracing::info;

use crate::dataset::SalesTable;
use crate::error::{Error, Result};
use crate::model::{ForecastRow, MonthlyActualRow, MonthlyRevenue, RegionForecastRow};
use crate::regression::LinearRegression;
use crate::summary::region_breakdown;

/// Months in a forecast horizon; the forecast always covers a full year.
pub const FORECAST_MONTHS: u32 = 12;

/// The three derived tables produced by one generator run.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastBundle {
    /// Twelve forecasted months, 1..=12
    pub monthly: Vec<ForecastRow>,
    /// Per-region slice of the forecast total, ordered by region name
    pub by_region: Vec<RegionForecastRow>,
    /// Twelve latest-year actuals, 1..=12, zero-filled
    pub last_year_actuals: Vec<MonthlyActualRow>,
}

/// Revenue grouped by (year, month), ascending.
pub fn monthly_revenue(table: &SalesTable) -> Vec<MonthlyRevenue> {
    let mut grouped: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for record in table.records() {
        *grouped.entry((record.year(), record.month())).or_insert(0.0) += record.revenue();
    }
    grouped
        .into_iter()
        .map(|((year, month), revenue)| MonthlyRevenue {
            year,
            month,
            revenue,
        })
        .collect()
}

/// Run the full forecast computation over the raw table.
///
/// The trend is fitted on the latest year's monthly totals only, while the
/// regional split uses revenue shares over the entire table. That mismatch
/// is inherited from the source data pipeline and kept intact; see
/// DESIGN.md.
///
/// Deterministic: the same table always yields an equal bundle.
pub fn generate(table: &SalesTable) -> Result<ForecastBundle> {
    let latest_year = table.latest_year().ok_or(Error::InsufficientData {
        required: 1,
        actual: 0,
    })?;

    let training: Vec<(f64, f64)> = monthly_revenue(table)
        .into_iter()
        .filter(|m| m.year == latest_year)
        .map(|m| (f64::from(m.month), m.revenue))
        .collect();

    let model = LinearRegression::fit(&training)?;
    info!(
        latest_year,
        points = training.len(),
        slope = model.slope(),
        intercept = model.intercept(),
        "fitted monthly revenue trend"
    );

    // Truncation toward zero, matching the integer columns of the persisted
    // tables. Negative fitted values pass through unclamped.
    let monthly: Vec<ForecastRow> = (1..=FORECAST_MONTHS)
        .map(|month| ForecastRow {
            month,
            forecasted_revenue: model.predict_at(f64::from(month)) as i64,
        })
        .collect();

    let total_forecast: i64 = monthly.iter().map(|r| r.forecasted_revenue).sum();
    let total_revenue: f64 = table.records().iter().map(|r| r.revenue()).sum();

    let by_region: Vec<RegionForecastRow> = region_breakdown(table)
        .into_iter()
        .map(|(region, revenue)| RegionForecastRow {
            region,
            forecasted_revenue: (revenue / total_revenue * total_forecast as f64) as i64,
        })
        .collect();

    let mut actual_by_month = [0.0_f64; FORECAST_MONTHS as usize];
    for record in table.records() {
        if record.year() == latest_year {
            actual_by_month[(record.month() - 1) as usize] += record.revenue();
        }
    }
    let last_year_actuals = (1..=FORECAST_MONTHS)
        .map(|month| MonthlyActualRow {
            month,
            revenue: actual_by_month[(month - 1) as usize] as i64,
        })
        .collect();

    Ok(ForecastBundle {
        monthly,
        by_region,
        last_year_actuals,
    })
}
