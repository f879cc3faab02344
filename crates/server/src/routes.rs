//! API route handlers
//!
//! Payload shapes mirror what the dashboard pages chart directly: parallel
//! label/value arrays, fixed month names, years as strings.

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use salesboard_core::dataset::SalesTable;
use salesboard_core::model::MONTH_LABELS;
use salesboard_core::persist::{
    read_forecast, read_region_forecast, FORECAST_FILE, REGION_FORECAST_FILE,
};
use salesboard_core::summary::{
    filtered_region_summary, region_breakdown, total_summary, yearly_trend,
};

use crate::error::AppError;
use crate::AppState;

type ApiResult<T> = Result<Json<T>, AppError>;

/// Liveness probe - is the server running?
pub async fn liveness() -> Json<serde_json::Value> {
    Json(json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_revenue: i64,
    pub total_orders: usize,
    pub profit: i64,
    pub region_sales: BTreeMap<String, f64>,
}

/// Headline metrics plus per-region revenue, recomputed from the raw table.
pub async fn dashboard(State(state): State<AppState>) -> ApiResult<DashboardResponse> {
    let table = SalesTable::load(&state.config.sales_data)?;
    let totals = total_summary(&table);

    Ok(Json(DashboardResponse {
        total_revenue: totals.total_revenue,
        total_orders: totals.total_orders,
        profit: totals.profit,
        region_sales: region_breakdown(&table),
    }))
}

#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
}

/// The persisted monthly forecast reshaped into chart arrays.
pub async fn forecast(State(state): State<AppState>) -> ApiResult<ForecastResponse> {
    let rows = read_forecast(state.config.output_dir.join(FORECAST_FILE))?;

    Ok(Json(ForecastResponse {
        labels: rows.iter().map(|r| r.month.to_string()).collect(),
        values: rows.iter().map(|r| r.forecasted_revenue).collect(),
    }))
}

#[derive(Debug, Serialize)]
pub struct ForecastLightResponse {
    pub months: Vec<&'static str>,
    pub monthly_forecast: Vec<i64>,
    pub regions: Vec<String>,
    pub region_values: Vec<i64>,
    pub years: Vec<String>,
    pub yearly_revenue: Vec<f64>,
}

/// Everything the forecast page needs in one payload: the two persisted
/// forecast tables plus the yearly trend recomputed from the raw table.
pub async fn forecast_light(State(state): State<AppState>) -> ApiResult<ForecastLightResponse> {
    let out = &state.config.output_dir;
    let monthly = read_forecast(out.join(FORECAST_FILE))?;
    let regions = read_region_forecast(out.join(REGION_FORECAST_FILE))?;

    let table = SalesTable::load(&state.config.sales_data)?;
    let yearly = yearly_trend(&table);

    Ok(Json(ForecastLightResponse {
        months: MONTH_LABELS.to_vec(),
        monthly_forecast: monthly.into_iter().map(|r| r.forecasted_revenue).collect(),
        regions: regions.iter().map(|r| r.region.clone()).collect(),
        region_values: regions.iter().map(|r| r.forecasted_revenue).collect(),
        years: yearly.iter().map(|(year, _)| year.to_string()).collect(),
        yearly_revenue: yearly.iter().map(|(_, revenue)| *revenue).collect(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct FilterParams {
    pub region: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FilteredDataResponse {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Per-region revenue over the filtered subset. Unknown filter values
/// produce empty arrays, not an error.
pub async fn filtered_data(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> ApiResult<FilteredDataResponse> {
    let table = SalesTable::load(&state.config.sales_data)?;
    let breakdown =
        filtered_region_summary(&table, params.region.as_deref(), params.category.as_deref());

    Ok(Json(FilteredDataResponse {
        labels: breakdown.keys().cloned().collect(),
        values: breakdown.values().copied().collect(),
    }))
}
