//! # salesboard-core
//!
//! Aggregation and forecasting core for the sales reporting dashboard.
//! The crate has two independent halves:
//!
//! - [`summary`]: grouped revenue summaries over the raw sales table,
//!   optionally filtered by region and category
//! - [`forecast`]: a batch computation that fits a linear trend to the
//!   latest year's monthly revenue, extrapolates twelve months forward and
//!   redistributes the total across regions by historical revenue share
//!
//! The two halves only share the raw table ([`dataset::SalesTable`]); the
//! forecast results are handed to consumers through the tabular files
//! written by [`persist`].
//!
//! ## Example
//!
//! ```rust
//! use salesboard_core::prelude::*;
//! use chrono::NaiveDate;
//!
//! let table = SalesTable::from_records(vec![SalesRecord {
//!     order_id: "1001".into(),
//!     date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
//!     region: "North".into(),
//!     category: "Widgets".into(),
//!     quantity: 3,
//!     unit_price: 25.0,
//! }]);
//!
//! assert_eq!(total_summary(&table).total_revenue, 75);
//! ```

pub mod dataset;
mod error;
pub mod forecast;
pub mod model;
pub mod persist;
pub mod regression;
pub mod summary;

pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dataset::SalesTable;
    pub use crate::forecast::{generate, ForecastBundle};
    pub use crate::model::{
        ForecastRow, MonthlyActualRow, MonthlyRevenue, RegionForecastRow, SalesRecord,
        MONTH_LABELS,
    };
    pub use crate::persist::write_bundle;
    pub use crate::regression::LinearRegression;
    pub use crate::summary::{
        filtered_region_summary, region_breakdown, total_summary, yearly_trend, TotalSummary,
        PROFIT_MARGIN,
    };
    pub use crate::{Error, Result};
}
