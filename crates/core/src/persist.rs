//! Persistence adapter for the derived forecast tables.
//!
//! Each table is written to a temporary file in the destination directory
//! and atomically renamed over the target, so a concurrent reader never
//! observes a partially written file. Outputs are fully overwritten on
//! every run; regeneration is idempotent and cheap.
//!
//! The expected header of each table is part of the contract between the
//! generator and its consumers and is validated on load.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{Error, Result};
use crate::forecast::ForecastBundle;
use crate::model::{ForecastRow, MonthlyActualRow, RegionForecastRow};

/// Monthly forecast table: `Month,Forecasted_Revenue`
pub const FORECAST_FILE: &str = "forecast_dashboard.csv";
/// Regional forecast table: `Region,Forecasted_Revenue`
pub const REGION_FORECAST_FILE: &str = "forecast_region.csv";
/// Latest-year actuals table: `Month,Revenue`
pub const LAST_YEAR_FILE: &str = "last_year_monthly.csv";

const FORECAST_HEADER: &[&str] = &["Month", "Forecasted_Revenue"];
const REGION_FORECAST_HEADER: &[&str] = &["Region", "Forecasted_Revenue"];
const LAST_YEAR_HEADER: &[&str] = &["Month", "Revenue"];

/// Write all three derived tables under `out_dir`, creating it if needed.
pub fn write_bundle(bundle: &ForecastBundle, out_dir: impl AsRef<Path>) -> Result<()> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    write_table(&bundle.monthly, out_dir, FORECAST_FILE)?;
    write_table(&bundle.by_region, out_dir, REGION_FORECAST_FILE)?;
    write_table(&bundle.last_year_actuals, out_dir, LAST_YEAR_FILE)?;

    info!(dir = %out_dir.display(), "forecast tables written");
    Ok(())
}

/// Read the monthly forecast table, validating its header.
pub fn read_forecast(path: impl AsRef<Path>) -> Result<Vec<ForecastRow>> {
    read_table(path.as_ref(), FORECAST_HEADER)
}

/// Read the regional forecast table, validating its header.
pub fn read_region_forecast(path: impl AsRef<Path>) -> Result<Vec<RegionForecastRow>> {
    read_table(path.as_ref(), REGION_FORECAST_HEADER)
}

/// Read the latest-year actuals table, validating its header.
pub fn read_monthly_actuals(path: impl AsRef<Path>) -> Result<Vec<MonthlyActualRow>> {
    read_table(path.as_ref(), LAST_YEAR_HEADER)
}

fn write_table<T: Serialize>(rows: &[T], dir: &Path, file_name: &str) -> Result<()> {
    let tmp = NamedTempFile::new_in(dir)?;
    let mut writer = csv::Writer::from_writer(tmp.as_file());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    drop(writer);

    tmp.persist(dir.join(file_name)).map_err(|e| Error::Io(e.error))?;
    Ok(())
}

fn read_table<T: DeserializeOwned>(path: &Path, expected: &[&str]) -> Result<Vec<T>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(path)?;

    let headers = reader.headers()?;
    if headers.iter().ne(expected.iter().copied()) {
        return Err(Error::SchemaMismatch {
            path: path.to_path_buf(),
            expected: expected.join(","),
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}
