//! End-to-end tests for the forecast batch flow: raw CSV in, three derived
//! tables out.

use std::fs;
use std::io::Write;

use salesboard_core::dataset::SalesTable;
use salesboard_core::forecast::generate;
use salesboard_core::persist::{
    read_forecast, read_monthly_actuals, read_region_forecast, write_bundle, FORECAST_FILE,
    LAST_YEAR_FILE, REGION_FORECAST_FILE,
};
use salesboard_core::summary::{filtered_region_summary, region_breakdown, total_summary};
use salesboard_core::Error;

fn write_raw_csv(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("sales_data.csv");
    let mut file = fs::File::create(&path).unwrap();
    writeln!(file, "OrderID, Date, Region, Category, Quantity, UnitPrice").unwrap();
    // 2023: background history shaping the regional split
    writeln!(file, "2001, 2023-03-12, North, Widgets, 10, 20.0").unwrap();
    writeln!(file, "2002, 2023-08-30, South, Gadgets, 4, 75.0").unwrap();
    // 2024: training year, three active months
    writeln!(file, "2003, 2024-01-05, North, Widgets, 2, 50.0").unwrap();
    writeln!(file, "2004, 2024-01-22, South, Widgets, 1, 50.0").unwrap();
    writeln!(file, "2005, 2024-02-14, North, Gadgets, 4, 50.0").unwrap();
    writeln!(file, "2006, 2024-03-01, South, Gadgets, 5, 50.0").unwrap();
    path
}

#[test]
fn batch_flow_produces_all_three_tables() {
    let dir = tempfile::tempdir().unwrap();
    let raw = write_raw_csv(dir.path());
    let out = dir.path().join("outputs");

    let table = SalesTable::load(&raw).unwrap();
    let bundle = generate(&table).unwrap();
    write_bundle(&bundle, &out).unwrap();

    let forecast = read_forecast(out.join(FORECAST_FILE)).unwrap();
    assert_eq!(forecast.len(), 12);
    assert_eq!(forecast.first().unwrap().month, 1);
    assert_eq!(forecast.last().unwrap().month, 12);

    let regions = read_region_forecast(out.join(REGION_FORECAST_FILE)).unwrap();
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].region, "North");
    assert_eq!(regions[1].region, "South");

    let actuals = read_monthly_actuals(out.join(LAST_YEAR_FILE)).unwrap();
    assert_eq!(actuals.len(), 12);
    // 2024 months: Jan 150, Feb 200, Mar 250, rest zero-filled.
    assert_eq!(actuals[0].revenue, 150);
    assert_eq!(actuals[1].revenue, 200);
    assert_eq!(actuals[2].revenue, 250);
    assert!(actuals[3..].iter().all(|row| row.revenue == 0));
}

#[test]
fn regeneration_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let raw = write_raw_csv(dir.path());
    let out = dir.path().join("outputs");

    let table = SalesTable::load(&raw).unwrap();
    write_bundle(&generate(&table).unwrap(), &out).unwrap();
    let first: Vec<Vec<u8>> = [FORECAST_FILE, REGION_FORECAST_FILE, LAST_YEAR_FILE]
        .iter()
        .map(|name| fs::read(out.join(name)).unwrap())
        .collect();

    let table = SalesTable::load(&raw).unwrap();
    write_bundle(&generate(&table).unwrap(), &out).unwrap();
    let second: Vec<Vec<u8>> = [FORECAST_FILE, REGION_FORECAST_FILE, LAST_YEAR_FILE]
        .iter()
        .map(|name| fs::read(out.join(name)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn missing_input_aborts_before_any_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("outputs");

    let err = SalesTable::load(dir.path().join("sales_data.csv")).unwrap_err();
    assert!(matches!(err, Error::MissingInput(_)));
    assert!(!out.exists());
}

#[test]
fn summary_reconciles_with_raw_rows() {
    let dir = tempfile::tempdir().unwrap();
    let raw = write_raw_csv(dir.path());
    let table = SalesTable::load(&raw).unwrap();

    // 200 + 300 + 100 + 50 + 200 + 250 = 1100
    let totals = total_summary(&table);
    assert_eq!(totals.total_revenue, 1100);
    assert_eq!(totals.total_orders, 6);
    assert_eq!(totals.profit, 330);

    let breakdown = region_breakdown(&table);
    let sum: f64 = breakdown.values().sum();
    assert_eq!(sum as i64, totals.total_revenue);

    assert_eq!(
        filtered_region_summary(&table, Some("All"), Some("All")),
        breakdown
    );
    assert!(filtered_region_summary(&table, Some("West"), None).is_empty());
}

#[test]
fn forecast_total_matches_regional_split_within_tolerance() {
    let dir = tempfile::tempdir().unwrap();
    let raw = write_raw_csv(dir.path());
    let table = SalesTable::load(&raw).unwrap();
    let bundle = generate(&table).unwrap();

    let monthly_total: i64 = bundle.monthly.iter().map(|r| r.forecasted_revenue).sum();
    let region_total: i64 = bundle.by_region.iter().map(|r| r.forecasted_revenue).sum();
    let regions = bundle.by_region.len() as i64;

    assert!((monthly_total - region_total).abs() <= regions);
}
