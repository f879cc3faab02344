//! # salesboard-cli
//!
//! Command-line interface for the sales dashboard: runs the forecast
//! batch job and prints aggregate reports.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use salesboard_core::dataset::SalesTable;
use salesboard_core::persist::{FORECAST_FILE, LAST_YEAR_FILE, REGION_FORECAST_FILE};
use salesboard_core::summary::PROFIT_MARGIN;
use salesboard_core::{forecast, persist, summary, Result};

#[derive(Parser)]
#[command(name = "salesboard")]
#[command(about = "Sales reporting and revenue forecasting CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the forecast tables from the raw sales data
    Generate {
        /// Raw sales CSV file
        #[arg(short, long, default_value = "data/sales_data.csv")]
        data: PathBuf,

        /// Directory for the derived forecast tables
        #[arg(short, long, default_value = "outputs")]
        out: PathBuf,
    },

    /// Print aggregate revenue metrics
    Report {
        /// Raw sales CSV file
        #[arg(short, long, default_value = "data/sales_data.csv")]
        data: PathBuf,

        /// Only include rows for this region ("All" disables the filter)
        #[arg(short, long)]
        region: Option<String>,

        /// Only include rows for this category ("All" disables the filter)
        #[arg(short, long)]
        category: Option<String>,
    },
}

fn run_generate(data: PathBuf, out: PathBuf) -> Result<()> {
    let table = SalesTable::load(&data)?;
    let bundle = forecast::generate(&table)?;
    persist::write_bundle(&bundle, &out)?;

    println!("Forecast tables generated from {}", data.display());
    for file in [FORECAST_FILE, REGION_FORECAST_FILE, LAST_YEAR_FILE] {
        println!("  - {}", out.join(file).display());
    }
    Ok(())
}

fn run_report(data: PathBuf, region: Option<String>, category: Option<String>) -> Result<()> {
    let table = SalesTable::load(&data)?;
    let totals = summary::total_summary(&table);

    println!("Total revenue: {}", totals.total_revenue);
    println!("Total orders:  {}", totals.total_orders);
    println!(
        "Profit ({:.0}%):  {}",
        PROFIT_MARGIN * 100.0,
        totals.profit
    );

    let breakdown = summary::filtered_region_summary(&table, region.as_deref(), category.as_deref());
    if breakdown.is_empty() {
        println!("\nNo rows match the given filters");
    } else {
        println!("\nRevenue by region:");
        for (region, revenue) in &breakdown {
            println!("  {region}: {revenue:.2}");
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { data, out } => run_generate(data, out),
        Commands::Report {
            data,
            region,
            category,
        } => run_report(data, region, category),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
