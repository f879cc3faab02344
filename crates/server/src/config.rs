//! Server configuration from environment variables.

use std::env;
use std::path::PathBuf;

use tracing::info;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Raw sales table consumed by the aggregation endpoints
    pub sales_data: PathBuf,
    /// Directory holding the derived forecast tables
    pub output_dir: PathBuf,
    /// Directory of prebuilt static pages
    pub static_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: var_or("HOST", "0.0.0.0"),
            port: var_or("PORT", "8080")
                .parse()
                .expect("PORT must be a valid number"),
            sales_data: PathBuf::from(var_or("SALES_DATA", "data/sales_data.csv")),
            output_dir: PathBuf::from(var_or("OUTPUT_DIR", "outputs")),
            static_dir: PathBuf::from(var_or("STATIC_DIR", "static")),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}
