//! Raw sales table loading.
//!
//! The input is a comma-separated file with a header row:
//! `OrderID, Date, Region, Category, Quantity, UnitPrice`. Leading and
//! trailing whitespace in headers and fields is tolerated. Malformed rows
//! fail the whole load with a line-numbered error; there is no row-level
//! skipping.

use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::info;

use crate::error::{Error, Result};
use crate::model::SalesRecord;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// The raw sales table, immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesTable {
    records: Vec<SalesRecord>,
}

impl SalesTable {
    /// Load the table from a CSV file.
    ///
    /// A missing file is [`Error::MissingInput`], distinct from other I/O
    /// failures so the batch job can abort before touching any output.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::MissingInput(path.to_path_buf()));
        }

        let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(path)?;
        let headers = reader.headers()?.clone();

        let order_idx = column_index(&headers, "OrderID")?;
        let date_idx = column_index(&headers, "Date")?;
        let region_idx = column_index(&headers, "Region")?;
        let category_idx = column_index(&headers, "Category")?;
        let quantity_idx = column_index(&headers, "Quantity")?;
        let price_idx = column_index(&headers, "UnitPrice")?;

        let mut records = Vec::new();
        for (i, result) in reader.records().enumerate() {
            let record = result?;
            // 1-based line number, counting the header as line 1
            let row = i + 2;

            records.push(SalesRecord {
                order_id: field(&record, order_idx, row, "OrderID")?.to_string(),
                date: parse_date(field(&record, date_idx, row, "Date")?, row)?,
                region: field(&record, region_idx, row, "Region")?.to_string(),
                category: field(&record, category_idx, row, "Category")?.to_string(),
                quantity: parse_field(field(&record, quantity_idx, row, "Quantity")?, row, "Quantity")?,
                unit_price: parse_field(field(&record, price_idx, row, "UnitPrice")?, row, "UnitPrice")?,
            });
        }

        info!(rows = records.len(), path = %path.display(), "loaded sales table");
        Ok(Self { records })
    }

    /// Build a table directly from records, bypassing file I/O.
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The maximum year present in the table, if any.
    pub fn latest_year(&self) -> Option<i32> {
        self.records.iter().map(SalesRecord::year).max()
    }
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| Error::MissingColumn(name.to_string()))
}

fn field<'a>(record: &'a StringRecord, idx: usize, row: usize, column: &str) -> Result<&'a str> {
    record.get(idx).ok_or_else(|| Error::InvalidField {
        row,
        column: column.to_string(),
        reason: "field missing".to_string(),
    })
}

fn parse_field<T: std::str::FromStr>(value: &str, row: usize, column: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| Error::InvalidField {
        row,
        column: column.to_string(),
        reason: e.to_string(),
    })
}

fn parse_date(value: &str, row: usize) -> Result<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .ok_or_else(|| Error::InvalidField {
            row,
            column: "Date".to_string(),
            reason: format!("'{value}' is not a recognized calendar date"),
        })
}
