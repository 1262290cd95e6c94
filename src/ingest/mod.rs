//! CSV ingestion (§6): schema-first deserialization of the two input
//! tables into the engine's data model. No free-form header lookups — each
//! table has a fixed row struct and `csv`/`serde` do the binding.

mod parts;
mod prices;

use std::path::Path;

use crate::error::OptimizerError;
use crate::model::{RequiredCut, StockOption};

pub use parts::PartRow;
pub use prices::PriceRow;

/// Reads the stock price catalog from a CSV with `length` (feet) and
/// `price` columns, converting lengths to inches on the way in.
pub fn read_stock_options(path: impl AsRef<Path>) -> Result<Vec<StockOption>, OptimizerError> {
    let path = path.as_ref();
    let mut reader = open(path)?;

    let mut stocks = Vec::new();
    for (index, result) in reader.deserialize::<PriceRow>().enumerate() {
        let row = result.map_err(|e| csv_error(path, e))?;
        if row.length <= 0.0 {
            return Err(OptimizerError::malformed(
                path,
                format!("row {index}: length must be positive, got {}", row.length),
            ));
        }
        if row.price < 0.0 {
            return Err(OptimizerError::malformed(
                path,
                format!("row {index}: price must be non-negative, got {}", row.price),
            ));
        }
        stocks.push(StockOption::from_feet(row.length, row.price));
    }

    if stocks.is_empty() {
        return Err(OptimizerError::malformed(path, "no stock options found"));
    }

    Ok(stocks)
}

/// Reads the required cut list from a CSV with `LEN`/`QTY` (and an
/// optional label) columns. Rows with a zero quantity are rejected rather
/// than silently skipped, since a `0` in that column is never a sentinel
/// for "no demand" in the source data — it is always a mistake.
pub fn read_required_cuts(path: impl AsRef<Path>) -> Result<Vec<RequiredCut>, OptimizerError> {
    let path = path.as_ref();
    let mut reader = open(path)?;

    let mut cuts = Vec::new();
    for (index, result) in reader.deserialize::<PartRow>().enumerate() {
        let row = result.map_err(|e| csv_error(path, e))?;
        if row.qty == 0 {
            return Err(OptimizerError::malformed(
                path,
                format!("row {index}: quantity must be positive, got 0"),
            ));
        }
        if row.len <= 0.0 {
            return Err(OptimizerError::malformed(
                path,
                format!("row {index}: length must be positive, got {}", row.len),
            ));
        }
        cuts.push(RequiredCut {
            length: row.len,
            quantity: row.qty,
            description: row.label,
        });
    }

    if cuts.is_empty() {
        return Err(OptimizerError::malformed(path, "no required cuts found"));
    }

    Ok(cuts)
}

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>, OptimizerError> {
    csv::Reader::from_path(path).map_err(|err| match err.into_kind() {
        csv::ErrorKind::Io(source) => OptimizerError::InputMissing {
            path: path.to_path_buf(),
            source,
        },
        other => OptimizerError::malformed(path, other.to_string()),
    })
}

fn csv_error(path: &Path, err: csv::Error) -> OptimizerError {
    OptimizerError::malformed(path, err.to_string())
}
