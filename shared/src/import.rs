//! CSV parsing for bulk sales imports
//!
//! The same contract is used by the synchronous import endpoint and by the
//! asynchronous import worker: comma-separated input with a header row
//! containing at least the `product`, `date` and `quantity` columns. Parsing
//! is all-or-nothing; a single bad row fails the whole file so a batch is
//! never partially ingested.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Columns every sales import file must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 3] = ["product", "date", "quantity"];

/// One data row of a sales import file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SalesCsvRow {
    /// Product identifier the sale refers to
    pub product: Uuid,
    /// Sale date in `YYYY-MM-DD` form
    pub date: NaiveDate,
    pub quantity: i32,
}

/// Errors raised while parsing a sales import file
#[derive(Debug, Error)]
pub enum CsvImportError {
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("file is not valid CSV: {0}")]
    Malformed(String),

    /// `row` is the 1-based line number including the header row
    #[error("row {row}: {message}")]
    Row { row: usize, message: String },
}

/// Parse a whole sales import file
///
/// Returns every data row or the first error encountered. A header-only file
/// parses to an empty vector.
pub fn parse_sales_csv(data: &[u8]) -> Result<Vec<SalesCsvRow>, CsvImportError> {
    let mut reader = csv::Reader::from_reader(data);

    let headers = reader
        .headers()
        .map_err(|e| CsvImportError::Malformed(e.to_string()))?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(CsvImportError::MissingColumn(column));
        }
    }

    let mut rows = Vec::new();
    for (index, result) in reader.deserialize::<SalesCsvRow>().enumerate() {
        // Line 1 is the header, so data row N sits on line N + 1.
        let line = index + 2;
        let row = result.map_err(|e| CsvImportError::Row {
            row: line,
            message: e.to_string(),
        })?;
        if row.quantity <= 0 {
            return Err(CsvImportError::Row {
                row: line,
                message: format!("quantity must be positive, got {}", row.quantity),
            });
        }
        rows.push(row);
    }

    Ok(rows)
}
