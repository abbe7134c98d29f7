//! Sales ledger models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An append-only ledger entry representing stock sold
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sales {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub sales_date: NaiveDate,
    /// Set when the row was created by a bulk import
    pub import_file_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Aggregated sales for one calendar month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlySales {
    /// First day of the month the aggregate covers
    pub monthly_date: NaiveDate,
    pub monthly_quantity: i64,
}
