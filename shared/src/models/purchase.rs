//! Purchase ledger models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An append-only ledger entry representing stock received
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Purchase {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub purchase_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
