//! Purchase ledger service

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::Purchase;
use shared::validation::validate_quantity;

/// Service recording incoming stock. Purchases are append-only; there is no
/// update or delete path.
#[derive(Clone)]
pub struct PurchaseService {
    db: PgPool,
}

/// Input for recording a purchase
#[derive(Debug, Deserialize)]
pub struct RecordPurchaseInput {
    pub product_id: Uuid,
    pub quantity: i32,
    pub purchase_date: NaiveDate,
}

#[derive(Debug, FromRow)]
struct PurchaseRow {
    id: Uuid,
    product_id: Uuid,
    quantity: i32,
    purchase_date: NaiveDate,
    created_at: DateTime<Utc>,
}

impl From<PurchaseRow> for Purchase {
    fn from(row: PurchaseRow) -> Self {
        Purchase {
            id: row.id,
            product_id: row.product_id,
            quantity: row.quantity,
            purchase_date: row.purchase_date,
            created_at: row.created_at,
        }
    }
}

impl PurchaseService {
    /// Create a new PurchaseService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record stock received for a product
    pub async fn record_purchase(&self, input: RecordPurchaseInput) -> AppResult<Purchase> {
        validate_quantity(input.quantity).map_err(|msg| AppError::Validation {
            field: "quantity".to_string(),
            message: msg.to_string(),
        })?;

        let product_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(input.product_id)
                .fetch_one(&self.db)
                .await?;

        if !product_exists {
            return Err(AppError::NotFound("Product".to_string()));
        }

        let row = sqlx::query_as::<_, PurchaseRow>(
            r#"
            INSERT INTO purchases (product_id, quantity, purchase_date)
            VALUES ($1, $2, $3)
            RETURNING id, product_id, quantity, purchase_date, created_at
            "#,
        )
        .bind(input.product_id)
        .bind(input.quantity)
        .bind(input.purchase_date)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }
}
