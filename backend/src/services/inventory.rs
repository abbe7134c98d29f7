//! Combined purchase/sales view for a single product

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::types::InventoryRecordType;

/// Read-side service for the per-product inventory ledger
#[derive(Clone)]
pub struct InventoryService {
    db: PgPool,
}

/// One row of the combined ledger: either a purchase or a sale
#[derive(Debug, Clone, Serialize)]
pub struct InventoryRecord {
    pub id: Uuid,
    pub record_type: InventoryRecordType,
    pub date: NaiveDate,
    pub quantity: i32,
    /// Current unit price of the product, used for valuation
    pub unit_price: Decimal,
}

#[derive(Debug, FromRow)]
struct LedgerRow {
    id: Uuid,
    record_type: String,
    date: NaiveDate,
    quantity: i32,
    unit_price: Decimal,
}

impl InventoryService {
    /// Create a new InventoryService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// All purchases and sales of one product, ordered ascending by date
    pub async fn product_ledger(&self, product_id: Uuid) -> AppResult<Vec<InventoryRecord>> {
        let product_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(product_id)
                .fetch_one(&self.db)
                .await?;

        if !product_exists {
            return Err(AppError::NotFound("Product".to_string()));
        }

        let rows = sqlx::query_as::<_, LedgerRow>(
            r#"
            SELECT pu.id, 'purchase' AS record_type, pu.purchase_date AS date,
                   pu.quantity, pr.price AS unit_price
            FROM purchases pu
            JOIN products pr ON pr.id = pu.product_id
            WHERE pu.product_id = $1
            UNION ALL
            SELECT sa.id, 'sales' AS record_type, sa.sales_date AS date,
                   sa.quantity, pr.price AS unit_price
            FROM sales sa
            JOIN products pr ON pr.id = sa.product_id
            WHERE sa.product_id = $1
            ORDER BY date
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter()
            .map(|row| {
                let record_type = row
                    .record_type
                    .parse::<InventoryRecordType>()
                    .map_err(AppError::Internal)?;
                Ok(InventoryRecord {
                    id: row.id,
                    record_type,
                    date: row.date,
                    quantity: row.quantity,
                    unit_price: row.unit_price,
                })
            })
            .collect()
    }
}
