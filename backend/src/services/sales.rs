//! Sales ledger service and the stock oversell check
//!
//! A sale may only be recorded while cumulative purchased quantity stays at or
//! above cumulative sold quantity for the product. The check and the insert
//! run in one transaction holding a `FOR UPDATE` lock on the product row, so
//! two concurrent sales of the same product cannot both pass a stale check.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::{MonthlySales, Sales};
use shared::validation::validate_quantity;

/// Service recording sold stock. Sales are append-only.
#[derive(Clone)]
pub struct SalesService {
    db: PgPool,
}

/// Input for recording a sale
#[derive(Debug, Deserialize)]
pub struct RecordSaleInput {
    pub product_id: Uuid,
    pub quantity: i32,
    pub sales_date: NaiveDate,
}

#[derive(Debug, FromRow)]
struct SalesRow {
    id: Uuid,
    product_id: Uuid,
    quantity: i32,
    sales_date: NaiveDate,
    import_file_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl From<SalesRow> for Sales {
    fn from(row: SalesRow) -> Self {
        Sales {
            id: row.id,
            product_id: row.product_id,
            quantity: row.quantity,
            sales_date: row.sales_date,
            import_file_id: row.import_file_id,
            created_at: row.created_at,
        }
    }
}

/// Stock ledger check: a sale of `requested` units is allowed while purchased
/// stock covers already-sold stock plus the candidate quantity.
fn within_stock(total_purchased: i64, total_sold: i64, requested: i64) -> bool {
    total_purchased >= total_sold + requested
}

impl SalesService {
    /// Create a new SalesService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a sale, rejecting it when it would oversell the product
    pub async fn record_sale(&self, input: RecordSaleInput) -> AppResult<Sales> {
        validate_quantity(input.quantity).map_err(|msg| AppError::Validation {
            field: "quantity".to_string(),
            message: msg.to_string(),
        })?;

        let mut tx = self.db.begin().await?;

        // The row lock serializes sales per product; without it two writers
        // could both read a stale aggregate and jointly oversell.
        let product = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM products WHERE id = $1 FOR UPDATE",
        )
        .bind(input.product_id)
        .fetch_optional(&mut *tx)
        .await?;

        if product.is_none() {
            return Err(AppError::NotFound("Product".to_string()));
        }

        let total_purchased = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(quantity), 0) FROM purchases WHERE product_id = $1",
        )
        .bind(input.product_id)
        .fetch_one(&mut *tx)
        .await?;

        let total_sold = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(quantity), 0) FROM sales WHERE product_id = $1",
        )
        .bind(input.product_id)
        .fetch_one(&mut *tx)
        .await?;

        if !within_stock(total_purchased, total_sold, i64::from(input.quantity)) {
            return Err(AppError::StockExceeded(format!(
                "Cannot sell {} units: {} purchased, {} already sold",
                input.quantity, total_purchased, total_sold
            )));
        }

        let row = sqlx::query_as::<_, SalesRow>(
            r#"
            INSERT INTO sales (product_id, quantity, sales_date)
            VALUES ($1, $2, $3)
            RETURNING id, product_id, quantity, sales_date, import_file_id, created_at
            "#,
        )
        .bind(input.product_id)
        .bind(input.quantity)
        .bind(input.sales_date)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    /// Sales totals per calendar month, ascending by month
    pub async fn monthly_summary(&self) -> AppResult<Vec<MonthlySales>> {
        let rows = sqlx::query_as::<_, (NaiveDate, i64)>(
            r#"
            SELECT date_trunc('month', sales_date)::date AS monthly_date,
                   SUM(quantity) AS monthly_quantity
            FROM sales
            GROUP BY monthly_date
            ORDER BY monthly_date
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(monthly_date, monthly_quantity)| MonthlySales {
                monthly_date,
                monthly_quantity,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sale_allowed_while_stock_covers_it() {
        assert!(within_stock(10, 0, 10));
        assert!(within_stock(10, 4, 6));
        assert!(within_stock(10, 4, 1));
    }

    #[test]
    fn oversell_is_rejected() {
        assert!(!within_stock(10, 4, 7));
        assert!(!within_stock(0, 0, 1));
        assert!(!within_stock(5, 5, 1));
    }

    #[test]
    fn zero_stock_allows_nothing_but_zero() {
        assert!(within_stock(0, 0, 0));
        assert!(!within_stock(0, 0, 1));
    }
}
