//! Product catalog service

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::Product;
use shared::validation::{validate_price, validate_product_name};

/// Product CRUD service
#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

/// Input for creating or replacing a product
#[derive(Debug, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    price: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            price: row.price,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Register a new product
    pub async fn create(&self, input: ProductInput) -> AppResult<Product> {
        Self::validate(&input)?;

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, price)
            VALUES ($1, $2)
            RETURNING id, name, price, created_at, updated_at
            "#,
        )
        .bind(input.name.trim())
        .bind(input.price)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Fetch a single product by id
    pub async fn get(&self, product_id: Uuid) -> AppResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, price, created_at, updated_at FROM products WHERE id = $1",
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        Ok(row.into())
    }

    /// List all products
    pub async fn list(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, price, created_at, updated_at FROM products ORDER BY created_at",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Replace a product's name and price
    pub async fn update(&self, product_id: Uuid, input: ProductInput) -> AppResult<Product> {
        Self::validate(&input)?;

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products
            SET name = $1, price = $2, updated_at = NOW()
            WHERE id = $3
            RETURNING id, name, price, created_at, updated_at
            "#,
        )
        .bind(input.name.trim())
        .bind(input.price)
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        Ok(row.into())
    }

    /// Delete a product
    pub async fn delete(&self, product_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Product".to_string()));
        }

        Ok(())
    }

    fn validate(input: &ProductInput) -> AppResult<()> {
        validate_product_name(&input.name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
        })?;
        validate_price(input.price).map_err(|msg| AppError::Validation {
            field: "price".to_string(),
            message: msg.to_string(),
        })?;
        Ok(())
    }
}
