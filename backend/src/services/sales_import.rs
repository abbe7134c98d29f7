//! Bulk sales import pipeline
//!
//! Uploaded files are written under the configured upload directory keyed by
//! their original name; a duplicate name overwrites the earlier file. Each
//! upload is tracked as a `sales_files` row. Synchronous imports are parsed
//! and ingested within the request; asynchronous imports are only registered
//! here and left for an external worker to process.

use std::path::PathBuf;

use serde::Serialize;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::Config;
use shared::import::{parse_sales_csv, SalesCsvRow};
use shared::models::SalesFile;
use shared::types::SalesFileStatus;
use shared::validation::validate_upload_filename;

/// Service handling the `/sales/sync` and `/sales/async` import paths
#[derive(Clone)]
pub struct SalesImportService {
    db: PgPool,
    upload_dir: PathBuf,
}

/// Result of a completed synchronous import
#[derive(Debug, Serialize)]
pub struct SyncImportReport {
    pub sales_file: SalesFile,
    pub rows_imported: usize,
}

#[derive(Debug, FromRow)]
struct SalesFileRow {
    id: Uuid,
    file_name: String,
    status: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<SalesFileRow> for SalesFile {
    type Error = AppError;

    fn try_from(row: SalesFileRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<SalesFileStatus>()
            .map_err(AppError::Internal)?;
        Ok(SalesFile {
            id: row.id,
            file_name: row.file_name,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl SalesImportService {
    /// Create a new SalesImportService instance
    pub fn new(db: PgPool, config: &Config) -> Self {
        Self {
            db,
            upload_dir: PathBuf::from(&config.upload.dir),
        }
    }

    /// Import a sales file within the request
    ///
    /// The file is parsed in full before anything is written to the database;
    /// any malformed row or missing column fails the whole batch and no sales
    /// row or import record is persisted.
    pub async fn import_sync(&self, file_name: &str, data: &[u8]) -> AppResult<SyncImportReport> {
        self.store_file(file_name, data).await?;

        let rows = parse_sales_csv(data).map_err(|e| AppError::CsvImport(e.to_string()))?;

        let mut tx = self.db.begin().await?;

        self.check_products_exist(&mut tx, &rows).await?;

        let sales_file =
            Self::insert_sales_file(&mut tx, file_name, SalesFileStatus::SyncProcessed).await?;

        for row in &rows {
            sqlx::query(
                r#"
                INSERT INTO sales (product_id, quantity, sales_date, import_file_id)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(row.product)
            .bind(row.quantity)
            .bind(row.date)
            .bind(sales_file.id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(
            file_name,
            rows = rows.len(),
            "synchronous sales import completed"
        );

        Ok(SyncImportReport {
            sales_file,
            rows_imported: rows.len(),
        })
    }

    /// Register a sales file for asynchronous processing
    ///
    /// The file is persisted and tracked as `async_unprocessed`; the import
    /// worker later moves the record to a terminal status.
    pub async fn import_async(&self, file_name: &str, data: &[u8]) -> AppResult<SalesFile> {
        self.store_file(file_name, data).await?;

        let mut tx = self.db.begin().await?;
        let sales_file =
            Self::insert_sales_file(&mut tx, file_name, SalesFileStatus::AsyncUnprocessed).await?;
        tx.commit().await?;

        tracing::info!(file_name, "sales file registered for asynchronous import");

        Ok(sales_file)
    }

    /// Write the uploaded bytes under the upload directory
    async fn store_file(&self, file_name: &str, data: &[u8]) -> AppResult<()> {
        validate_upload_filename(file_name).map_err(|msg| AppError::Validation {
            field: "file".to_string(),
            message: msg.to_string(),
        })?;

        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|e| AppError::StorageError(e.to_string()))?;

        let path = self.upload_dir.join(file_name);
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| AppError::StorageError(e.to_string()))?;

        Ok(())
    }

    /// Reject the batch when any row references an unknown product
    async fn check_products_exist(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        rows: &[SalesCsvRow],
    ) -> AppResult<()> {
        let mut product_ids: Vec<Uuid> = rows.iter().map(|r| r.product).collect();
        product_ids.sort_unstable();
        product_ids.dedup();

        if product_ids.is_empty() {
            return Ok(());
        }

        let known = sqlx::query_scalar::<_, Uuid>("SELECT id FROM products WHERE id = ANY($1)")
            .bind(&product_ids)
            .fetch_all(&mut **tx)
            .await?;

        if let Some(missing) = product_ids.iter().find(|id| !known.contains(id)) {
            return Err(AppError::CsvImport(format!(
                "unknown product id: {}",
                missing
            )));
        }

        Ok(())
    }

    async fn insert_sales_file(
        tx: &mut Transaction<'_, Postgres>,
        file_name: &str,
        status: SalesFileStatus,
    ) -> AppResult<SalesFile> {
        let row = sqlx::query_as::<_, SalesFileRow>(
            r#"
            INSERT INTO sales_files (file_name, status)
            VALUES ($1, $2)
            RETURNING id, file_name, status, created_at, updated_at
            "#,
        )
        .bind(file_name)
        .bind(status.as_str())
        .fetch_one(&mut **tx)
        .await?;

        row.try_into()
    }
}
