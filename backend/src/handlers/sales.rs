//! HTTP handlers for sales endpoints: direct creation, monthly aggregation,
//! and the CSV bulk-import paths

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::services::sales::RecordSaleInput;
use crate::services::sales_import::SyncImportReport;
use crate::services::{SalesImportService, SalesService};
use crate::AppState;
use crate::models::{MonthlySales, Sales, SalesFile};

/// Record a sale, subject to the stock ledger check
pub async fn record_sale(
    State(state): State<AppState>,
    Json(input): Json<RecordSaleInput>,
) -> AppResult<(StatusCode, Json<Sales>)> {
    let service = SalesService::new(state.db);
    let sale = service.record_sale(input).await?;
    Ok((StatusCode::CREATED, Json(sale)))
}

/// Monthly sales aggregation, ascending by month
pub async fn monthly_sales(State(state): State<AppState>) -> AppResult<Json<Vec<MonthlySales>>> {
    let service = SalesService::new(state.db);
    let summary = service.monthly_summary().await?;
    Ok(Json(summary))
}

/// Import a sales CSV within the request
pub async fn import_sales_sync(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<SyncImportReport>)> {
    let (file_name, data) = extract_file(multipart).await?;
    tracing::info!(user_id = %user.user_id, file_name = %file_name, "sync sales import requested");

    let service = SalesImportService::new(state.db.clone(), &state.config);
    let report = service.import_sync(&file_name, &data).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

/// Register a sales CSV for asynchronous import
pub async fn import_sales_async(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<SalesFile>)> {
    let (file_name, data) = extract_file(multipart).await?;
    tracing::info!(user_id = %user.user_id, file_name = %file_name, "async sales import registered");

    let service = SalesImportService::new(state.db.clone(), &state.config);
    let sales_file = service.import_async(&file_name, &data).await?;
    Ok((StatusCode::CREATED, Json(sales_file)))
}

/// Pull the `file` part out of a multipart upload
async fn extract_file(mut multipart: Multipart) -> AppResult<(String, Vec<u8>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::ValidationError(format!("Invalid multipart request: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(|name| name.to_string())
            .ok_or_else(|| AppError::Validation {
                field: "file".to_string(),
                message: "Uploaded file must have a name".to_string(),
            })?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::ValidationError(format!("Failed to read upload: {}", e)))?;

        return Ok((file_name, data.to_vec()));
    }

    Err(AppError::Validation {
        field: "file".to_string(),
        message: "Missing file field in multipart request".to_string(),
    })
}
