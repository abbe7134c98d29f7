//! HTTP handler for the combined inventory view

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::inventory::InventoryRecord;
use crate::services::InventoryService;
use crate::AppState;

/// All purchases and sales of one product, ordered by date
pub async fn get_product_ledger(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> AppResult<Json<Vec<InventoryRecord>>> {
    let service = InventoryService::new(state.db);
    let records = service.product_ledger(product_id).await?;
    Ok(Json(records))
}

/// `/inventory/` without a product id is a client error, not an unknown route
pub async fn get_product_ledger_missing_id() -> AppError {
    AppError::ValidationError("Product id is required".to_string())
}
