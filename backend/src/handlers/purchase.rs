//! HTTP handlers for purchase endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::services::purchase::RecordPurchaseInput;
use crate::services::PurchaseService;
use crate::AppState;
use crate::models::Purchase;

/// Record stock received for a product
pub async fn record_purchase(
    State(state): State<AppState>,
    Json(input): Json<RecordPurchaseInput>,
) -> AppResult<(StatusCode, Json<Purchase>)> {
    let service = PurchaseService::new(state.db);
    let purchase = service.record_purchase(input).await?;
    Ok((StatusCode::CREATED, Json(purchase)))
}
