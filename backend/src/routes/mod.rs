//! Route definitions for the inventory management backend
//!
//! The paths here are the durable API contract. Auth routes are public;
//! everything else requires a valid `access` cookie.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Auth routes (public)
        .route("/login", post(handlers::login))
        .route("/retry", post(handlers::refresh))
        .route("/logout", post(handlers::logout))
        // Protected routes - product catalog
        .nest("/products", product_routes(state.clone()))
        // Protected routes - purchase ledger
        .nest("/purchases", purchase_routes(state.clone()))
        // Protected routes - sales ledger and imports
        .nest("/sales", sales_routes(state.clone()))
        // Protected routes - combined inventory view
        .nest("/inventory", inventory_routes(state))
}

/// Product CRUD routes (protected)
fn product_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/:product_id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Purchase routes (protected, create-only)
fn purchase_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::record_purchase))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Sales routes (protected): direct creation, monthly aggregation, imports
fn sales_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::record_sale))
        .route("/monthly", get(handlers::monthly_sales))
        .route("/sync", post(handlers::import_sales_sync))
        .route("/async", post(handlers::import_sales_async))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Inventory view routes (protected)
fn inventory_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_product_ledger_missing_id))
        .route("/:product_id", get(handlers::get_product_ledger))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
