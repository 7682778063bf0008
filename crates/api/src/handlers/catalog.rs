//! Handlers for the product catalog.

use axum::extract::Query;
use axum::Json;
use lookbook_core::catalog::{self, Product};
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;

/// Query parameters for product listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Optional category filter. Unknown categories yield an empty list.
    pub category: Option<String>,
}

/// GET /api/v1/products
///
/// List catalog products, optionally filtered by category.
pub async fn list_products(
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<Product>>>> {
    let products = match params.category.as_deref() {
        Some(category) => catalog::products_in_category(category),
        None => catalog::all_products(),
    };
    Ok(Json(DataResponse::new(products)))
}
