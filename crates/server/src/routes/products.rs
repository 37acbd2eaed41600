//! Product catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use lumina_core::{Product, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Catalog filter query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    /// Category label; `All` or absent matches every category.
    pub category: Option<String>,
    /// Case-insensitive name search term.
    pub q: Option<String>,
}

/// List catalog products, optionally filtered by category and search term.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<Product>> {
    let products = state
        .catalog()
        .search(query.category.as_deref(), query.q.as_deref());
    Json(products)
}

/// Distinct category labels, in catalog order.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog().categories())
}

/// Product detail.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    state
        .catalog()
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}
