//! Admin route handlers: inventory management, AI description generation,
//! and the dashboard overview.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use lumina_core::{Price, Product, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Stock assigned to admin-created products when none is given.
const DEFAULT_STOCK: u32 = 10;
/// Description used when the admin form leaves the field blank.
const NO_DESCRIPTION: &str = "No description provided.";

/// Canned weekly sales series backing the overview charts.
const WEEKLY_SALES: [(&str, u32, u32); 7] = [
    ("Mon", 4000, 2400),
    ("Tue", 3000, 1398),
    ("Wed", 2000, 9800),
    ("Thu", 2780, 3908),
    ("Fri", 1890, 4800),
    ("Sat", 2390, 3800),
    ("Sun", 3490, 4300),
];

/// Payload for creating a product. Unset fields get the admin-form defaults.
#[derive(Debug, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub rating: Option<Decimal>,
}

/// Payload for AI description generation.
#[derive(Debug, Deserialize)]
pub struct DescribeRequest {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub features: String,
}

/// Generated description response.
#[derive(Debug, Serialize)]
pub struct DescribeResponse {
    pub description: String,
}

/// One point of the weekly sales series.
#[derive(Debug, Clone, Serialize)]
pub struct SalesPoint {
    pub label: &'static str,
    pub sales: u32,
    pub visitors: u32,
}

/// Dashboard overview stats.
#[derive(Debug, Serialize)]
pub struct DashboardOverview {
    pub total_revenue: Decimal,
    pub revenue_delta: &'static str,
    pub total_orders: u32,
    pub orders_delta: &'static str,
    /// Products with stock below the low-stock threshold.
    pub low_stock_count: usize,
    pub weekly_sales: Vec<SalesPoint>,
}

/// Create a product with a fresh id and prepend it to the catalog.
#[instrument(skip(state, form))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(form): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>)> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("name cannot be empty".to_string()));
    }
    if form.price < Decimal::ZERO {
        return Err(AppError::BadRequest("price cannot be negative".to_string()));
    }

    let product = Product {
        id: ProductId::generate(),
        name: name.to_string(),
        description: form
            .description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        price: Price::usd(form.price),
        category: form.category,
        image: form.image.unwrap_or_else(placeholder_image),
        stock: form.stock.unwrap_or(DEFAULT_STOCK),
        rating: form.rating.unwrap_or(Decimal::ZERO),
    };

    state.catalog_mut().add(product.clone());
    Ok((StatusCode::CREATED, Json(product)))
}

/// Delete a product. No-op if the id is unknown; existing cart lines for
/// the product are left untouched.
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> StatusCode {
    state.catalog_mut().delete(id);
    StatusCode::NO_CONTENT
}

/// Generate a product description via the assistant service.
#[instrument(skip(state, request))]
pub async fn describe(
    State(state): State<AppState>,
    Json(request): Json<DescribeRequest>,
) -> Result<Json<DescribeResponse>> {
    if request.name.trim().is_empty() {
        return Err(AppError::BadRequest("name cannot be empty".to_string()));
    }

    let description = state
        .assistant()
        .generate_product_description(&request.name, &request.category, &request.features)
        .await;

    Ok(Json(DescribeResponse { description }))
}

/// Dashboard overview: canned revenue/order figures plus stats derived from
/// the live catalog.
#[instrument(skip(state))]
pub async fn dashboard(State(state): State<AppState>) -> Json<DashboardOverview> {
    Json(DashboardOverview {
        total_revenue: Decimal::new(2_459_200, 2),
        revenue_delta: "+12% from last week",
        total_orders: 456,
        orders_delta: "+5% from last week",
        low_stock_count: state.catalog().low_stock_count(),
        weekly_sales: WEEKLY_SALES
            .iter()
            .map(|&(label, sales, visitors)| SalesPoint {
                label,
                sales,
                visitors,
            })
            .collect(),
    })
}

/// Image URL for admin-created products without an explicit image.
fn placeholder_image() -> String {
    format!("https://picsum.photos/400/400?random={}", rand::random::<u32>())
}
