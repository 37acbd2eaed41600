//! Cart route handlers.
//!
//! Every mutation returns the resulting cart view so the client can render
//! without a follow-up read.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use lumina_core::{CartLine, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::store::CartStore;

/// Checkout confirmation text. Checkout is a stub: no payment is taken and
/// the cart is left as-is.
const CHECKOUT_MESSAGE: &str =
    "Simulating checkout... In a real app, this would connect to Stripe.";

/// Cart display data.
#[derive(Debug, Serialize)]
pub struct CartView {
    /// Cart lines in insertion order.
    pub lines: Vec<CartLine>,
    /// Sum of price x quantity across all lines.
    pub total: Decimal,
    /// Sum of quantities across all lines.
    pub item_count: u32,
}

impl CartView {
    fn from_store(cart: &CartStore) -> Self {
        Self {
            lines: cart.lines().to_vec(),
            total: cart.total(),
            item_count: cart.item_count(),
        }
    }
}

/// Checkout confirmation data.
#[derive(Debug, Serialize)]
pub struct CheckoutView {
    /// Human-readable confirmation text.
    pub message: String,
    /// Order total at the time of checkout.
    pub total: Decimal,
    /// Number of units in the order.
    pub item_count: u32,
}

/// Add to cart payload.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
}

/// Update quantity payload.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Remove from cart payload.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub product_id: ProductId,
}

/// Current cart contents.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    Json(CartView::from_store(&state.cart()))
}

/// Add one unit of a catalog product to the cart.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartView>> {
    let product = state
        .catalog()
        .get(request.product_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {}", request.product_id)))?;

    let mut cart = state.cart_mut();
    cart.add(product);
    Ok(Json(CartView::from_store(&cart)))
}

/// Set a line's quantity; zero removes the line.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateCartRequest>,
) -> Json<CartView> {
    let mut cart = state.cart_mut();
    cart.update_quantity(request.product_id, request.quantity);
    Json(CartView::from_store(&cart))
}

/// Remove a line from the cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Json(request): Json<RemoveFromCartRequest>,
) -> Json<CartView> {
    let mut cart = state.cart_mut();
    cart.remove(request.product_id);
    Json(CartView::from_store(&cart))
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Json<CartView> {
    let mut cart = state.cart_mut();
    cart.clear();
    Json(CartView::from_store(&cart))
}

/// Mock checkout: reports what would have been ordered.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Result<Json<CheckoutView>> {
    let cart = state.cart();
    if cart.is_empty() {
        return Err(AppError::BadRequest("cart is empty".to_string()));
    }

    Ok(Json(CheckoutView {
        message: CHECKOUT_MESSAGE.to_string(),
        total: cart.total(),
        item_count: cart.item_count(),
    }))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use lumina_core::{Price, Product};

    use super::*;

    fn product(cents: i64) -> Product {
        Product {
            id: ProductId::generate(),
            name: "Test".to_string(),
            description: String::new(),
            price: Price::usd(Decimal::new(cents, 2)),
            category: "Test".to_string(),
            image: String::new(),
            stock: 1,
            rating: Decimal::ZERO,
        }
    }

    #[test]
    fn test_cart_view_mirrors_store() {
        let mut cart = CartStore::new();
        let p = product(1250);
        cart.add(p.clone());
        cart.add(p);

        let view = CartView::from_store(&cart);
        assert_eq!(view.item_count, 2);
        assert_eq!(view.total, Decimal::new(2500, 2));
        assert_eq!(view.lines.len(), 1);
    }

    #[test]
    fn test_empty_cart_view_is_zeroed() {
        let view = CartView::from_store(&CartStore::new());
        assert_eq!(view.item_count, 0);
        assert_eq!(view.total, Decimal::ZERO);
        assert!(view.lines.is_empty());
    }
}
