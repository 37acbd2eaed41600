//! Product and cart-line types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// A product available for sale.
///
/// Products are created by the catalog seed data or by an admin add-action
/// and are immutable afterwards (removal aside).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Marketing description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Free-text category label (e.g., "Electronics").
    pub category: String,
    /// Image URL.
    pub image: String,
    /// Units on hand.
    pub stock: u32,
    /// Average rating, 0 to 5.
    pub rating: Decimal,
}

/// One product plus the quantity of that product held in the cart.
///
/// Serializes flat: the product's fields plus `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Snapshot of the product at the time it was added.
    #[serde(flatten)]
    pub product: Product,
    /// Quantity held in the cart. Always positive.
    pub quantity: u32,
}

impl CartLine {
    /// Create a line holding a single unit of `product`.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.amount * Decimal::from(self.quantity)
    }
}
