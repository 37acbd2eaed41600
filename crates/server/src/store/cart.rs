//! In-memory shopping cart.

use lumina_core::{CartLine, Product, ProductId};
use rust_decimal::Decimal;

/// The shopping cart: at most one line per distinct product id.
///
/// `total` and `item_count` are recomputed on every read, so they can never
/// drift from the line collection.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `product`: bumps the existing line's quantity, or
    /// appends a new line with quantity 1.
    pub fn add(&mut self, product: Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::new(product));
        }
    }

    /// Remove the line for `id` if present; no-op otherwise.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|l| l.product.id != id);
    }

    /// Set the quantity of the line for `id`; zero removes the line.
    /// No-op if the id is absent.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == id) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `price x quantity` across all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use lumina_core::Price;

    use super::*;

    fn product(name: &str, cents: i64) -> Product {
        Product {
            id: ProductId::generate(),
            name: name.to_string(),
            description: String::new(),
            price: Price::usd(Decimal::new(cents, 2)),
            category: "Test".to_string(),
            image: String::new(),
            stock: 10,
            rating: Decimal::ZERO,
        }
    }

    #[test]
    fn test_each_add_increments_item_count_by_one() {
        let mut cart = CartStore::new();
        let a = product("A", 1000);
        let b = product("B", 2500);

        cart.add(a.clone());
        cart.add(b.clone());
        cart.add(a.clone());
        cart.add(a);
        cart.add(b);

        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_adding_same_product_does_not_duplicate_lines() {
        let mut cart = CartStore::new();
        let p = product("A", 1000);
        cart.add(p.clone());
        cart.add(p);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_update_quantity_zero_equals_remove() {
        let p = product("A", 1000);

        let mut removed = CartStore::new();
        removed.add(p.clone());
        removed.remove(p.id);

        let mut zeroed = CartStore::new();
        zeroed.add(p.clone());
        zeroed.update_quantity(p.id, 0);

        assert_eq!(removed.lines(), zeroed.lines());
        assert!(zeroed.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_quantity() {
        let mut cart = CartStore::new();
        let p = product("A", 1000);
        cart.add(p.clone());
        cart.update_quantity(p.id, 7);

        assert_eq!(cart.item_count(), 7);
        assert_eq!(cart.total(), Decimal::new(7000, 2));
    }

    #[test]
    fn test_update_and_remove_absent_id_are_noops() {
        let mut cart = CartStore::new();
        cart.add(product("A", 1000));

        let absent = ProductId::generate();
        cart.update_quantity(absent, 3);
        cart.remove(absent);

        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_total_is_dot_product_of_price_and_quantity() {
        let mut cart = CartStore::new();
        let a = product("A", 1099);
        let b = product("B", 250);
        cart.add(a.clone());
        cart.add(b.clone());
        cart.update_quantity(a.id, 3);
        cart.update_quantity(b.id, 2);

        // 3 x 10.99 + 2 x 2.50
        assert_eq!(cart.total(), Decimal::new(3797, 2));
    }

    #[test]
    fn test_add_then_remove_round_trips() {
        let mut cart = CartStore::new();
        let a = product("A", 1000);
        let b = product("B", 2000);
        cart.add(a.clone());
        cart.add(b.clone());

        let before = cart.lines().to_vec();
        let extra = product("C", 500);
        cart.add(extra.clone());
        cart.remove(extra.id);

        assert_eq!(cart.lines(), before);
    }

    #[test]
    fn test_clear_zeroes_all_derived_values() {
        let mut cart = CartStore::new();
        cart.add(product("A", 1000));
        cart.add(product("B", 2000));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_update_remove_scenario() {
        let mut cart = CartStore::new();
        let p1 = product("P1", 1000);

        cart.add(p1.clone());
        assert_eq!(cart.total(), Decimal::new(1000, 2));
        assert_eq!(cart.item_count(), 1);

        cart.add(p1.clone());
        assert_eq!(cart.total(), Decimal::new(2000, 2));
        assert_eq!(cart.item_count(), 2);

        cart.update_quantity(p1.id, 1);
        assert_eq!(cart.total(), Decimal::new(1000, 2));
        assert_eq!(cart.item_count(), 1);

        cart.remove(p1.id);
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.item_count(), 0);
    }
}
