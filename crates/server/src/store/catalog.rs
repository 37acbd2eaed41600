//! In-memory product catalog.

use lumina_core::{Price, Product, ProductId};
use rust_decimal::Decimal;

/// Stock level below which a product counts as "low stock" on the dashboard.
pub const LOW_STOCK_THRESHOLD: u32 = 35;

/// The mutable collection of products available for sale.
///
/// Ordered newest-first: admin additions are prepended, matching the
/// storefront display order.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// An empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// The demo catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            products: seed_products(),
        }
    }

    /// Prepend a product. The caller supplies a fresh id; no uniqueness
    /// check is made against existing entries.
    pub fn add(&mut self, product: Product) {
        self.products.insert(0, product);
    }

    /// Remove the product with `id` if present; no-op otherwise.
    ///
    /// Cart lines referencing the product are left untouched - they hold
    /// their own snapshot.
    pub fn delete(&mut self, id: ProductId) {
        self.products.retain(|p| p.id != id);
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products, in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Filter by category and case-insensitive name substring.
    ///
    /// A `category` of `None` or `"All"` matches every category; a `term`
    /// of `None` matches every name.
    #[must_use]
    pub fn search(&self, category: Option<&str>, term: Option<&str>) -> Vec<Product> {
        let term_lower = term.map(str::to_lowercase);
        self.products
            .iter()
            .filter(|p| {
                let matches_category =
                    category.is_none_or(|c| c == "All" || p.category == c);
                let matches_term = term_lower
                    .as_deref()
                    .is_none_or(|t| p.name.to_lowercase().contains(t));
                matches_category && matches_term
            })
            .cloned()
            .collect()
    }

    /// Distinct category labels, in catalog order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    /// Number of products with stock below [`LOW_STOCK_THRESHOLD`].
    #[must_use]
    pub fn low_stock_count(&self) -> usize {
        self.products
            .iter()
            .filter(|p| p.stock < LOW_STOCK_THRESHOLD)
            .count()
    }
}

/// The six demo products the storefront launches with.
fn seed_products() -> Vec<Product> {
    vec![
        seed_product(
            "Minimalist Leather Watch",
            "A sleek, genuine leather watch with a minimalist dial. Perfect for everyday elegance.",
            Decimal::new(12999, 2),
            "Accessories",
            1,
            45,
            Decimal::new(48, 1),
        ),
        seed_product(
            "Wireless Noise-Canceling Headphones",
            "Immerse yourself in music with industry-leading noise cancellation and 30-hour battery life.",
            Decimal::new(24950, 2),
            "Electronics",
            2,
            20,
            Decimal::new(49, 1),
        ),
        seed_product(
            "Organic Cotton Crewneck",
            "Sustainably sourced, ultra-soft organic cotton sweater. Breathable and durable.",
            Decimal::new(5500, 2),
            "Apparel",
            3,
            100,
            Decimal::new(45, 1),
        ),
        seed_product(
            "Ceramic Pour-Over Set",
            "Handcrafted ceramic coffee dripper and carafe for the perfect morning brew.",
            Decimal::new(4500, 2),
            "Home",
            4,
            15,
            Decimal::new(47, 1),
        ),
        seed_product(
            "Smart Fitness Tracker",
            "Track your steps, heart rate, and sleep quality with this waterproof smart band.",
            Decimal::new(8999, 2),
            "Electronics",
            5,
            60,
            Decimal::new(42, 1),
        ),
        seed_product(
            "Canvas Weekender Bag",
            "Durable canvas travel bag with leather accents. Spacious enough for a 3-day trip.",
            Decimal::new(11000, 2),
            "Travel",
            6,
            30,
            Decimal::new(46, 1),
        ),
    ]
}

fn seed_product(
    name: &str,
    description: &str,
    price: Decimal,
    category: &str,
    image_seed: u32,
    stock: u32,
    rating: Decimal,
) -> Product {
    Product {
        id: ProductId::generate(),
        name: name.to_string(),
        description: description.to_string(),
        price: Price::usd(price),
        category: category.to_string(),
        image: format!("https://picsum.photos/400/400?random={image_seed}"),
        stock,
        rating,
    }
}
