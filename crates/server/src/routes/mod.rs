//! HTTP route handlers for the server.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                - Health check
//!
//! # Products
//! GET    /products              - Product listing (?category=&q=)
//! GET    /products/categories   - Distinct category labels
//! GET    /products/{id}         - Product detail
//!
//! # Cart
//! GET    /cart                  - Cart contents
//! POST   /cart/add              - Add one unit of a product
//! POST   /cart/update           - Set a line's quantity (0 removes)
//! POST   /cart/remove           - Remove a line
//! POST   /cart/clear            - Empty the cart
//! POST   /cart/checkout         - Mock checkout
//!
//! # Chat
//! GET    /chat                  - Transcript
//! POST   /chat                  - Send a message, returns the reply
//!
//! # Admin
//! POST   /admin/products        - Create a product
//! DELETE /admin/products/{id}   - Delete a product
//! POST   /admin/describe        - Generate a product description
//! GET    /admin/dashboard       - Dashboard overview
//! ```

pub mod admin;
pub mod cart;
pub mod chat;
pub mod products;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/categories", get(products::categories))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/checkout", post(cart::checkout))
}

/// Create the chat routes router.
pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/", get(chat::transcript).post(chat::send))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(admin::create_product))
        .route("/products/{id}", delete(admin::delete_product))
        .route("/describe", post(admin::describe))
        .route("/dashboard", get(admin::dashboard))
}

/// Combine all route groups.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/chat", chat_routes())
        .nest("/admin", admin_routes())
}

/// Build the full application router, including health and middleware.
///
/// The browser front-end is served separately, so CORS is wide open.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
