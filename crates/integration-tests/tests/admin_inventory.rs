//! Admin product management and dashboard over HTTP.

use serde_json::{Value, json};

use lumina_integration_tests::TestServer;

async fn create_product(server: &TestServer, body: Value) -> reqwest::Response {
    server
        .client
        .post(server.url("/admin/products"))
        .json(&body)
        .send()
        .await
        .expect("send")
}

#[tokio::test]
async fn test_create_product_applies_admin_form_defaults() {
    let server = TestServer::spawn().await;

    let response = create_product(
        &server,
        json!({ "name": "Walnut Desk Organizer", "price": "34.00", "category": "Home" }),
    )
    .await;
    assert_eq!(response.status(), 201);

    let product: Value = response.json().await.expect("json");
    assert_eq!(product["name"], "Walnut Desk Organizer");
    assert_eq!(product["price"]["amount"], "34.00");
    assert_eq!(product["stock"], 10);
    assert_eq!(product["rating"], "0");
    assert_eq!(product["description"], "No description provided.");
    assert!(
        product["image"]
            .as_str()
            .expect("image")
            .starts_with("https://picsum.photos/400/400?random=")
    );
}

#[tokio::test]
async fn test_created_product_is_listed_first() {
    let server = TestServer::spawn().await;

    create_product(
        &server,
        json!({ "name": "Walnut Desk Organizer", "price": "34.00", "category": "Home" }),
    )
    .await;

    let products: Value = server
        .client
        .get(server.url("/products"))
        .send()
        .await
        .expect("send")
        .json()
        .await
        .expect("json");
    let products = products.as_array().expect("array");
    assert_eq!(products.len(), 7);
    assert_eq!(
        products.first().expect("non-empty")["name"],
        "Walnut Desk Organizer"
    );
}

#[tokio::test]
async fn test_create_product_rejects_blank_name() {
    let server = TestServer::spawn().await;

    let response = create_product(
        &server,
        json!({ "name": "   ", "price": "34.00", "category": "Home" }),
    )
    .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_delete_product() {
    let server = TestServer::spawn().await;

    let created: Value = create_product(
        &server,
        json!({ "name": "Walnut Desk Organizer", "price": "34.00", "category": "Home" }),
    )
    .await
    .json()
    .await
    .expect("json");
    let id = created["id"].as_str().expect("id").to_string();

    let response = server
        .client
        .delete(server.url(&format!("/admin/products/{id}")))
        .send()
        .await
        .expect("send");
    assert_eq!(response.status(), 204);

    let detail = server
        .client
        .get(server.url(&format!("/products/{id}")))
        .send()
        .await
        .expect("send");
    assert_eq!(detail.status(), 404);
}

#[tokio::test]
async fn test_delete_unknown_product_is_noop() {
    let server = TestServer::spawn().await;

    let response = server
        .client
        .delete(server.url("/admin/products/00000000-0000-0000-0000-000000000000"))
        .send()
        .await
        .expect("send");
    assert_eq!(response.status(), 204);

    let products: Value = server
        .client
        .get(server.url("/products"))
        .send()
        .await
        .expect("send")
        .json()
        .await
        .expect("json");
    assert_eq!(products.as_array().expect("array").len(), 6);
}

#[tokio::test]
async fn test_catalog_delete_does_not_cascade_into_cart() {
    let server = TestServer::spawn().await;

    let products: Value = server
        .client
        .get(server.url("/products"))
        .send()
        .await
        .expect("send")
        .json()
        .await
        .expect("json");
    let first = products.as_array().expect("array").first().expect("seeded");
    let id = first["id"].as_str().expect("id").to_string();

    server
        .client
        .post(server.url("/cart/add"))
        .json(&json!({ "product_id": id }))
        .send()
        .await
        .expect("send");

    server
        .client
        .delete(server.url(&format!("/admin/products/{id}")))
        .send()
        .await
        .expect("send");

    // The product is gone from the catalog but its cart line survives.
    let detail = server
        .client
        .get(server.url(&format!("/products/{id}")))
        .send()
        .await
        .expect("send");
    assert_eq!(detail.status(), 404);

    let cart: Value = server
        .client
        .get(server.url("/cart"))
        .send()
        .await
        .expect("send")
        .json()
        .await
        .expect("json");
    assert_eq!(cart["item_count"], 1);
    assert_eq!(
        cart["lines"].as_array().expect("lines").first().expect("line")["id"],
        Value::String(id)
    );
}

#[tokio::test]
async fn test_dashboard_overview() {
    let server = TestServer::spawn().await;

    let overview: Value = server
        .client
        .get(server.url("/admin/dashboard"))
        .send()
        .await
        .expect("send")
        .json()
        .await
        .expect("json");

    assert_eq!(overview["total_orders"], 456);
    assert_eq!(overview["total_revenue"], "24592.00");
    // Seed stocks 20, 15, and 30 fall below the low-stock threshold.
    assert_eq!(overview["low_stock_count"], 3);

    let weekly = overview["weekly_sales"].as_array().expect("series");
    assert_eq!(weekly.len(), 7);
    assert_eq!(weekly.first().expect("Mon")["label"], "Mon");
}

#[tokio::test]
async fn test_dashboard_low_stock_tracks_catalog() {
    let server = TestServer::spawn().await;

    // Default stock of 10 is below the threshold.
    create_product(
        &server,
        json!({ "name": "Walnut Desk Organizer", "price": "34.00", "category": "Home" }),
    )
    .await;

    let overview: Value = server
        .client
        .get(server.url("/admin/dashboard"))
        .send()
        .await
        .expect("send")
        .json()
        .await
        .expect("json");
    assert_eq!(overview["low_stock_count"], 4);
}
