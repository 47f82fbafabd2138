//! Integration tests for the storefront REST API
//!
//! These tests drive the full router and verify:
//! - Session lifecycle (login, renew, logout)
//! - Cart operations and summary recomputation
//! - Coupon application rules and error responses
//! - Checkout, order snapshots and tracking

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

// Import from the main crate
use storefront_cart_rust::cart::AppState;
use storefront_cart_rust::router::create_app_router;

/// Helper function to create a test app instance
fn create_test_app() -> axum::Router {
    let state = Arc::new(AppState::new());
    create_app_router(state)
}

/// Helper function to send a JSON request and get the response
async fn send_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(token) = token {
        builder = builder.header("x-token", token);
    }

    let body = match body {
        Some(value) => Body::from(serde_json::to_string(&value).unwrap()),
        None => Body::empty(),
    };
    let request = builder.body(body).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

/// Logs in and returns the session token
async fn login(app: &axum::Router) -> String {
    let (status, body) = send_request(
        app,
        "POST",
        "/api/auth",
        None,
        Some(json!({ "email": "maria@example.com", "password": "secret" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    body["token"].as_str().expect("token in response").to_string()
}

/// Adds the standard two-unit, 100-per-unit line to the cart
async fn seed_cart(app: &axum::Router, token: &str, unit_price: f64, quantity: u32) {
    let (status, _) = send_request(
        app,
        "POST",
        "/api/cart/items",
        Some(token),
        Some(json!({
            "items": [
                { "productId": "p1", "name": "Teclado", "unitPrice": unit_price, "quantity": quantity }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

fn assert_close(value: &Value, expected: f64) {
    let actual = value.as_f64().unwrap_or(f64::NAN);
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

fn shipping_body() -> Value {
    json!({
        "name": "Maria Lopez",
        "email": "maria@example.com",
        "phone": "+593 999999999",
        "address": "Av. Amazonas 123",
        "city": "Quito",
        "province": "Pichincha"
    })
}

// =============================================================================
// Session lifecycle
// =============================================================================

#[tokio::test]
async fn test_login_rejects_bad_input() {
    let app = create_test_app();

    let (status, body) = send_request(
        &app,
        "POST",
        "/api/auth",
        None,
        Some(json!({ "email": "not-an-email", "password": "secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], false);

    let (status, _) = send_request(
        &app,
        "POST",
        "/api/auth",
        None,
        Some(json!({ "email": "maria@example.com", "password": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cart_requires_session() {
    let app = create_test_app();

    let (status, body) = send_request(&app, "GET", "/api/cart", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["ok"], false);

    let (status, _) = send_request(&app, "GET", "/api/cart", Some("forged"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_renew_rotates_token_and_keeps_cart() {
    let app = create_test_app();
    let token = login(&app).await;
    seed_cart(&app, &token, 100.0, 2).await;

    let (status, body) = send_request(&app, "GET", "/api/auth/renew", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let new_token = body["token"].as_str().unwrap().to_string();
    assert_ne!(new_token, token);

    // The old token stops working, the new one sees the same cart
    let (status, _) = send_request(&app, "GET", "/api/cart", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send_request(&app, "GET", "/api/cart", Some(&new_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["itemCount"], 2);
}

#[tokio::test]
async fn test_logout_clears_session_and_cart() {
    let app = create_test_app();
    let token = login(&app).await;
    seed_cart(&app, &token, 100.0, 2).await;

    let (status, body) = send_request(&app, "DELETE", "/api/auth", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);

    let (status, _) = send_request(&app, "GET", "/api/cart", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Cart operations and summary
// =============================================================================

#[tokio::test]
async fn test_empty_cart_summary() {
    let app = create_test_app();
    let token = login(&app).await;

    let (status, body) = send_request(&app, "GET", "/api/cart", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let summary = &body["summary"];
    assert_close(&summary["subtotal"], 0.0);
    assert_eq!(summary["itemCount"], 0);
    assert_close(&summary["discount"], 0.0);
    assert_close(&summary["taxes"], 0.0);
    assert_close(&summary["shipping"], 30.0);
    assert_close(&summary["total"], 30.0);
}

#[tokio::test]
async fn test_cart_summary_without_coupon() {
    let app = create_test_app();
    let token = login(&app).await;
    seed_cart(&app, &token, 100.0, 2).await;

    let (status, body) = send_request(&app, "GET", "/api/cart", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let summary = &body["summary"];
    assert_close(&summary["subtotal"], 200.0);
    assert_eq!(summary["itemCount"], 2);
    assert_close(&summary["discount"], 0.0);
    assert_close(&summary["subtotalAfterDiscount"], 200.0);
    assert_close(&summary["taxes"], 30.0);
    assert_close(&summary["shipping"], 30.0);
    assert_close(&summary["total"], 260.0);
}

#[tokio::test]
async fn test_adding_same_product_aggregates_quantity() {
    let app = create_test_app();
    let token = login(&app).await;
    seed_cart(&app, &token, 100.0, 2).await;
    seed_cart(&app, &token, 100.0, 3).await;

    let (_, body) = send_request(&app, "GET", "/api/cart", Some(&token), None).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["quantity"], 5);
}

#[tokio::test]
async fn test_update_quantity() {
    let app = create_test_app();
    let token = login(&app).await;
    seed_cart(&app, &token, 100.0, 2).await;

    let (status, body) = send_request(
        &app,
        "PUT",
        "/api/cart/items/p1",
        Some(&token),
        Some(json!({ "quantity": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_close(&body["summary"]["subtotal"], 400.0);

    // Zero is rejected, removal is explicit
    let (status, _) = send_request(
        &app,
        "PUT",
        "/api/cart/items/p1",
        Some(&token),
        Some(json!({ "quantity": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown products are a 404
    let (status, _) = send_request(
        &app,
        "PUT",
        "/api/cart/items/ghost",
        Some(&token),
        Some(json!({ "quantity": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_item() {
    let app = create_test_app();
    let token = login(&app).await;
    seed_cart(&app, &token, 100.0, 2).await;

    let (status, body) =
        send_request(&app, "DELETE", "/api/cart/items/p1", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["items"].as_array().unwrap().is_empty());

    let (status, _) =
        send_request(&app, "DELETE", "/api/cart/items/p1", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Coupons
// =============================================================================

#[tokio::test]
async fn test_percent_coupon_summary() {
    let app = create_test_app();
    let token = login(&app).await;
    seed_cart(&app, &token, 100.0, 2).await;

    let (status, body) = send_request(
        &app,
        "POST",
        "/api/cart/coupon",
        Some(&token),
        Some(json!({ "code": "descuento10" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["coupon"], "DESCUENTO10");

    let summary = &body["summary"];
    assert_close(&summary["discount"], 20.0);
    assert_close(&summary["subtotalAfterDiscount"], 180.0);
    assert_close(&summary["taxes"], 27.0);
    assert_close(&summary["shipping"], 30.0);
    assert_close(&summary["total"], 237.0);
}

#[tokio::test]
async fn test_fixed_coupon_reaching_free_shipping() {
    let app = create_test_app();
    let token = login(&app).await;
    seed_cart(&app, &token, 200.0, 3).await;

    let (status, body) = send_request(
        &app,
        "POST",
        "/api/cart/coupon",
        Some(&token),
        Some(json!({ "code": "AHORRA50" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let summary = &body["summary"];
    assert_close(&summary["discount"], 50.0);
    assert_close(&summary["subtotalAfterDiscount"], 550.0);
    assert_close(&summary["taxes"], 82.5);
    assert_close(&summary["shipping"], 0.0);
    assert_close(&summary["total"], 632.5);
}

#[tokio::test]
async fn test_coupon_below_minimum_leaves_summary_unchanged() {
    let app = create_test_app();
    let token = login(&app).await;
    seed_cart(&app, &token, 100.0, 1).await;

    let (status, body) = send_request(
        &app,
        "POST",
        "/api/cart/coupon",
        Some(&token),
        Some(json!({ "code": "DESCUENTO20" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["ok"], false);
    assert_eq!(
        body["msg"],
        "this coupon requires a minimum purchase of 200.00"
    );

    let (_, body) = send_request(&app, "GET", "/api/cart", Some(&token), None).await;
    assert!(body["coupon"].is_null());
    assert_close(&body["summary"]["discount"], 0.0);
}

#[tokio::test]
async fn test_coupon_error_responses() {
    let app = create_test_app();
    let token = login(&app).await;
    seed_cart(&app, &token, 100.0, 2).await;

    // Blank code
    let (status, _) = send_request(
        &app,
        "POST",
        "/api/cart/coupon",
        Some(&token),
        Some(json!({ "code": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Unknown code
    let (status, body) = send_request(
        &app,
        "POST",
        "/api/cart/coupon",
        Some(&token),
        Some(json!({ "code": "NOEXISTE" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["msg"], "coupon code not found");

    // Second coupon while one is active
    let (status, _) = send_request(
        &app,
        "POST",
        "/api/cart/coupon",
        Some(&token),
        Some(json!({ "code": "DESCUENTO10" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_request(
        &app,
        "POST",
        "/api/cart/coupon",
        Some(&token),
        Some(json!({ "code": "BIENVENIDA25" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["msg"],
        "a coupon is already applied, remove it before applying another"
    );
}

#[tokio::test]
async fn test_remove_then_reapply_matches_direct_apply() {
    let app = create_test_app();
    let token = login(&app).await;
    seed_cart(&app, &token, 100.0, 2).await;

    // Apply one coupon, remove it, apply a different one
    send_request(
        &app,
        "POST",
        "/api/cart/coupon",
        Some(&token),
        Some(json!({ "code": "DESCUENTO10" })),
    )
    .await;
    let (status, body) = send_request(&app, "DELETE", "/api/cart/coupon", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["coupon"].is_null());
    assert_close(&body["summary"]["discount"], 0.0);

    let (_, roundabout) = send_request(
        &app,
        "POST",
        "/api/cart/coupon",
        Some(&token),
        Some(json!({ "code": "BIENVENIDA25" })),
    )
    .await;

    // Same coupon applied directly from a clean cart
    let app2 = create_test_app();
    let token2 = login(&app2).await;
    seed_cart(&app2, &token2, 100.0, 2).await;
    let (_, direct) = send_request(
        &app2,
        "POST",
        "/api/cart/coupon",
        Some(&token2),
        Some(json!({ "code": "BIENVENIDA25" })),
    )
    .await;

    assert_eq!(roundabout["summary"], direct["summary"]);
    assert_eq!(roundabout["coupon"], direct["coupon"]);
}

// =============================================================================
// Checkout and orders
// =============================================================================

#[tokio::test]
async fn test_place_order_freezes_summary_and_clears_cart() {
    let app = create_test_app();
    let token = login(&app).await;
    seed_cart(&app, &token, 100.0, 2).await;
    send_request(
        &app,
        "POST",
        "/api/cart/coupon",
        Some(&token),
        Some(json!({ "code": "DESCUENTO10" })),
    )
    .await;

    let (status, body) = send_request(
        &app,
        "POST",
        "/api/orders",
        Some(&token),
        Some(shipping_body()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_close(&body["summary"]["total"], 237.0);
    let order_id = body["orderId"].as_str().unwrap().to_string();

    // Cart (coupon included) is cleared
    let (_, cart) = send_request(&app, "GET", "/api/cart", Some(&token), None).await;
    assert!(cart["items"].as_array().unwrap().is_empty());
    assert!(cart["coupon"].is_null());

    // The order is retrievable with the frozen snapshot
    let (status, body) = send_request(
        &app,
        "GET",
        &format!("/api/orders/{order_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let order = &body["order"];
    assert_eq!(order["status"], "PENDING");
    assert_eq!(order["coupon"], "DESCUENTO10");
    assert_eq!(order["items"][0]["quantity"], 2);
    assert_close(&order["summary"]["total"], 237.0);
}

#[tokio::test]
async fn test_place_order_requires_items_and_valid_shipping() {
    let app = create_test_app();
    let token = login(&app).await;

    // Empty cart
    let (status, _) = send_request(
        &app,
        "POST",
        "/api/orders",
        Some(&token),
        Some(shipping_body()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Invalid shipping leaves the cart intact
    seed_cart(&app, &token, 100.0, 2).await;
    let mut bad_shipping = shipping_body();
    bad_shipping["city"] = json!("");
    let (status, body) = send_request(
        &app,
        "POST",
        "/api/orders",
        Some(&token),
        Some(bad_shipping),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "select a city");

    let (_, cart) = send_request(&app, "GET", "/api/cart", Some(&token), None).await;
    assert_eq!(cart["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_orders_are_scoped_to_their_owner() {
    let app = create_test_app();
    let token = login(&app).await;
    seed_cart(&app, &token, 100.0, 2).await;

    let (_, body) = send_request(
        &app,
        "POST",
        "/api/orders",
        Some(&token),
        Some(shipping_body()),
    )
    .await;
    let order_id = body["orderId"].as_str().unwrap().to_string();

    // A second user cannot see the first user's order
    let other = login(&app).await;
    let (status, _) = send_request(
        &app,
        "GET",
        &format!("/api/orders/{order_id}"),
        Some(&other),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send_request(&app, "GET", "/api/orders", Some(&other), None).await;
    assert!(body["orders"].as_array().unwrap().is_empty());

    // The owner sees it in the list
    let (_, body) = send_request(&app, "GET", "/api/orders", Some(&token), None).await;
    assert_eq!(body["orders"].as_array().unwrap().len(), 1);
}
