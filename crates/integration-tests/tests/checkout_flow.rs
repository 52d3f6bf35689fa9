//! Checkout totals and error surface behavior.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use khanjar_core::{
    Cart, CartLine, Category, CheckoutTotals, Price, ShippingMethod, line_key, ProductId,
};
use khanjar_storefront::error::AppError;

fn line(product: &str, price: i64, quantity: u32) -> CartLine {
    let product_id = ProductId::parse(product).expect("valid product id");
    CartLine {
        id: line_key(&product_id, "M"),
        name: format!("{product} (M)"),
        price: Price::new(price),
        image: format!("/static/img/products/{product}.jpg"),
        category: Category::Sweaters,
        quantity,
    }
}

#[test]
fn test_checkout_total_matches_worked_example() {
    // 450.000 x 2 + 380.000 + standard shipping 25.000 = 1.305.000
    let mut cart = Cart::new();
    cart.add(line("hoodie-arabic-calligraphy-dusty-rose", 450_000, 2));
    cart.add(line("sweater-geometric-pattern-brown", 380_000, 1));

    let totals = CheckoutTotals::compute(&cart, Some(ShippingMethod::Standard));
    assert_eq!(totals.total, Price::new(1_305_000));
    assert_eq!(format!("Rp {}", totals.total), "Rp 1.305.000");
}

#[test]
fn test_no_shipping_method_costs_nothing() {
    let mut cart = Cart::new();
    cart.add(line("tshirt-minimalist-arabic-beige", 225_000, 1));

    let totals = CheckoutTotals::compute(&cart, None);
    assert_eq!(totals.shipping, Price::ZERO);
    assert_eq!(totals.total, Price::new(225_000));
}

#[test]
fn test_validation_errors_name_the_field_class() {
    let err = AppError::Validation("shipping method");
    assert_eq!(err.to_string(), "missing required shipping method");

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn test_auth_required_surfaces_a_signin_prompt() {
    let response = AppError::AuthRequired.into_response();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(axum::http::header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/auth/login?error=signin_required")
    );
}
