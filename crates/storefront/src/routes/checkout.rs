//! Checkout route handlers.
//!
//! Checkout reads a cart snapshot and never mutates the catalog. Order
//! submission validates the address field classes and the shipping method,
//! logs the accepted order, clears the cart, and redirects to the
//! confirmation view. Durable order persistence is an external collaborator
//! and out of scope here.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use khanjar_core::{CheckoutTotals, Price, ShippingMethod};

use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::cart::{CartItemView, CartView, load_cart, save_cart};

/// Checkout form data.
///
/// Every field defaults to empty so validation happens here, with a field
/// class named in the error, rather than in the form extractor.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default)]
    pub district_city: String,
    #[serde(default)]
    pub address_details: String,
    #[serde(default)]
    pub delivery_message: String,
    #[serde(default)]
    pub shipping_method: String,
}

fn default_country() -> String {
    "Indonesia".to_owned()
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    pub subtotal: Price,
    pub shipping_cost: Price,
    pub total_with_shipping: Price,
}

/// Order confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmation.html")]
pub struct ConfirmationTemplate {}

/// Display the checkout page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Response> {
    let cart = load_cart(&session).await?;
    if cart.is_empty() {
        return Ok(Redirect::to("/cart").into_response());
    }

    let view = CartView::from(&cart);
    let totals = CheckoutTotals::compute(&cart, Some(ShippingMethod::Standard));

    Ok(CheckoutTemplate {
        items: view.items,
        item_count: view.item_count,
        subtotal: totals.subtotal,
        shipping_cost: totals.shipping,
        total_with_shipping: totals.total,
    }
    .into_response())
}

/// Validate the submitted form, returning the selected shipping method.
///
/// Field classes are checked in form order; the first missing one is named
/// in the error.
fn validate(form: &CheckoutForm) -> Result<ShippingMethod> {
    if form.full_name.trim().is_empty() {
        return Err(AppError::Validation("recipient full name"));
    }
    if form.phone_number.trim().is_empty() {
        return Err(AppError::Validation("phone number"));
    }
    if form.district_city.trim().is_empty() {
        return Err(AppError::Validation("district and city"));
    }
    if form.address_details.trim().is_empty() {
        return Err(AppError::Validation("address details"));
    }
    ShippingMethod::parse(&form.shipping_method)
        .ok_or(AppError::Validation("shipping method"))
}

/// Place the order.
///
/// This is a terminal action for the cart: on success the cart is cleared
/// and the user lands on the confirmation page.
#[instrument(skip(session, form))]
pub async fn submit(session: Session, Form(form): Form<CheckoutForm>) -> Result<Response> {
    let mut cart = load_cart(&session).await?;
    if cart.is_empty() {
        return Ok(Redirect::to("/cart").into_response());
    }

    let shipping = validate(&form)?;
    let totals = CheckoutTotals::compute(&cart, Some(shipping));

    // Order persistence is an external collaborator; the accepted order is
    // logged so it is at least traceable.
    tracing::info!(
        recipient = %form.full_name,
        district_city = %form.district_city,
        country = %form.country,
        items = cart.total_items(),
        subtotal = totals.subtotal.amount(),
        shipping = totals.shipping.amount(),
        total = totals.total.amount(),
        shipping_method = shipping.as_str(),
        "Order placed"
    );

    cart.clear();
    save_cart(&session, &cart).await?;

    Ok(Redirect::to("/checkout/confirmation").into_response())
}

/// Display the order confirmation page.
#[instrument]
pub async fn confirmation() -> ConfirmationTemplate {
    ConfirmationTemplate {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CheckoutForm {
        CheckoutForm {
            email: String::new(),
            full_name: "Siti Rahma".to_owned(),
            phone_number: "+62 812 0000 0000".to_owned(),
            country: default_country(),
            district_city: "Menteng, Jakarta Pusat".to_owned(),
            address_details: "Jl. Cikini Raya No. 10".to_owned(),
            delivery_message: String::new(),
            shipping_method: "standard".to_owned(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        assert_eq!(validate(&form()).ok(), Some(ShippingMethod::Standard));
    }

    #[test]
    fn test_validate_names_missing_field_class() {
        let mut missing_name = form();
        missing_name.full_name = "   ".to_owned();
        assert!(matches!(
            validate(&missing_name),
            Err(AppError::Validation("recipient full name"))
        ));

        let mut missing_address = form();
        missing_address.address_details = String::new();
        assert!(matches!(
            validate(&missing_address),
            Err(AppError::Validation("address details"))
        ));
    }

    #[test]
    fn test_validate_requires_shipping_method() {
        let mut no_shipping = form();
        no_shipping.shipping_method = String::new();
        assert!(matches!(
            validate(&no_shipping),
            Err(AppError::Validation("shipping method"))
        ));

        let mut unknown_shipping = form();
        unknown_shipping.shipping_method = "overnight".to_owned();
        assert!(matches!(
            validate(&unknown_shipping),
            Err(AppError::Validation("shipping method"))
        ));
    }

    #[test]
    fn test_optional_fields_do_not_gate_submission() {
        let mut minimal = form();
        minimal.email = String::new();
        minimal.delivery_message = String::new();
        assert!(validate(&minimal).is_ok());
    }
}
