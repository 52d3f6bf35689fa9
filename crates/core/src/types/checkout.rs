//! Checkout total computation.
//!
//! Takes a cart snapshot and a selected shipping method and produces the
//! order totals. Never mutates the cart or the catalog.

use serde::{Deserialize, Serialize};

use crate::{Cart, Price};

/// Flat cost of standard shipping.
pub const STANDARD_SHIPPING_COST: Price = Price::new(25_000);

/// The closed set of shipping methods offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    Standard,
}

impl ShippingMethod {
    /// Parse a shipping method from its form value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "standard" => Some(Self::Standard),
            _ => None,
        }
    }

    /// Form value for this method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard Shipping",
        }
    }

    /// Shipping cost for this method.
    #[must_use]
    pub const fn cost(self) -> Price {
        match self {
            Self::Standard => STANDARD_SHIPPING_COST,
        }
    }
}

/// Totals for a cart snapshot at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutTotals {
    /// Cart total price.
    pub subtotal: Price,
    /// Zero when no shipping method is selected.
    pub shipping: Price,
    /// Subtotal plus shipping.
    pub total: Price,
}

impl CheckoutTotals {
    /// Compute totals for the given cart snapshot and shipping selection.
    #[must_use]
    pub fn compute(cart: &Cart, shipping: Option<ShippingMethod>) -> Self {
        let subtotal = cart.total_price();
        let shipping = shipping.map_or(Price::ZERO, ShippingMethod::cost);
        Self {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{CartLine, Category};

    fn line(id: &str, price: i64, quantity: u32) -> CartLine {
        CartLine {
            id: id.to_owned(),
            name: format!("Item {id}"),
            price: Price::new(price),
            image: "/static/img/products/item.jpg".to_owned(),
            category: Category::Sweaters,
            quantity,
        }
    }

    #[test]
    fn test_standard_shipping_totals() {
        // 450.000 x 2 + 380.000 + 25.000 shipping = 1.305.000
        let mut cart = Cart::new();
        cart.add(line("hoodie-rose-M", 450_000, 2));
        cart.add(line("sweater-brown-S", 380_000, 1));

        let totals = CheckoutTotals::compute(&cart, Some(ShippingMethod::Standard));
        assert_eq!(totals.subtotal, Price::new(1_280_000));
        assert_eq!(totals.shipping, Price::new(25_000));
        assert_eq!(totals.total, Price::new(1_305_000));
    }

    #[test]
    fn test_no_shipping_selected() {
        let mut cart = Cart::new();
        cart.add(line("tee-beige-L", 225_000, 1));

        let totals = CheckoutTotals::compute(&cart, None);
        assert_eq!(totals.shipping, Price::ZERO);
        assert_eq!(totals.total, totals.subtotal);
    }

    #[test]
    fn test_empty_cart_totals() {
        let totals = CheckoutTotals::compute(&Cart::new(), Some(ShippingMethod::Standard));
        assert_eq!(totals.subtotal, Price::ZERO);
        assert_eq!(totals.total, STANDARD_SHIPPING_COST);
    }

    #[test]
    fn test_parse_shipping_method() {
        assert_eq!(
            ShippingMethod::parse("standard"),
            Some(ShippingMethod::Standard)
        );
        assert_eq!(ShippingMethod::parse("overnight"), None);
        assert_eq!(ShippingMethod::Standard.as_str(), "standard");
    }
}
