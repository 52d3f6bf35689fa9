//! Cart behavior through the public core API.
//!
//! These tests pin the cart laws the storefront relies on: merge-by-line-id,
//! removal on non-positive quantity, and exact integer totals.

use khanjar_core::{Cart, CartLine, Category, Price, ProductId, line_key};

fn line(product: &str, size: &str, price: i64, quantity: u32) -> CartLine {
    let product_id = ProductId::parse(product).expect("valid product id");
    CartLine {
        id: line_key(&product_id, size),
        name: format!("{product} ({size})"),
        price: Price::new(price),
        image: format!("/static/img/products/{product}.jpg"),
        category: Category::Hoodies,
        quantity,
    }
}

#[test]
fn test_adds_with_same_line_id_merge_quantities() {
    let mut cart = Cart::new();
    let quantities = [1_u32, 2, 3, 5, 8];

    for &quantity in &quantities {
        cart.add(line("hoodie-gold-calligraphy-cream", "M", 485_000, quantity));
    }

    let expected: u32 = quantities.iter().sum();
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.total_items(), expected);
}

#[test]
fn test_sizes_are_distinct_lines_of_one_product() {
    let mut cart = Cart::new();
    cart.add(line("hoodie-gold-calligraphy-cream", "M", 485_000, 1));
    cart.add(line("hoodie-gold-calligraphy-cream", "L", 485_000, 1));

    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.total_items(), 2);
}

#[test]
fn test_update_to_zero_removes_and_totals_follow() {
    let mut cart = Cart::new();
    cart.add(line("sweater-geometric-pattern-brown", "S", 380_000, 2));
    cart.add(line("tshirt-crescent-emblem-black", "M", 210_000, 1));

    let removed_id = line_key(
        &ProductId::parse("sweater-geometric-pattern-brown").expect("valid product id"),
        "S",
    );
    cart.set_quantity(&removed_id, 0);

    assert_eq!(cart.items().len(), 1);
    assert!(cart.items().iter().all(|l| l.id != removed_id));
    assert_eq!(cart.total_items(), 1);
    assert_eq!(cart.total_price(), Price::new(210_000));
}

#[test]
fn test_no_drift_over_a_thousand_small_adds() {
    let mut cart = Cart::new();
    for _ in 0..1000 {
        cart.add(line("accessory-woven-scarf-sand", "One Size", 145_000, 1));
    }

    assert_eq!(cart.total_items(), 1000);
    assert_eq!(cart.total_price(), Price::new(145_000_000));
}

#[test]
fn test_clear_resets_all_aggregates() {
    let mut cart = Cart::new();
    cart.add(line("jacket-coach-arabic-olive", "L", 575_000, 3));
    cart.clear();

    assert!(cart.is_empty());
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.total_price(), Price::ZERO);
}
