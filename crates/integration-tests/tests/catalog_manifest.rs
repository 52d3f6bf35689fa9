//! The shipped product manifest against the catalog query layer.

use khanjar_core::{Catalog, Category, SUGGESTION_LIMIT};
use khanjar_storefront::catalog;

fn shipped_catalog() -> Catalog {
    catalog::parse(include_str!("../../storefront/content/products.json"))
        .expect("shipped manifest is valid")
}

#[test]
fn test_manifest_loads_and_is_nonempty() {
    let loaded = shipped_catalog();
    assert!(loaded.len() >= 8);
}

#[test]
fn test_sold_out_derivation_on_shipped_products() {
    let loaded = shipped_catalog();

    // Every size at zero stock
    let dusty_rose = loaded
        .get("hoodie-arabic-calligraphy-dusty-rose")
        .expect("dusty rose hoodie is in the manifest");
    assert!(dusty_rose.is_sold_out());

    // Partial stock: one size empty does not mean sold out
    let brown_sweater = loaded
        .get("sweater-geometric-pattern-brown")
        .expect("brown sweater is in the manifest");
    assert_eq!(brown_sweater.stock_for("XL"), Some(0));
    assert!(!brown_sweater.is_sold_out());
    assert_eq!(brown_sweater.first_available_size(), Some("S"));
}

#[test]
fn test_sale_listing_uses_union_semantics() {
    let loaded = shipped_catalog();
    let sale_ids: Vec<&str> = loaded.on_sale().iter().map(|p| p.id.as_str()).collect();

    // Original price without the sale tag
    assert!(sale_ids.contains(&"sweater-kufic-script-charcoal"));
    // Sale tag without an original price
    assert!(sale_ids.contains(&"accessory-woven-scarf-sand"));
    // Neither signal
    assert!(!sale_ids.contains(&"accessory-monogram-cap-black"));
}

#[test]
fn test_category_listings_preserve_catalog_order() {
    let loaded = shipped_catalog();
    let hoodies: Vec<&str> = loaded
        .by_category(Category::Hoodies)
        .iter()
        .map(|p| p.id.as_str())
        .collect();

    assert_eq!(
        hoodies,
        vec![
            "hoodie-arabic-calligraphy-dusty-rose",
            "hoodie-gold-calligraphy-cream",
        ]
    );
}

#[test]
fn test_search_is_case_insensitive_over_name_and_category() {
    let loaded = shipped_catalog();

    let by_name = loaded.search("CALLIGRAPHY");
    assert!(by_name.len() >= 2);

    let by_category = loaded.search("accessor");
    assert_eq!(by_category.len(), 2);

    assert!(loaded.search("denim vest").is_empty());
}

#[test]
fn test_blank_search_returns_leading_suggestions() {
    let loaded = shipped_catalog();
    let suggestions = loaded.search("");
    assert_eq!(suggestions.len(), SUGGESTION_LIMIT);
    assert_eq!(
        suggestions.first().map(|p| p.id.as_str()),
        Some("hoodie-arabic-calligraphy-dusty-rose")
    );
}
