//! Catalog product types.
//!
//! Products are immutable catalog entries defined by a static manifest at
//! process start. Availability is derived per size from the inventory list;
//! a product is sold out only when every size is at zero stock.

use serde::{Deserialize, Serialize};

use crate::{Price, ProductId};

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Hoodies,
    Sweaters,
    #[serde(rename = "T-Shirts")]
    TShirts,
    Jackets,
    Accessories,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 5] = [
        Self::Hoodies,
        Self::Sweaters,
        Self::TShirts,
        Self::Jackets,
        Self::Accessories,
    ];

    /// Human-readable label, matching the manifest spelling.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hoodies => "Hoodies",
            Self::Sweaters => "Sweaters",
            Self::TShirts => "T-Shirts",
            Self::Jackets => "Jackets",
            Self::Accessories => "Accessories",
        }
    }

    /// URL path segment for the category listing page.
    #[must_use]
    pub const fn handle(&self) -> &'static str {
        match self {
            Self::Hoodies => "hoodies",
            Self::Sweaters => "sweaters",
            Self::TShirts => "t-shirts",
            Self::Jackets => "jackets",
            Self::Accessories => "accessories",
        }
    }

    /// Parse a category from its URL handle.
    #[must_use]
    pub fn from_handle(handle: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.handle() == handle)
    }

    /// Parse a category from its display label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Catalog classification label used for derived listings, independent of
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tag {
    Featured,
    NewArrival,
    Sale,
}

/// Per-size stock entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeStock {
    /// Size label ("S", "M", "XL", ...).
    pub size: String,
    /// Units on hand; 0 means this size is sold out.
    pub stock: u32,
}

impl SizeStock {
    /// Returns `true` if this size has stock left.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.stock > 0
    }
}

/// An immutable catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Pre-discount price; presence alone marks the product as on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    /// Display-only average rating, 0.0-5.0.
    pub rating: f32,
    pub image: String,
    pub category: Category,
    pub description: String,
    pub material: String,
    pub features: Vec<String>,
    /// Sizes in display order; unique per product.
    pub inventory: Vec<SizeStock>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl Product {
    /// Returns `true` iff every size is at zero stock.
    #[must_use]
    pub fn is_sold_out(&self) -> bool {
        self.inventory.iter().all(|entry| entry.stock == 0)
    }

    /// Returns `true` if the product carries the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// A product is on sale if it is tagged `sale` OR carries an original
    /// price - either signal alone is enough.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.has_tag(Tag::Sale) || self.original_price.is_some()
    }

    /// The first size with stock left, in inventory order.
    #[must_use]
    pub fn first_available_size(&self) -> Option<&str> {
        self.inventory
            .iter()
            .find(|entry| entry.is_available())
            .map(|entry| entry.size.as_str())
    }

    /// Stock on hand for a size, or `None` if the size does not exist.
    #[must_use]
    pub fn stock_for(&self, size: &str) -> Option<u32> {
        self.inventory
            .iter()
            .find(|entry| entry.size == size)
            .map(|entry| entry.stock)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(inventory: Vec<SizeStock>) -> Product {
        Product {
            id: ProductId::parse("tee-test").unwrap(),
            name: "Test Tee".to_owned(),
            price: Price::new(225_000),
            original_price: None,
            rating: 4.5,
            image: "/static/img/products/tee-test.jpg".to_owned(),
            category: Category::TShirts,
            description: String::new(),
            material: "ORGANIC COTTON".to_owned(),
            features: Vec::new(),
            inventory,
            tags: Vec::new(),
        }
    }

    fn size(label: &str, stock: u32) -> SizeStock {
        SizeStock {
            size: label.to_owned(),
            stock,
        }
    }

    #[test]
    fn test_sold_out_when_all_sizes_empty() {
        let p = product(vec![size("S", 0), size("M", 0)]);
        assert!(p.is_sold_out());
    }

    #[test]
    fn test_not_sold_out_with_partial_stock() {
        let p = product(vec![size("S", 0), size("M", 3)]);
        assert!(!p.is_sold_out());
    }

    #[test]
    fn test_on_sale_union_semantics() {
        let mut tagged = product(vec![size("S", 1)]);
        tagged.tags = vec![Tag::Sale];
        assert!(tagged.is_on_sale());

        let mut discounted = product(vec![size("S", 1)]);
        discounted.original_price = Some(Price::new(550_000));
        assert!(discounted.is_on_sale());

        let plain = product(vec![size("S", 1)]);
        assert!(!plain.is_on_sale());
    }

    #[test]
    fn test_first_available_size_skips_empty() {
        let p = product(vec![size("S", 0), size("M", 0), size("L", 4)]);
        assert_eq!(p.first_available_size(), Some("L"));

        let sold_out = product(vec![size("S", 0)]);
        assert_eq!(sold_out.first_available_size(), None);
    }

    #[test]
    fn test_stock_for() {
        let p = product(vec![size("S", 12), size("M", 0)]);
        assert_eq!(p.stock_for("S"), Some(12));
        assert_eq!(p.stock_for("M"), Some(0));
        assert_eq!(p.stock_for("XXL"), None);
    }

    #[test]
    fn test_category_handles() {
        assert_eq!(Category::from_handle("t-shirts"), Some(Category::TShirts));
        assert_eq!(Category::from_handle("coats"), None);
        assert_eq!(Category::from_label("T-Shirts"), Some(Category::TShirts));
        assert_eq!(Category::TShirts.label(), "T-Shirts");
    }

    #[test]
    fn test_manifest_deserialization() {
        let raw = r#"{
            "id": "hoodie-dusty-rose",
            "name": "Arabic Calligraphy Hoodie - Dusty Rose",
            "price": 450000,
            "original_price": 550000,
            "rating": 4.88,
            "image": "/static/img/products/hoodie-dusty-rose.jpg",
            "category": "Hoodies",
            "description": "Premium hoodie.",
            "material": "COTTON SPANDEX PREMIUM",
            "features": ["Breathable fabric"],
            "inventory": [
                { "size": "S", "stock": 0 },
                { "size": "M", "stock": 2 }
            ],
            "tags": ["featured", "new-arrival", "sale"]
        }"#;

        let p: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(p.category, Category::Hoodies);
        assert_eq!(p.original_price, Some(Price::new(550_000)));
        assert_eq!(p.tags, vec![Tag::Featured, Tag::NewArrival, Tag::Sale]);
        assert!(!p.is_sold_out());
    }
}
