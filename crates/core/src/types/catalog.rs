//! Pure query layer over the static product catalog.
//!
//! A [`Catalog`] is built once from the manifest and never mutated. Every
//! query is side-effect free and preserves catalog order.

use std::collections::{BTreeMap, HashSet};

use crate::{Category, Product, ProductId, Tag};

/// Number of suggestions returned for an empty search query.
pub const SUGGESTION_LIMIT: usize = 5;

/// Errors that can occur when validating a catalog.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateProduct(ProductId),
    /// A product lists the same size twice.
    #[error("product {product} lists size {size} more than once")]
    DuplicateSize {
        /// Offending product.
        product: ProductId,
        /// Repeated size label.
        size: String,
    },
    /// A product has no inventory entries at all.
    #[error("product {0} has an empty inventory")]
    EmptyInventory(ProductId),
}

/// The product catalog, validated at construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking manifest invariants: product ids are
    /// unique, every product has at least one inventory entry, and no
    /// product lists a size twice.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] naming the first violation found.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen_ids = HashSet::new();
        for product in &products {
            if !seen_ids.insert(product.id.clone()) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
            if product.inventory.is_empty() {
                return Err(CatalogError::EmptyInventory(product.id.clone()));
            }
            let mut seen_sizes = HashSet::new();
            for entry in &product.inventory {
                if !seen_sizes.insert(entry.size.as_str()) {
                    return Err(CatalogError::DuplicateSize {
                        product: product.id.clone(),
                        size: entry.size.clone(),
                    });
                }
            }
        }
        Ok(Self { products })
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Products in a category, catalog order preserved.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Products tagged `featured`.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.tagged(Tag::Featured)
    }

    /// Products tagged `new-arrival`.
    #[must_use]
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.tagged(Tag::NewArrival)
    }

    /// Products on sale: tagged `sale` OR carrying an original price.
    #[must_use]
    pub fn on_sale(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_on_sale()).collect()
    }

    /// Case-insensitive substring search over name and category label.
    ///
    /// A blank query returns the first [`SUGGESTION_LIMIT`] products in
    /// catalog order as suggestions rather than an empty result.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.products.iter().take(SUGGESTION_LIMIT).collect();
        }
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.category.label().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Product count per category, for catalog reports.
    #[must_use]
    pub fn count_by_category(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for product in &self.products {
            *counts.entry(product.category).or_insert(0) += 1;
        }
        counts
    }

    fn tagged(&self, tag: Tag) -> Vec<&Product> {
        self.products.iter().filter(|p| p.has_tag(tag)).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{Price, SizeStock};

    fn product(id: &str, name: &str, category: Category) -> Product {
        Product {
            id: ProductId::parse(id).unwrap(),
            name: name.to_owned(),
            price: Price::new(380_000),
            original_price: None,
            rating: 4.7,
            image: format!("/static/img/products/{id}.jpg"),
            category,
            description: String::new(),
            material: "WOOL BLEND".to_owned(),
            features: Vec::new(),
            inventory: vec![SizeStock {
                size: "M".to_owned(),
                stock: 5,
            }],
            tags: Vec::new(),
        }
    }

    fn sample_catalog() -> Catalog {
        let mut hoodie = product("hoodie-rose", "Calligraphy Hoodie", Category::Hoodies);
        hoodie.tags = vec![Tag::Featured, Tag::Sale];

        let mut sweater = product("sweater-brown", "Geometric Sweater", Category::Sweaters);
        sweater.tags = vec![Tag::Featured];

        let mut tee = product("tee-beige", "Minimalist Tee", Category::TShirts);
        tee.original_price = Some(Price::new(300_000));

        let mut jacket = product("jacket-olive", "Field Jacket", Category::Jackets);
        jacket.tags = vec![Tag::NewArrival];

        let cap = product("cap-black", "Monogram Cap", Category::Accessories);

        let scarf = product("scarf-sand", "Woven Scarf", Category::Accessories);

        Catalog::new(vec![hoodie, sweater, tee, jacket, cap, scarf]).unwrap()
    }

    #[test]
    fn test_get_by_id() {
        let catalog = sample_catalog();
        assert!(catalog.get("hoodie-rose").is_some());
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_by_category_preserves_order() {
        let catalog = sample_catalog();
        let accessories = catalog.by_category(Category::Accessories);
        let ids: Vec<&str> = accessories.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["cap-black", "scarf-sand"]);
    }

    #[test]
    fn test_sale_union() {
        let catalog = sample_catalog();
        let ids: Vec<&str> = catalog.on_sale().iter().map(|p| p.id.as_str()).collect();
        // Tagged sale without original price AND original price without tag
        assert_eq!(ids, vec!["hoodie-rose", "tee-beige"]);
    }

    #[test]
    fn test_search_matches_name_and_category() {
        let catalog = sample_catalog();

        let by_name = catalog.search("geometric");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name.first().unwrap().id.as_str(), "sweater-brown");

        let by_category = catalog.search("ACCESSOR");
        assert_eq!(by_category.len(), 2);
    }

    #[test]
    fn test_search_blank_returns_suggestions() {
        let catalog = sample_catalog();
        let suggestions = catalog.search("   ");
        assert_eq!(suggestions.len(), SUGGESTION_LIMIT);
        assert_eq!(suggestions.first().unwrap().id.as_str(), "hoodie-rose");
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let catalog = sample_catalog();
        assert!(catalog.search("parka").is_empty());
    }

    #[test]
    fn test_count_by_category() {
        let catalog = sample_catalog();
        let counts = catalog.count_by_category();
        assert_eq!(counts.get(&Category::Accessories), Some(&2));
        assert_eq!(counts.get(&Category::Hoodies), Some(&1));
        assert_eq!(counts.get(&Category::Jackets), Some(&1));
    }

    #[test]
    fn test_rejects_duplicate_product_id() {
        let a = product("tee-beige", "Tee", Category::TShirts);
        let b = product("tee-beige", "Other Tee", Category::TShirts);
        assert!(matches!(
            Catalog::new(vec![a, b]),
            Err(CatalogError::DuplicateProduct(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_size() {
        let mut p = product("tee-beige", "Tee", Category::TShirts);
        p.inventory = vec![
            SizeStock {
                size: "M".to_owned(),
                stock: 1,
            },
            SizeStock {
                size: "M".to_owned(),
                stock: 3,
            },
        ];
        assert!(matches!(
            Catalog::new(vec![p]),
            Err(CatalogError::DuplicateSize { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_inventory() {
        let mut p = product("tee-beige", "Tee", Category::TShirts);
        p.inventory.clear();
        assert!(matches!(
            Catalog::new(vec![p]),
            Err(CatalogError::EmptyInventory(_))
        ));
    }
}
