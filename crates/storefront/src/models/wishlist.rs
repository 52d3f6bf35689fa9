//! Wishlist model types.

use chrono::{DateTime, Utc};

use khanjar_core::{Category, Price, Product, ProductId, UserId, WishlistEntryId};

/// A saved-product row, unique per (user, product).
///
/// Carries a denormalized snapshot of the product at the time of adding -
/// not live-linked to later catalog changes.
#[derive(Debug, Clone)]
pub struct WishlistEntry {
    pub id: WishlistEntryId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub product_name: String,
    pub product_price: Price,
    pub product_image: String,
    pub product_category: Category,
    pub created_at: DateTime<Utc>,
}

/// The product attributes copied into a wishlist row on add.
#[derive(Debug, Clone)]
pub struct WishlistSnapshot {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub category: Category,
}

impl From<&Product> for WishlistSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category,
        }
    }
}
