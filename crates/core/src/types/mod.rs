//! Domain types for the Khanjar storefront.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod email;
pub mod id;
pub mod price;
pub mod product;

pub use cart::{Cart, CartLine, line_key};
pub use catalog::{Catalog, CatalogError, SUGGESTION_LIMIT};
pub use checkout::{CheckoutTotals, STANDARD_SHIPPING_COST, ShippingMethod};
pub use email::{Email, EmailError};
pub use id::{ProductId, ProductIdError, UserId, WishlistEntryId};
pub use price::Price;
pub use product::{Category, Product, SizeStock, Tag};
