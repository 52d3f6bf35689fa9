//! Service layer for the storefront.
//!
//! Services wrap the repositories with the business rules the route layer
//! relies on: credential handling for auth, and the sync protocol for the
//! wishlist.

pub mod auth;
pub mod wishlist;

pub use auth::AuthService;
pub use wishlist::WishlistService;
