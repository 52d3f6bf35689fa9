//! Domain models for the storefront.
//!
//! Thin data types that sit between the repositories and the route layer:
//! authenticated users, session-stored state, and wishlist rows.

pub mod session;
pub mod user;
pub mod wishlist;

pub use session::{CurrentUser, keys as session_keys};
pub use user::User;
pub use wishlist::{WishlistEntry, WishlistSnapshot};
