//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /collections            - Full collection listing
//! GET  /collections/{handle}   - Category listing
//! GET  /new-arrivals           - New arrivals listing
//! GET  /sale                   - Sale listing
//! GET  /lookbook               - Lookbook page
//! GET  /products/{id}          - Product detail
//!
//! # Search
//! GET  /search                 - Search page
//! GET  /search/suggest         - Suggestions fragment (HTMX)
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (redirects back)
//! POST /cart/buy-now           - Add to cart, then go to checkout
//! POST /cart/update            - Update quantity (cart_items fragment)
//! POST /cart/remove            - Remove line (cart_items fragment)
//! POST /cart/clear             - Empty the cart (cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Checkout form
//! POST /checkout               - Place order, clear cart, redirect
//! GET  /checkout/confirmation  - Order confirmation
//!
//! # Wishlist (requires auth for writes)
//! GET  /wishlist               - Wishlist page
//! POST /wishlist/add           - Save a product
//! POST /wishlist/remove        - Remove a saved product
//!
//! # Auth
//! GET  /auth/login             - Login page
//! POST /auth/login             - Login action
//! GET  /auth/register          - Register page
//! POST /auth/register          - Register action
//! POST /auth/logout            - Logout action
//!
//! # Account (requires auth)
//! GET  /account                - Account settings
//! POST /account/profile        - Update display name
//! POST /account/password       - Change password
//! ```

pub mod account;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod collections;
pub mod home;
pub mod pages;
pub mod products;
pub mod search;
pub mod wishlist;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::auth_rate_limiter;
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create the collection routes router.
pub fn collection_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(collections::index))
        .route("/{handle}", get(collections::show))
}

/// Create the search routes router.
pub fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(search::search_page))
        .route("/suggest", get(search::suggest))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/buy-now", post(cart::buy_now))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show).post(checkout::submit))
        .route("/confirmation", get(checkout::confirmation))
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::show))
        .route("/add", post(wishlist::add))
        .route("/remove", post(wishlist::remove))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(account::index))
        .route("/profile", post(account::update_profile))
        .route("/password", post(account::change_password))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Derived listings
        .route("/new-arrivals", get(collections::new_arrivals))
        .route("/sale", get(collections::sale))
        .route("/lookbook", get(pages::lookbook))
        // Product detail
        .route("/products/{id}", get(products::show))
        // Collection routes
        .nest("/collections", collection_routes())
        // Search routes
        .nest("/search", search_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout routes
        .nest("/checkout", checkout_routes())
        // Wishlist routes
        .nest("/wishlist", wishlist_routes())
        // Account routes
        .nest("/account", account_routes())
        // Auth routes, rate limited against credential stuffing
        .nest("/auth", auth_routes().layer(auth_rate_limiter()))
        // 404 fallback
        .fallback(pages::not_found)
}

/// Sanitize a user-supplied post-action redirect target.
///
/// Only local paths are allowed; anything else (absolute URLs,
/// scheme-relative `//host` forms) falls back to the given default.
pub(crate) fn safe_return_to(input: Option<&str>, fallback: &str) -> String {
    match input {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => fallback.to_owned(),
    }
}
