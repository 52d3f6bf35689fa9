//! Integration tests for Khanjar.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p khanjar-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - cart merge/removal/totals through the public API
//! - `catalog_manifest` - the shipped manifest against the query layer
//! - `checkout_flow` - totals and validation for checkout
//!
//! These tests exercise cross-crate behavior without a live database or
//! server; flows that need `PostgreSQL` (auth, wishlist persistence) are
//! covered at the repository/service seam and verified manually against a
//! local database.
