//! Wishlist synchronization service.
//!
//! The wishlist is a per-user table in `PostgreSQL`; this service is the
//! only writer. After a successful insert the full collection is re-read
//! rather than appended locally, so callers always observe exactly what the
//! table holds. A failed remote operation leaves no partial local state -
//! callers keep whatever they last read.
//!
//! Identity is passed in per call, taken from the session of the current
//! request. A request made while user A was signed in can therefore never
//! attach its result to user B's view, and a sign-out (session destroyed)
//! clears the wishlist surface immediately.

use sqlx::PgPool;
use thiserror::Error;

use khanjar_core::{ProductId, UserId};

use crate::db::{RepositoryError, WishlistRepository};
use crate::models::wishlist::{WishlistEntry, WishlistSnapshot};

/// Errors that can occur during wishlist operations.
#[derive(Debug, Error)]
pub enum WishlistError {
    /// The (user, product) pair is already saved.
    #[error("already in wishlist")]
    Duplicate,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Wishlist service over the wishlist repository.
pub struct WishlistService<'a> {
    entries: WishlistRepository<'a>,
}

impl<'a> WishlistService<'a> {
    /// Create a new wishlist service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            entries: WishlistRepository::new(pool),
        }
    }

    /// All saved products for a user, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `WishlistError::Repository` if the read fails.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<WishlistEntry>, WishlistError> {
        Ok(self.entries.list_for_user(user_id).await?)
    }

    /// Save a product for a user and return the re-read collection.
    ///
    /// # Errors
    ///
    /// Returns `WishlistError::Duplicate` if the product is already saved
    /// (no state change).
    /// Returns `WishlistError::Repository` if the insert or re-read fails.
    pub async fn add(
        &self,
        user_id: UserId,
        snapshot: &WishlistSnapshot,
    ) -> Result<Vec<WishlistEntry>, WishlistError> {
        self.entries
            .insert(user_id, snapshot)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => WishlistError::Duplicate,
                other => WishlistError::Repository(other),
            })?;

        // Full resync after the write, so the caller's view matches the table
        Ok(self.entries.list_for_user(user_id).await?)
    }

    /// Remove a saved product.
    ///
    /// # Returns
    ///
    /// Returns `true` if a row was removed; removing an absent entry is a
    /// no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns `WishlistError::Repository` if the delete fails.
    pub async fn remove(
        &self,
        user_id: UserId,
        product_id: &ProductId,
    ) -> Result<bool, WishlistError> {
        Ok(self.entries.delete(user_id, product_id).await?)
    }

    /// Whether the user has saved this product.
    ///
    /// # Errors
    ///
    /// Returns `WishlistError::Repository` if the read fails.
    pub async fn contains(
        &self,
        user_id: UserId,
        product_id: &ProductId,
    ) -> Result<bool, WishlistError> {
        Ok(self.entries.contains(user_id, product_id).await?)
    }
}
