//! Wishlist repository for database operations.
//!
//! Rows are keyed by the unique (user, product) pair; a duplicate insert
//! surfaces as `RepositoryError::Conflict`. Each row carries a denormalized
//! snapshot of the product taken at add time.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use khanjar_core::{Category, Price, ProductId, UserId, WishlistEntryId};

use super::{RepositoryError, conflict_on_unique};
use crate::models::wishlist::{WishlistEntry, WishlistSnapshot};

#[derive(sqlx::FromRow)]
struct WishlistRow {
    id: i32,
    user_id: i32,
    product_id: String,
    product_name: String,
    product_price: i64,
    product_image: String,
    product_category: String,
    created_at: DateTime<Utc>,
}

impl WishlistRow {
    fn into_entry(self) -> Result<WishlistEntry, RepositoryError> {
        let product_id = ProductId::parse(&self.product_id).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid product id in database: {e}"))
        })?;
        let product_category = Category::from_label(&self.product_category).ok_or_else(|| {
            RepositoryError::DataCorruption(format!(
                "unknown category in database: {}",
                self.product_category
            ))
        })?;

        Ok(WishlistEntry {
            id: WishlistEntryId::new(self.id),
            user_id: UserId::new(self.user_id),
            product_id,
            product_name: self.product_name,
            product_price: Price::new(self.product_price),
            product_image: self.product_image,
            product_category,
            created_at: self.created_at,
        })
    }
}

/// Repository for wishlist database operations.
pub struct WishlistRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WishlistRepository<'a> {
    /// Create a new wishlist repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All wishlist rows for a user, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored row is invalid.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<WishlistEntry>, RepositoryError> {
        let rows = sqlx::query_as::<_, WishlistRow>(
            "SELECT id, user_id, product_id, product_name, product_price,
                    product_image, product_category, created_at
             FROM wishlist_items
             WHERE user_id = $1
             ORDER BY created_at ASC, id ASC",
        )
        .bind(user_id.as_i32())
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(WishlistRow::into_entry).collect()
    }

    /// Insert a wishlist row for a user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the (user, product) pair
    /// already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert(
        &self,
        user_id: UserId,
        snapshot: &WishlistSnapshot,
    ) -> Result<WishlistEntry, RepositoryError> {
        let row = sqlx::query_as::<_, WishlistRow>(
            "INSERT INTO wishlist_items
                 (user_id, product_id, product_name, product_price,
                  product_image, product_category)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, user_id, product_id, product_name, product_price,
                       product_image, product_category, created_at",
        )
        .bind(user_id.as_i32())
        .bind(snapshot.product_id.as_str())
        .bind(&snapshot.name)
        .bind(snapshot.price.amount())
        .bind(&snapshot.image)
        .bind(snapshot.category.label())
        .fetch_one(self.pool)
        .await
        .map_err(|e| conflict_on_unique(e, "product already in wishlist"))?;

        row.into_entry()
    }

    /// Delete the row for a (user, product) pair.
    ///
    /// # Returns
    ///
    /// Returns `true` if a row was deleted, `false` if none existed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(
        &self,
        user_id: UserId,
        product_id: &ProductId,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            "DELETE FROM wishlist_items
             WHERE user_id = $1 AND product_id = $2",
        )
        .bind(user_id.as_i32())
        .bind(product_id.as_str())
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Whether a (user, product) row exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn contains(
        &self,
        user_id: UserId,
        product_id: &ProductId,
    ) -> Result<bool, RepositoryError> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                 SELECT 1 FROM wishlist_items
                 WHERE user_id = $1 AND product_id = $2
             )",
        )
        .bind(user_id.as_i32())
        .bind(product_id.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(exists)
    }
}
