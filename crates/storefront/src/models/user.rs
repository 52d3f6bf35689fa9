//! User model types.

use chrono::{DateTime, Utc};

use khanjar_core::{Email, UserId};

/// A storefront user.
#[derive(Debug, Clone)]
pub struct User {
    /// User's database ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Optional display name shown in the account area.
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
