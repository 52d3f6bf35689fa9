//! Wishlist route handlers.
//!
//! Writes require a signed-in identity: adding without one surfaces a
//! sign-in prompt, removing without one is a no-op. Identity is read from
//! the session of each request, so a sign-out can never leave a previous
//! user's wishlist visible.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use khanjar_core::{Price, ProductId};

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::{OptionalAuth, RequireAuth};
use crate::models::wishlist::{WishlistEntry, WishlistSnapshot};
use crate::routes::safe_return_to;
use crate::services::WishlistService;
use crate::state::AppState;

/// Wishlist form data for add/remove actions.
#[derive(Debug, Deserialize)]
pub struct WishlistForm {
    pub product_id: String,
    pub return_to: Option<String>,
}

/// Wishlist row display data.
///
/// Name, price, image, and category come from the snapshot taken at add
/// time; availability is re-derived from the live catalog.
#[derive(Clone)]
pub struct WishlistItemView {
    pub product_id: String,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub category: &'static str,
    pub sold_out: bool,
}

/// Wishlist page template.
#[derive(Template, WebTemplate)]
#[template(path = "wishlist/show.html")]
pub struct WishlistTemplate {
    pub items: Vec<WishlistItemView>,
}

fn item_view(state: &AppState, entry: &WishlistEntry) -> WishlistItemView {
    // A product that left the catalog has nothing left to buy
    let sold_out = state
        .catalog()
        .get(entry.product_id.as_str())
        .is_none_or(khanjar_core::Product::is_sold_out);

    WishlistItemView {
        product_id: entry.product_id.as_str().to_owned(),
        name: entry.product_name.clone(),
        price: entry.product_price,
        image: entry.product_image.clone(),
        category: entry.product_category.label(),
        sold_out,
    }
}

/// Display the wishlist page.
#[instrument(skip(state, user))]
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<WishlistTemplate> {
    let entries = WishlistService::new(state.pool()).list(user.id).await?;

    Ok(WishlistTemplate {
        items: entries
            .iter()
            .map(|entry| item_view(&state, entry))
            .collect(),
    })
}

/// Save a product to the wishlist, then redirect back.
///
/// Requires a signed-in identity; a duplicate add is rejected with no state
/// change and surfaced as "already saved".
#[instrument(skip(state, user))]
pub async fn add(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Form(form): Form<WishlistForm>,
) -> Result<Response> {
    let user = user.ok_or(AppError::AuthRequired)?;

    let product = state
        .catalog()
        .get(&form.product_id)
        .ok_or_else(|| AppError::NotFound(form.product_id.clone()))?;

    let snapshot = WishlistSnapshot::from(product);
    let entries = WishlistService::new(state.pool())
        .add(user.id, &snapshot)
        .await?;
    tracing::debug!(count = entries.len(), "Wishlist resynced after add");

    Ok(Redirect::to(&safe_return_to(form.return_to.as_deref(), "/wishlist")).into_response())
}

/// Remove a saved product, then redirect back.
///
/// A signed-out request and an absent entry are both no-ops, not errors.
#[instrument(skip(state, user))]
pub async fn remove(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Form(form): Form<WishlistForm>,
) -> Result<Response> {
    let target = safe_return_to(form.return_to.as_deref(), "/wishlist");

    let Some(user) = user else {
        return Ok(Redirect::to(&target).into_response());
    };

    let product_id = ProductId::parse(&form.product_id)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let removed = WishlistService::new(state.pool())
        .remove(user.id, &product_id)
        .await?;
    if !removed {
        tracing::debug!(product = %product_id, "Wishlist remove was a no-op");
    }

    Ok(Redirect::to(&target).into_response())
}
