//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use tracing::instrument;

use khanjar_core::{Price, Product};

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::services::WishlistService;
use crate::state::AppState;

/// Product card display data for grid templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub price: Price,
    pub original_price: Option<Price>,
    pub rating: f32,
    pub image: String,
    pub category: &'static str,
    pub sold_out: bool,
    pub on_sale: bool,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_str().to_owned(),
            name: product.name.clone(),
            price: product.price,
            original_price: product.original_price,
            rating: product.rating,
            image: product.image.clone(),
            category: product.category.label(),
            sold_out: product.is_sold_out(),
            on_sale: product.is_on_sale(),
        }
    }
}

/// Size option display data for the detail page.
#[derive(Clone)]
pub struct SizeOptionView {
    pub size: String,
    pub available: bool,
}

/// Query parameters for post-action notices.
#[derive(Debug, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductCardView,
    pub description: String,
    pub material: String,
    pub features: Vec<String>,
    pub sizes: Vec<SizeOptionView>,
    /// First available size, or empty when sold out.
    pub default_size: String,
    pub in_wishlist: bool,
    pub signed_in: bool,
    pub notice: Option<String>,
}

/// Display product detail page.
#[instrument(skip(state, user))]
pub async fn show(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Path(id): Path<String>,
    Query(query): Query<NoticeQuery>,
) -> Result<ProductShowTemplate> {
    let product = state
        .catalog()
        .get(&id)
        .ok_or_else(|| AppError::NotFound(id.clone()))?;

    // A wishlist read failure must not take down the product page
    let in_wishlist = match &user {
        Some(current) => WishlistService::new(state.pool())
            .contains(current.id, &product.id)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to check wishlist for {id}: {e}");
                false
            }),
        None => false,
    };

    let sizes = product
        .inventory
        .iter()
        .map(|entry| SizeOptionView {
            size: entry.size.clone(),
            available: entry.is_available(),
        })
        .collect();

    Ok(ProductShowTemplate {
        product: ProductCardView::from(product),
        description: product.description.clone(),
        material: product.material.clone(),
        features: product.features.clone(),
        sizes,
        default_size: product.first_available_size().unwrap_or_default().to_owned(),
        in_wishlist,
        signed_in: user.is_some(),
        notice: query.notice,
    })
}
