//! Collection and derived-listing route handlers.
//!
//! All listings are pure reads over the catalog; order is catalog order.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;

use khanjar_core::Category;

use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::products::ProductCardView;
use crate::state::AppState;

/// Listing page template, shared by all collection views.
#[derive(Template, WebTemplate)]
#[template(path = "collections/show.html")]
pub struct CollectionTemplate {
    pub title: String,
    pub products: Vec<ProductCardView>,
}

/// Display the full collection.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> CollectionTemplate {
    CollectionTemplate {
        title: "All Collection".to_owned(),
        products: state
            .catalog()
            .products()
            .iter()
            .map(ProductCardView::from)
            .collect(),
    }
}

/// Display a category listing.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<CollectionTemplate> {
    let category =
        Category::from_handle(&handle).ok_or_else(|| AppError::NotFound(handle.clone()))?;

    Ok(CollectionTemplate {
        title: category.label().to_owned(),
        products: state
            .catalog()
            .by_category(category)
            .into_iter()
            .map(ProductCardView::from)
            .collect(),
    })
}

/// Display products tagged as new arrivals.
#[instrument(skip(state))]
pub async fn new_arrivals(State(state): State<AppState>) -> CollectionTemplate {
    CollectionTemplate {
        title: "New Arrivals".to_owned(),
        products: state
            .catalog()
            .new_arrivals()
            .into_iter()
            .map(ProductCardView::from)
            .collect(),
    }
}

/// Display products on sale (tagged or discounted).
#[instrument(skip(state))]
pub async fn sale(State(state): State<AppState>) -> CollectionTemplate {
    CollectionTemplate {
        title: "Sale".to_owned(),
        products: state
            .catalog()
            .on_sale()
            .into_iter()
            .map(ProductCardView::from)
            .collect(),
    }
}
