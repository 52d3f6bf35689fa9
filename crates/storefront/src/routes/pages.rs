//! Static page route handlers: lookbook and the 404 fallback.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::routes::products::ProductCardView;
use crate::state::AppState;

/// Lookbook page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/lookbook.html")]
pub struct LookbookTemplate {
    pub products: Vec<ProductCardView>,
}

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {}

/// Display the lookbook: an editorial cut of the featured pieces.
#[instrument(skip(state))]
pub async fn lookbook(State(state): State<AppState>) -> LookbookTemplate {
    LookbookTemplate {
        products: state
            .catalog()
            .featured()
            .into_iter()
            .map(ProductCardView::from)
            .collect(),
    }
}

/// Fallback handler for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NotFoundTemplate {})
}
