//! Search route handlers.
//!
//! Search is a linear case-insensitive substring scan over the catalog; an
//! empty query yields the first few products as suggestions.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::routes::products::ProductCardView;
use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Search suggestions template (HTMX fragment).
#[derive(Template, WebTemplate)]
#[template(path = "partials/search_results.html")]
pub struct SearchResultsTemplate {
    pub query: String,
    pub results: Vec<ProductCardView>,
}

/// Full search page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/search.html")]
pub struct SearchPageTemplate {
    pub query: String,
    pub results: Vec<ProductCardView>,
}

fn run_search(state: &AppState, query: &str) -> Vec<ProductCardView> {
    state
        .catalog()
        .search(query)
        .into_iter()
        .map(ProductCardView::from)
        .collect()
}

/// Search suggestions endpoint (HTMX).
#[instrument(skip(state))]
pub async fn suggest(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> SearchResultsTemplate {
    SearchResultsTemplate {
        results: run_search(&state, &query.q),
        query: query.q,
    }
}

/// Full search page.
#[instrument(skip(state))]
pub async fn search_page(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> SearchPageTemplate {
    SearchPageTemplate {
        results: run_search(&state, &query.q),
        query: query.q,
    }
}
