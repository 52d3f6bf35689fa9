//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::filters;
use crate::routes::products::ProductCardView;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub featured: Vec<ProductCardView>,
    pub new_arrivals: Vec<ProductCardView>,
}

/// Display the home page: hero, featured products, new arrivals.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> HomeTemplate {
    HomeTemplate {
        featured: state
            .catalog()
            .featured()
            .into_iter()
            .map(ProductCardView::from)
            .collect(),
        new_arrivals: state
            .catalog()
            .new_arrivals()
            .into_iter()
            .map(ProductCardView::from)
            .collect(),
    }
}
