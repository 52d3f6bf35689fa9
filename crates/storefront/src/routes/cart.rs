//! Cart route handlers.
//!
//! The cart lives in the session; every surface that renders cart state
//! (header badge, cart page, checkout) reads the same session row, so the
//! totals can never diverge between views. Quantity updates and removals
//! use HTMX fragments; adding redirects back to the originating page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use khanjar_core::{Cart, CartLine, Price, line_key};

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::session_keys;
use crate::routes::safe_return_to;
use crate::state::AppState;

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the session cart, defaulting to empty.
pub async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Write the cart back to the session.
///
/// Must be called after every mutation, before the response is built, so
/// reads within this session observe the last committed write.
pub async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

// =============================================================================
// View Types
// =============================================================================

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub category: &'static str,
    pub price: Price,
    pub line_price: Price,
    pub quantity: u32,
    pub image: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.clone(),
            name: line.name.clone(),
            category: line.category.label(),
            price: line.price,
            line_price: line.line_total(),
            quantity: line.quantity,
            image: line.image.clone(),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: Price,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            subtotal: cart.total_price(),
            item_count: cart.total_items(),
        }
    }
}

// =============================================================================
// Form Types
// =============================================================================

/// Add to cart form data. Size defaults to empty so an unselected radio
/// is reported as "select a size" instead of a form-decode failure.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    #[serde(default)]
    pub size: String,
    pub quantity: Option<u32>,
    pub return_to: Option<String>,
}

/// Update cart form data. Quantity is signed so a non-positive value can
/// express removal.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub line_id: String,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub line_id: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<CartShowTemplate> {
    let cart = load_cart(&session).await?;
    Ok(CartShowTemplate {
        cart: CartView::from(&cart),
    })
}

/// Validate an add-to-cart request against the catalog and build the line.
///
/// The cart itself never rejects an add; availability is enforced here, at
/// the edge, against the derived per-size stock.
fn build_line(state: &AppState, form: &AddToCartForm) -> Result<CartLine> {
    let product = state
        .catalog()
        .get(&form.product_id)
        .ok_or_else(|| AppError::NotFound(form.product_id.clone()))?;

    if form.size.is_empty() {
        return Err(AppError::BadRequest(
            "please select an available size".to_owned(),
        ));
    }

    let stock = product
        .stock_for(&form.size)
        .ok_or_else(|| AppError::BadRequest(format!("unknown size {}", form.size)))?;
    if stock == 0 {
        return Err(AppError::BadRequest(format!(
            "size {} is sold out",
            form.size
        )));
    }

    Ok(CartLine {
        id: line_key(&product.id, &form.size),
        name: format!("{} ({})", product.name, form.size),
        price: product.price,
        image: product.image.clone(),
        category: product.category,
        quantity: form.quantity.unwrap_or(1),
    })
}

/// Add an item to the cart, then redirect back to the originating page.
///
/// Re-adding the same product and size merges quantities rather than
/// creating a duplicate row.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let line = build_line(&state, &form)?;

    let mut cart = load_cart(&session).await?;
    cart.add(line);
    save_cart(&session, &cart).await?;

    let target = safe_return_to(form.return_to.as_deref(), "/cart");
    let location = if target.contains('?') {
        target
    } else {
        format!("{target}?notice=added")
    };
    Ok(Redirect::to(&location).into_response())
}

/// Add an item to the cart, then go straight to checkout.
#[instrument(skip(state, session))]
pub async fn buy_now(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let line = build_line(&state, &form)?;

    let mut cart = load_cart(&session).await?;
    cart.add(line);
    save_cart(&session, &cart).await?;

    Ok(Redirect::to("/checkout").into_response())
}

/// Update a line's quantity (HTMX).
///
/// A non-positive quantity removes the line entirely; an unknown line id is
/// a no-op.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Response> {
    let quantity = u32::try_from(form.quantity).unwrap_or(0);

    let mut cart = load_cart(&session).await?;
    cart.set_quantity(&form.line_id, quantity);
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Response> {
    let mut cart = load_cart(&session).await?;
    cart.remove(&form.line_id);
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Empty the cart (HTMX).
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Response> {
    let mut cart = load_cart(&session).await?;
    cart.clear();
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Get the cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartCountTemplate> {
    let cart = load_cart(&session).await?;
    Ok(CartCountTemplate {
        count: cart.total_items(),
    })
}
