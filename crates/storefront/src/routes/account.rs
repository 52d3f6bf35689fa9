//! Account route handlers.
//!
//! Account settings: display name and password changes. All routes require
//! a signed-in identity.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::middleware::{RequireAuth, set_current_user};
use crate::models::CurrentUser;
use crate::routes::auth::MessageQuery;
use crate::services::AuthService;
use crate::services::auth::AuthError;
use crate::state::AppState;

/// Profile form data.
#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub display_name: String,
}

/// Password change form data.
#[derive(Debug, Deserialize)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub new_password_confirm: String,
}

/// Account settings page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/show.html")]
pub struct AccountTemplate {
    pub email: String,
    pub display_name: String,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Display the account settings page.
#[instrument(skip(user))]
pub async fn index(
    RequireAuth(user): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> AccountTemplate {
    AccountTemplate {
        email: user.email.to_string(),
        display_name: user.display_name.unwrap_or_default(),
        error: query.error,
        success: query.success,
    }
}

/// Update the display name.
#[instrument(skip(state, session, user))]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(user): RequireAuth,
    Form(form): Form<ProfileForm>,
) -> Response {
    if let Err(e) = AuthService::new(state.pool())
        .update_display_name(user.id, &form.display_name)
        .await
    {
        tracing::error!("Failed to update display name: {e}");
        return Redirect::to("/account?error=failed").into_response();
    }

    // Keep the session identity in step with the table
    let trimmed = form.display_name.trim();
    let refreshed = CurrentUser {
        display_name: (!trimmed.is_empty()).then(|| trimmed.to_owned()),
        ..user
    };
    if let Err(e) = set_current_user(&session, &refreshed).await {
        tracing::error!("Failed to refresh session user: {e}");
    }

    Redirect::to("/account?success=profile").into_response()
}

/// Change the password after verifying the current one.
#[instrument(skip(state, user, form))]
pub async fn change_password(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<PasswordForm>,
) -> Response {
    if form.new_password != form.new_password_confirm {
        return Redirect::to("/account?error=password_mismatch").into_response();
    }

    match AuthService::new(state.pool())
        .change_password(user.id, &form.current_password, &form.new_password)
        .await
    {
        Ok(()) => Redirect::to("/account?success=password").into_response(),
        Err(AuthError::InvalidCredentials) => {
            Redirect::to("/account?error=current_password").into_response()
        }
        Err(AuthError::WeakPassword(_)) => {
            Redirect::to("/account?error=password_too_short").into_response()
        }
        Err(e) => {
            tracing::error!("Failed to change password: {e}");
            Redirect::to("/account?error=failed").into_response()
        }
    }
}
