//! Shared auth helpers: access levels, route guards, and the login/logout flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior through
//! [`install_access_redirect`]; navigation chrome uses [`Access::allows`] to
//! decide which links to show.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::{self, ApiError};
use crate::net::types::{Role, User};
use crate::state::auth::AuthState;
use crate::util::session;

pub const LOGIN_ROUTE: &str = "/login";

/// Who may see a page or navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    /// Managers and admins.
    Manager,
    Admin,
}

impl Access {
    #[must_use]
    pub fn allows(self, user: Option<&User>) -> bool {
        match (self, user) {
            (Self::Public, _) => true,
            (_, None) => false,
            (Self::Authenticated, Some(_)) => true,
            (Self::Manager, Some(u)) => u.role.is_staff(),
            (Self::Admin, Some(u)) => u.role == Role::Admin,
        }
    }
}

/// Where a guarded page should send the visitor, if anywhere.
///
/// Nothing happens while the session is still being restored.
#[must_use]
pub fn redirect_target(state: &AuthState, access: Access) -> Option<&'static str> {
    if state.loading || access.allows(state.user.as_ref()) {
        None
    } else {
        Some(LOGIN_ROUTE)
    }
}

/// Redirect to `/login` whenever auth has loaded and the user lacks `access`.
pub fn install_access_redirect<F>(auth: RwSignal<AuthState>, access: Access, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(&auth.get(), access) {
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Whether a guarded page may render its content yet.
#[must_use]
pub fn may_render(state: &AuthState, access: Access) -> bool {
    !state.loading && access.allows(state.user.as_ref())
}

/// Restore the session from a stored token on startup.
///
/// Any failure discards the stored token. Always ends with `loading = false`.
pub async fn restore_session(auth: RwSignal<AuthState>) {
    if session::load_token().is_none() {
        auth.set(AuthState::default());
        return;
    }
    match api::fetch_me().await {
        Ok(user) => auth.set(AuthState { user: Some(user), loading: false }),
        Err(e) => {
            if discards_token(&e) {
                session::clear_token();
            }
            auth.set(AuthState::default());
        }
    }
}

/// Whether a failed session restore should forget the stored token.
///
/// Any backend or transport failure does; only the server-side stub, which
/// never saw the token, leaves it in place.
#[must_use]
pub fn discards_token(err: &ApiError) -> bool {
    !matches!(err, ApiError::Unavailable)
}

/// Exchange credentials for a token, persist it, and load the user.
///
/// # Errors
///
/// Returns an error if the credentials are rejected or the user cannot be loaded.
pub async fn sign_in(auth: RwSignal<AuthState>, email: &str, password: &str) -> Result<User, ApiError> {
    let token = api::login(email, password).await?;
    session::store_token(&token);
    match api::fetch_me().await {
        Ok(user) => {
            auth.set(AuthState { user: Some(user.clone()), loading: false });
            Ok(user)
        }
        Err(e) => {
            session::clear_token();
            Err(e)
        }
    }
}

/// Forget the token and the current user.
pub fn sign_out(auth: RwSignal<AuthState>) {
    session::clear_token();
    auth.set(AuthState::default());
}

/// Trim the login form input and require both fields.
///
/// # Errors
///
/// Returns the inline message to show when a field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}
