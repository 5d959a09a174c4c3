//! Browser `localStorage` persistence for the backend API token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only read/write behavior so the REST client and the
//! auth flow never repeat web-sys glue. On the server every read is `None`.

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "lodgement_portal_token";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored API token, ignoring blank values.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(TOKEN_KEY).ok().flatten()?;
        let token = raw.trim();
        if token.is_empty() { None } else { Some(token.to_owned()) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the API token returned by the login endpoint.
pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Forget the stored API token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
