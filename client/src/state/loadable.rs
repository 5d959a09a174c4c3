//! Fetch lifecycle for page-level queries.

#[cfg(test)]
#[path = "loadable_test.rs"]
mod loadable_test;

use crate::net::api::ApiError;

/// Outcome of a page fetch: pending, failed with a message, or loaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Loadable<T> {
    #[must_use]
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
