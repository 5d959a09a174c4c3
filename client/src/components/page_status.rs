//! Inline loading and error placeholders shared by every page.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

#[must_use]
pub fn loading_view() -> AnyView {
    view! { <p class="page__status">"Loading..."</p> }.into_any()
}

#[must_use]
pub fn error_view(message: String) -> AnyView {
    view! { <p class="page__error">{format!("Error: {message}")}</p> }.into_any()
}
