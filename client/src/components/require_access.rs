//! Route guard wrapper for pages that need a signed-in user or a staff role.
//!
//! DESIGN
//! ======
//! Children are constructed only once auth has loaded and the user qualifies,
//! so page fetches never run for visitors who are about to be redirected.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{Access, install_access_redirect, may_render};

#[component]
pub fn RequireAccess(access: Access, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_access_redirect(auth, access, use_navigate());

    view! {
        <Show
            when=move || may_render(&auth.get(), access)
            fallback=move || {
                view! {
                    <p class="page__status">
                        {move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}
                    </p>
                }
            }
        >
            {children()}
        </Show>
    }
}
