//! Top navigation bar with role-gated links.
//!
//! DESIGN
//! ======
//! Link visibility uses the same `Access` levels as the route guards, so a
//! link is shown exactly when its page would render.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{Access, LOGIN_ROUTE, sign_out};

const NAV_LINKS: &[(&str, &str, Access)] = &[
    ("/", "Home", Access::Public),
    ("/lodgements", "Lodgements", Access::Public),
    ("/faq", "FAQ", Access::Public),
    ("/apply", "Apply", Access::Authenticated),
    ("/applications", "My Applications", Access::Authenticated),
    ("/manage/applications", "Review", Access::Manager),
    ("/manage/inventory", "Inventory", Access::Manager),
    ("/admin/users", "Users", Access::Admin),
];

#[component]
pub fn NavHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        sign_out(auth);
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <header class="nav-header">
            <a class="nav-header__brand" href="/">
                "Lodgement Portal"
            </a>
            <nav class="nav-header__links">
                {move || {
                    let state = auth.get();
                    NAV_LINKS
                        .iter()
                        .filter(|(_, _, access)| access.allows(state.user.as_ref()))
                        .map(|(href, label, _)| {
                            view! { <a class="nav-header__link" href=*href>{*label}</a> }
                        })
                        .collect::<Vec<_>>()
                }}
            </nav>
            <span class="nav-header__spacer"></span>
            <Show
                when=move || auth.get().is_logged_in()
                fallback=move || {
                    view! {
                        <a class="btn nav-header__login" href=LOGIN_ROUTE>
                            "Login"
                        </a>
                    }
                }
            >
                <span class="nav-header__self">
                    {move || auth.get().user.map(|u| u.display_name()).unwrap_or_default()}
                </span>
                <button class="btn nav-header__logout" on:click=on_logout.clone() title="Logout">
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
