//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_header::NavHeader;
use crate::components::toast::ToastHost;
use crate::pages::{
    application_detail::ApplicationDetailPage, applications::ApplicationsPage, apply::ApplyPage, faq::FaqPage,
    home::HomePage, inventory::InventoryPage, lodgements::LodgementsPage, login::LoginPage,
    manage_application_detail::ManageApplicationDetailPage, manage_applications::ManageApplicationsPage,
    users::UsersPage,
};
use crate::state::{auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and UI contexts, restores the stored session, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Auth starts pending so guarded routes wait for the session restore.
    let auth = RwSignal::new(AuthState::pending());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::util::auth::restore_session(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Lodgement Portal"/>

        <Router>
            <NavHeader/>
            <ToastHost/>
            <main class="portal-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("lodgements") view=LodgementsPage/>
                    <Route path=StaticSegment("faq") view=FaqPage/>
                    <Route path=StaticSegment("apply") view=ApplyPage/>
                    <Route path=StaticSegment("applications") view=ApplicationsPage/>
                    <Route path=(StaticSegment("application"), ParamSegment("id")) view=ApplicationDetailPage/>
                    <Route
                        path=(StaticSegment("manage"), StaticSegment("applications"))
                        view=ManageApplicationsPage
                    />
                    <Route
                        path=(StaticSegment("manage"), StaticSegment("applications"), ParamSegment("id"))
                        view=ManageApplicationDetailPage
                    />
                    <Route path=(StaticSegment("manage"), StaticSegment("inventory")) view=InventoryPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("users")) view=UsersPage/>
                </Routes>
            </main>
        </Router>
    }
}
