//! The signed-in user's own applications.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::page_status::{error_view, loading_view};
use crate::components::require_access::RequireAccess;
use crate::net::types::Application;
use crate::state::loadable::Loadable;
use crate::util::auth::Access;
use crate::util::format::{short_date, status_class};

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    view! {
        <RequireAccess access=Access::Authenticated>
            <ApplicationsList/>
        </RequireAccess>
    }
}

#[component]
fn ApplicationsList() -> impl IntoView {
    let applications = RwSignal::new(Loadable::<Vec<Application>>::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        applications.set(Loadable::from_result(crate::net::api::list_my_applications().await));
    });

    view! {
        <section class="page applications-page">
            <h1 class="page__title">"My Applications"</h1>
            {move || match applications.get() {
                Loadable::Loading => loading_view(),
                Loadable::Failed(message) => error_view(message),
                Loadable::Ready(items) if items.is_empty() => {
                    view! {
                        <p class="page__empty">
                            "You have no applications yet. "
                            <a href="/apply">"Apply now"</a>
                        </p>
                    }
                        .into_any()
                }
                Loadable::Ready(items) => {
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Id"</th>
                                    <th>"Queue"</th>
                                    <th>"Status"</th>
                                    <th>"Points"</th>
                                    <th>"Rank"</th>
                                    <th>"Created"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {items.into_iter().map(application_row).collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

fn application_row(application: Application) -> impl IntoView {
    let class = status_class(&application.status);
    let created = short_date(&application.created_at).to_owned();
    let points = application.total_points.map_or_else(|| "-".to_owned(), |p| p.to_string());
    let rank = application.rank.map_or_else(|| "-".to_owned(), |r| r.to_string());
    view! {
        <tr>
            <td>{application.id}</td>
            <td>{application.queue.label()}</td>
            <td>
                <span class=class>{application.status}</span>
            </td>
            <td>{points}</td>
            <td>{rank}</td>
            <td>{created}</td>
            <td>
                <a class="btn" href=format!("/application/{}", application.id)>
                    "Details"
                </a>
            </td>
        </tr>
    }
}
