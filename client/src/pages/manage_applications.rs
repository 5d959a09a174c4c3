//! Manager review queue: applications waiting for a decision.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::page_status::{error_view, loading_view};
use crate::components::require_access::RequireAccess;
use crate::net::types::Application;
use crate::state::loadable::Loadable;
use crate::util::auth::Access;
use crate::util::format::short_date;

#[component]
pub fn ManageApplicationsPage() -> impl IntoView {
    view! {
        <RequireAccess access=Access::Manager>
            <ReviewQueue/>
        </RequireAccess>
    }
}

#[component]
fn ReviewQueue() -> impl IntoView {
    let applications = RwSignal::new(Loadable::<Vec<Application>>::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        applications.set(Loadable::from_result(crate::net::api::list_review_queue().await));
    });

    view! {
        <section class="page manage-applications-page">
            <h1 class="page__title">"Applications Waiting for Review"</h1>
            {move || match applications.get() {
                Loadable::Loading => loading_view(),
                Loadable::Failed(message) => error_view(message),
                Loadable::Ready(items) if items.is_empty() => {
                    view! { <p class="page__empty">"Nothing is waiting for review."</p> }.into_any()
                }
                Loadable::Ready(items) => {
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Id"</th>
                                    <th>"Email"</th>
                                    <th>"Queue"</th>
                                    <th>"Date"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {items
                                    .into_iter()
                                    .map(|app| {
                                        let date = short_date(&app.created_at).to_owned();
                                        view! {
                                            <tr>
                                                <td>{app.id}</td>
                                                <td>{app.user.email}</td>
                                                <td>{app.queue.label()}</td>
                                                <td>{date}</td>
                                                <td>
                                                    <a class="btn" href=format!("/manage/applications/{}", app.id)>
                                                        "Open"
                                                    </a>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
