//! Queue selection and application creation.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::page_status::{error_view, loading_view};
use crate::components::require_access::RequireAccess;
use crate::components::toast::show_toast;
use crate::net::types::Queue;
use crate::state::loadable::Loadable;
use crate::state::ui::{ToastKind, UiState};
use crate::util::auth::Access;
use crate::util::inventory::parse_queue_choice;

#[component]
pub fn ApplyPage() -> impl IntoView {
    view! {
        <RequireAccess access=Access::Authenticated>
            <ApplyForm/>
        </RequireAccess>
    }
}

#[component]
fn ApplyForm() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let queues = RwSignal::new(Loadable::<Vec<Queue>>::default());
    let selected = RwSignal::new(None::<i64>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::list_queues().await;
        if let Ok(items) = &result {
            selected.set(items.first().map(|q| q.id));
        }
        queues.set(Loadable::from_result(result));
    });

    let on_apply = move |_| {
        let Some(queue_id) = selected.get() else {
            show_toast(ui, ToastKind::Warning, "Select a category first.");
            return;
        };
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::apply_to_queue(queue_id).await {
                    Ok(application) => {
                        show_toast(ui, ToastKind::Success, "Application created.");
                        navigate(&format!("/application/{}", application.id), NavigateOptions::default());
                    }
                    Err(e) => show_toast(ui, ToastKind::Error, format!("Could not apply: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, queue_id);
    };

    view! {
        <section class="page apply-page">
            <h1 class="page__title">"Apply for Lodging"</h1>
            {move || match queues.get() {
                Loadable::Loading => loading_view(),
                Loadable::Failed(message) => error_view(message),
                Loadable::Ready(items) if items.is_empty() => {
                    view! { <p class="page__empty">"No application categories are open."</p> }.into_any()
                }
                Loadable::Ready(items) => {
                    view! {
                        <div class="card apply-form">
                            <label class="form__label">
                                "Select the category you are applying to"
                                <select
                                    class="form__input"
                                    on:change=move |ev| selected.set(parse_queue_choice(&event_target_value(&ev)))
                                >
                                    {items
                                        .into_iter()
                                        .map(|queue| {
                                            let id = queue.id;
                                            view! {
                                                <option value=id.to_string() selected=move || selected.get() == Some(id)>
                                                    {queue.label()}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                            </label>
                            <button
                                class="btn btn--primary"
                                disabled=move || busy.get()
                                on:click=on_apply.clone()
                            >
                                "Apply"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
