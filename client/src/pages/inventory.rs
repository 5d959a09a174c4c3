//! Lodgement inventory table with create/edit dialog.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::page_status::{error_view, loading_view};
use crate::components::require_access::RequireAccess;
#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::net::types::{Lodgement, Queue, lodgement_size_label};
use crate::state::loadable::Loadable;
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastKind;
use crate::state::ui::UiState;
use crate::util::auth::Access;
use crate::util::format::availability_label;
use crate::util::inventory::{LodgementDraft, parse_queue_choice};

#[component]
pub fn InventoryPage() -> impl IntoView {
    view! {
        <RequireAccess access=Access::Manager>
            <InventoryTable/>
        </RequireAccess>
    }
}

#[component]
fn InventoryTable() -> impl IntoView {
    let lodgements = RwSignal::new(Loadable::<Vec<Lodgement>>::default());
    let queues = RwSignal::new(Vec::<Queue>::new());
    let editing = RwSignal::new(None::<LodgementDraft>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        lodgements.set(Loadable::from_result(crate::net::api::list_inventory().await));
        match crate::net::api::list_queues().await {
            Ok(items) => queues.set(items),
            Err(e) => log::warn!("queue list unavailable: {e}"),
        }
    });

    let on_saved = Callback::new(move |saved: Lodgement| {
        lodgements.update(|state| {
            if let Loadable::Ready(items) = state {
                if let Some(pos) = items.iter().position(|l| l.id == saved.id) {
                    items[pos] = saved;
                } else {
                    items.push(saved);
                }
            }
        });
        editing.set(None);
    });
    let on_cancel = Callback::new(move |()| editing.set(None));

    view! {
        <section class="page inventory-page">
            <header class="page__header">
                <h1 class="page__title">"Inventory"</h1>
                <button class="btn btn--primary" on:click=move |_| editing.set(Some(LodgementDraft::empty()))>
                    "+ New Lodgement"
                </button>
            </header>
            {move || match lodgements.get() {
                Loadable::Loading => loading_view(),
                Loadable::Failed(message) => error_view(message),
                Loadable::Ready(items) => {
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Id"</th>
                                    <th>"Name"</th>
                                    <th>"Size"</th>
                                    <th>"Location"</th>
                                    <th>"Queue"</th>
                                    <th>"Availability"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {items
                                    .into_iter()
                                    .map(|lodgement| {
                                        let draft = LodgementDraft::from_lodgement(&lodgement);
                                        let badge = availability_label(
                                            lodgement.is_available,
                                            lodgement.busy_until.as_deref(),
                                        );
                                        view! {
                                            <tr>
                                                <td>{lodgement.id}</td>
                                                <td>{lodgement.display_name()}</td>
                                                <td>{lodgement_size_label(lodgement.size)}</td>
                                                <td>{lodgement.location.clone()}</td>
                                                <td>{lodgement.queue.label()}</td>
                                                <td>{badge}</td>
                                                <td>
                                                    <button
                                                        class="btn"
                                                        on:click=move |_| editing.set(Some(draft.clone()))
                                                    >
                                                        "Edit"
                                                    </button>
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
            <Show when=move || editing.get().is_some()>
                <LodgementDialog editing=editing queues=queues on_saved=on_saved on_cancel=on_cancel/>
            </Show>
        </section>
    }
}

/// Modal dialog editing the draft held in `editing`.
#[component]
fn LodgementDialog(
    editing: RwSignal<Option<LodgementDraft>>,
    queues: RwSignal<Vec<Queue>>,
    on_saved: Callback<Lodgement>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let busy = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let field = move |read: fn(&LodgementDraft) -> String| {
        move || editing.with(|d| d.as_ref().map(read).unwrap_or_default())
    };

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let Some(draft) = editing.get() else {
            return;
        };
        let payload = match draft.to_payload() {
            Ok(payload) => payload,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        form_error.set(None);
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match draft.id {
                Some(id) => crate::net::api::update_lodgement(id, payload).await,
                None => crate::net::api::create_lodgement(payload).await,
            };
            match result {
                Ok(saved) => {
                    let verb = if draft.is_new() { "created" } else { "updated" };
                    show_toast(ui, ToastKind::Success, format!("Lodgement {verb}."));
                    on_saved.run(saved);
                }
                Err(e) => show_toast(ui, ToastKind::Error, format!("Could not save the lodgement: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (ui, on_saved, payload);
    });

    let title = move || {
        if editing.with(|d| d.as_ref().is_some_and(LodgementDraft::is_new)) { "New Lodgement" } else { "Edit Lodgement" }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=field(|d| d.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            update_draft(editing, move |d| d.name = value);
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Size"
                    <input
                        class="dialog__input"
                        type="number"
                        min="1"
                        prop:value=field(|d| d.size.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            update_draft(editing, move |d| d.size = value);
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        prop:value=field(|d| d.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            update_draft(editing, move |d| d.description = value);
                        }
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Location"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=field(|d| d.location.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            update_draft(editing, move |d| d.location = value);
                        }
                    />
                </label>
                <label class="dialog__label dialog__label--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || editing.with(|d| d.as_ref().is_some_and(|d| d.is_available))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            update_draft(editing, move |d| d.is_available = checked);
                        }
                    />
                    "Available"
                </label>
                <label class="dialog__label">
                    "Queue"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            let choice = parse_queue_choice(&event_target_value(&ev));
                            update_draft(editing, move |d| d.queue_id = choice);
                        }
                    >
                        <option value="" selected=move || editing.with(|d| d.as_ref().and_then(|d| d.queue_id).is_none())>
                            "Select a queue"
                        </option>
                        {move || {
                            queues
                                .get()
                                .into_iter()
                                .map(|queue| {
                                    let id = queue.id;
                                    view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || {
                                                editing.with(|d| d.as_ref().and_then(|d| d.queue_id) == Some(id))
                                            }
                                        >
                                            {queue.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <Show when=move || form_error.get().is_some()>
                    <p class="dialog__danger">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn update_draft(editing: RwSignal<Option<LodgementDraft>>, apply: impl FnOnce(&mut LodgementDraft)) {
    editing.update(|d| {
        if let Some(draft) = d.as_mut() {
            apply(draft);
        }
    });
}
