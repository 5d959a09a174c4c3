//! Applicant view of one application: status, scoring form, documents.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every mutation (form submit, upload, cancel) returns the refreshed
//! application from the backend, which replaces the page's copy wholesale.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::components::page_status::{error_view, loading_view};
use crate::components::require_access::RequireAccess;
#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::net::types::{Application, ApplicationDocument, Document, FieldType};
use crate::state::loadable::Loadable;
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastKind;
use crate::state::ui::UiState;
use crate::util::auth::Access;
use crate::util::format::{parse_route_id, short_date, status_class};
use crate::util::scoring::{FieldValue, ScoringDraft};

#[component]
pub fn ApplicationDetailPage() -> impl IntoView {
    view! {
        <RequireAccess access=Access::Authenticated>
            <ApplicationDetail/>
        </RequireAccess>
    }
}

#[component]
fn ApplicationDetail() -> impl IntoView {
    let params = use_params_map();
    let application = RwSignal::new(Loadable::<Application>::default());

    Effect::new(move || {
        let Some(id) = parse_route_id(params.read().get("id").as_deref()) else {
            application.set(Loadable::Failed("Invalid application id".to_owned()));
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            application.set(Loadable::from_result(crate::net::api::fetch_application(id).await));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <section class="page application-detail-page">
            {move || match application.get() {
                Loadable::Loading => loading_view(),
                Loadable::Failed(message) => error_view(message),
                Loadable::Ready(app) => {
                    view! {
                        <Summary application=app.clone() on_changed=application/>
                        <ScoringFormEditor application=app.clone() on_changed=application/>
                        <DocumentList documents=app.documents.clone()/>
                        <UploadPanel application=app on_changed=application/>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn Summary(application: Application, on_changed: RwSignal<Loadable<Application>>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let busy = RwSignal::new(false);
    let id = application.id;
    let cancellable = application.parsed_status().is_some_and(|s| s.is_cancellable());

    let on_cancel = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::cancel_application(id).await {
                Ok(updated) => {
                    show_toast(ui, ToastKind::Success, "Application cancelled.");
                    on_changed.set(Loadable::Ready(updated));
                }
                Err(e) => show_toast(ui, ToastKind::Error, format!("Could not cancel the application: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (ui, on_changed);
    };

    let queue = &application.queue;
    view! {
        <header class="card application-summary">
            <h1 class="page__title">{format!("Application #{id}")}</h1>
            <dl class="summary-grid">
                <dt>"Status"</dt>
                <dd>
                    <span class=status_class(&application.status)>{application.status.clone()}</span>
                </dd>
                <dt>"Category"</dt>
                <dd>{queue.label()}</dd>
                <dt>"Size"</dt>
                <dd>{queue.lodgement_size.clone()}</dd>
                <dt>"Total points"</dt>
                <dd>{application.total_points.map_or_else(|| "-".to_owned(), |p| p.to_string())}</dd>
                <dt>"Rank"</dt>
                <dd>{application.rank.map_or_else(|| "-".to_owned(), |r| r.to_string())}</dd>
                <dt>"Estimated availability"</dt>
                <dd>{application.estimated_availability.clone().unwrap_or_else(|| "-".to_owned())}</dd>
                <dt>"Created"</dt>
                <dd>{short_date(&application.created_at).to_owned()}</dd>
            </dl>
            {cancellable
                .then(|| {
                    view! {
                        <button class="btn btn--danger" disabled=move || busy.get() on:click=on_cancel>
                            "Cancel Application"
                        </button>
                    }
                })}
        </header>
    }
}

#[component]
fn ScoringFormEditor(application: Application, on_changed: RwSignal<Loadable<Application>>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let Some(form) = application.scoring_form.clone() else {
        return view! { <p class="page__empty">"This application has no scoring form."</p> }.into_any();
    };
    let id = application.id;
    let draft = RwSignal::new(ScoringDraft::new(&form.items));
    let form_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let answers = match draft.with(ScoringDraft::to_answers) {
            Ok(answers) => answers,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        form_error.set(None);
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_scoring_form(id, &answers).await {
                Ok(updated) => {
                    show_toast(ui, ToastKind::Success, "Scoring form submitted.");
                    on_changed.set(Loadable::Ready(updated));
                }
                Err(e) => show_toast(ui, ToastKind::Error, format!("Could not submit the form: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (ui, on_changed, id, answers);
    };

    view! {
        <form class="card scoring-form" on:submit=on_submit>
            <h2 class="card__title">"Application Form"</h2>
            <ul class="scoring-form__items">
                {form
                    .items
                    .into_iter()
                    .map(|item| {
                        let item_id = item.id;
                        let input = match item.field_type {
                            FieldType::Boolean => {
                                view! {
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            draft.with(|d| d.value(item_id).is_some_and(FieldValue::as_flag))
                                        }
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            draft.update(|d| d.set(item_id, FieldValue::Flag(checked)));
                                        }
                                    />
                                }
                                    .into_any()
                            }
                            kind => {
                                let input_type = if kind == FieldType::Integer { "number" } else { "text" };
                                view! {
                                    <input
                                        class="form__input"
                                        type=input_type
                                        prop:value=move || {
                                            draft
                                                .with(|d| d.value(item_id).map(|v| v.as_text().to_owned()))
                                                .unwrap_or_default()
                                        }
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            draft.update(|d| d.set(item_id, FieldValue::Text(value)));
                                        }
                                    />
                                }
                                    .into_any()
                            }
                        };
                        view! {
                            <li class="scoring-form__item">
                                <label class="scoring-form__label">
                                    <span>{item.label}</span>
                                    <small class="scoring-form__caption">{item.caption}</small>
                                </label>
                                {input}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <Show when=move || form_error.get().is_some()>
                <p class="page__error">{move || form_error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Submit"
            </button>
        </form>
    }
    .into_any()
}

#[component]
fn DocumentList(documents: Vec<ApplicationDocument>) -> impl IntoView {
    if documents.is_empty() {
        return view! { <p class="page__empty">"No documents uploaded yet."</p> }.into_any();
    }
    view! {
        <div class="card">
            <h2 class="card__title">"Uploaded Documents"</h2>
            <ul class="document-list">
                {documents
                    .into_iter()
                    .map(|doc| {
                        view! {
                            <li class="document-list__item">
                                <span class="document-list__name">{doc.document.name}</span>
                                <span class="document-list__description">{doc.description}</span>
                                <span class="document-list__state">
                                    {if doc.is_approved { "Approved" } else { "Awaiting review" }}
                                </span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
    .into_any()
}

#[component]
fn UploadPanel(application: Application, on_changed: RwSignal<Loadable<Application>>) -> impl IntoView {
    let accepts = application.parsed_status().is_none_or(|s| s.accepts_documents());
    let required: Vec<Document> = application.queue.required_documents.clone();
    if !accepts || required.is_empty() {
        return ().into_any();
    }

    let ui = expect_context::<RwSignal<UiState>>();
    let id = application.id;
    let selected = RwSignal::new(required.first().map(|d| d.id));
    let description = RwSignal::new(String::new());
    let upload_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let on_upload = move |_| {
        if busy.get() {
            return;
        }
        let Some(document_id) = selected.get() else {
            upload_error.set(Some("Select a document type.".to_owned()));
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            use crate::net::upload::{failure_message, upload_document};

            let Some(file) = file_ref.get().and_then(|input| input.files()).and_then(|files| files.get(0)) else {
                upload_error.set(Some("Choose a file to upload.".to_owned()));
                return;
            };
            upload_error.set(None);
            busy.set(true);
            let note = description.get();
            leptos::task::spawn_local(async move {
                match upload_document(id, document_id, note, file).await {
                    Ok(updated) => {
                        show_toast(ui, ToastKind::Success, "Document uploaded.");
                        description.set(String::new());
                        on_changed.set(Loadable::Ready(updated));
                    }
                    Err((step, detail)) => upload_error.set(Some(failure_message(step, &detail))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ui, on_changed, id, document_id, file_ref);
    };

    view! {
        <div class="card upload-panel">
            <h2 class="card__title">"Upload a Document"</h2>
            <label class="form__label">
                "Document"
                <select
                    class="form__input"
                    on:change=move |ev| selected.set(event_target_value(&ev).parse().ok())
                >
                    {required
                        .into_iter()
                        .map(|doc| {
                            let doc_id = doc.id;
                            view! {
                                <option value=doc_id.to_string() selected=move || selected.get() == Some(doc_id)>
                                    {doc.name}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="form__label">
                "Description"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
            </label>
            <input class="form__input" type="file" node_ref=file_ref/>
            <Show when=move || upload_error.get().is_some()>
                <p class="page__error">{move || upload_error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" disabled=move || busy.get() on:click=on_upload>
                "Upload"
            </button>
        </div>
    }
    .into_any()
}
