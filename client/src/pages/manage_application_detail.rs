//! Manager review of a single application.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::page_status::{error_view, loading_view};
use crate::components::require_access::RequireAccess;
#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::net::api::ReviewDecision;
use crate::net::types::Application;
use crate::state::loadable::Loadable;
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastKind;
use crate::state::ui::UiState;
use crate::util::auth::Access;
use crate::util::format::{parse_route_id, short_date, status_class};

#[cfg(feature = "hydrate")]
const REVIEW_QUEUE_ROUTE: &str = "/manage/applications";

#[component]
pub fn ManageApplicationDetailPage() -> impl IntoView {
    view! {
        <RequireAccess access=Access::Manager>
            <ReviewDetail/>
        </RequireAccess>
    }
}

#[component]
fn ReviewDetail() -> impl IntoView {
    let params = use_params_map();
    let application = RwSignal::new(Loadable::<Application>::default());

    Effect::new(move || {
        let Some(id) = parse_route_id(params.read().get("id").as_deref()) else {
            application.set(Loadable::Failed("Invalid application id".to_owned()));
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            application.set(Loadable::from_result(crate::net::api::fetch_review_application(id).await));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <section class="page review-detail-page">
            {move || match application.get() {
                Loadable::Loading => loading_view(),
                Loadable::Failed(message) => error_view(message),
                Loadable::Ready(app) => view! { <ReviewCard application=app/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn ReviewCard(application: Application) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let id = application.id;

    let decide = move |decision: ReviewDecision| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let text = message.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::review_application(id, &text, decision).await {
                    Ok(()) => {
                        show_toast(ui, ToastKind::Success, decision.success_message());
                        navigate(REVIEW_QUEUE_ROUTE, NavigateOptions::default());
                    }
                    Err(e) => show_toast(ui, ToastKind::Error, decision.failure_message(&e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, ui, id, decision);
    };

    let user = &application.user;
    let queue = &application.queue;
    let answers = application.scoring_form.as_ref().map(|f| f.items.clone()).unwrap_or_default();
    let reject = decide.clone();
    let reupload = decide.clone();
    let approve = decide;

    view! {
        <article class="card review-card">
            <h1 class="page__title">{format!("Application #{id}")}</h1>
            <h2 class="card__title">"Details"</h2>
            <dl class="summary-grid">
                <dt>"Status"</dt>
                <dd>
                    <span class=status_class(&application.status)>{application.status.clone()}</span>
                </dd>
                <dt>"Applicant"</dt>
                <dd>{user.display_name()}</dd>
                <dt>"Role"</dt>
                <dd>{user.role.label()}</dd>
                <dt>"Type"</dt>
                <dd>{user.personnel_type.clone().unwrap_or_else(|| "-".to_owned())}</dd>
                <dt>"Email"</dt>
                <dd>{user.email.clone()}</dd>
                <dt>"Application date"</dt>
                <dd>{short_date(&application.created_at).to_owned()}</dd>
                <dt>"Lodgement type"</dt>
                <dd>{queue.lodgement_type.clone()}</dd>
                <dt>"Personnel type"</dt>
                <dd>{queue.personnel_type.clone()}</dd>
                <dt>"Lodgement size"</dt>
                <dd>{queue.lodgement_size.clone()}</dd>
                <dt>"Rank"</dt>
                <dd>{application.rank.map_or_else(|| "-".to_owned(), |r| r.to_string())}</dd>
                <dt>"Total points"</dt>
                <dd>{application.total_points.map_or_else(|| "-".to_owned(), |p| p.to_string())}</dd>
                <dt>"Estimated availability"</dt>
                <dd>{application.estimated_availability.clone().unwrap_or_else(|| "-".to_owned())}</dd>
            </dl>

            <h2 class="card__title">"Uploaded Documents"</h2>
            {if application.documents.is_empty() {
                view! { <p class="page__empty">"No uploaded documents"</p> }.into_any()
            } else {
                view! {
                    <ul class="document-list">
                        {application
                            .documents
                            .clone()
                            .into_iter()
                            .map(|doc| {
                                view! {
                                    <li class="document-list__item">
                                        <strong>{doc.document.name}</strong>
                                        {doc
                                            .file
                                            .map(|href| {
                                                view! {
                                                    <a href=href target="_blank" rel="noopener noreferrer">
                                                        "View Document"
                                                    </a>
                                                }
                                            })}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                    .into_any()
            }}

            <h2 class="card__title">"Scoring Form"</h2>
            <ul class="answer-list">
                {answers
                    .into_iter()
                    .map(|item| {
                        let shown = item.answer_display();
                        view! {
                            <li class="answer-list__item">
                                <strong>{item.label}": "</strong>
                                <span>{shown}</span>
                                <p class="answer-list__caption">{item.caption}</p>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>

            <label class="form__label">
                "Review message"
                <textarea
                    class="form__input"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </label>
            <div class="review-card__actions">
                <button
                    class="btn btn--danger"
                    disabled=move || busy.get()
                    on:click=move |_| reject(ReviewDecision::Reject)
                >
                    "Reject"
                </button>
                <button
                    class="btn btn--warning"
                    disabled=move || busy.get()
                    on:click=move |_| reupload(ReviewDecision::ReUpload)
                >
                    "Re-Upload"
                </button>
                <button
                    class="btn btn--primary"
                    disabled=move || busy.get()
                    on:click=move |_| approve(ReviewDecision::Approve)
                >
                    "Approve"
                </button>
            </div>
        </article>
    }
}
