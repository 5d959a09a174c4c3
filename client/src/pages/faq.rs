//! FAQ accordion; one entry open at a time.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::page_status::{error_view, loading_view};
use crate::net::types::FaqEntry;
use crate::state::loadable::Loadable;
use crate::util::format::render_markdown_html;

#[component]
pub fn FaqPage() -> impl IntoView {
    let entries = RwSignal::new(Loadable::<Vec<FaqEntry>>::default());
    let open = RwSignal::new(None::<usize>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::list_faq().await.map(|mut items| {
            items.sort_by_key(|e| e.order);
            items
        });
        entries.set(Loadable::from_result(result));
    });

    view! {
        <section class="page faq-page">
            <h1 class="page__title">"Frequently Asked Questions"</h1>
            {move || match entries.get() {
                Loadable::Loading => loading_view(),
                Loadable::Failed(message) => error_view(message),
                Loadable::Ready(items) => {
                    items
                        .into_iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            let answer_html = render_markdown_html(&entry.answer);
                            view! {
                                <div class="accordion" class:accordion--open=move || open.get() == Some(index)>
                                    <button
                                        class="accordion__header"
                                        on:click=move |_| {
                                            open.update(|o| {
                                                *o = if *o == Some(index) { None } else { Some(index) };
                                            });
                                        }
                                    >
                                        {entry.question}
                                    </button>
                                    <Show when=move || open.get() == Some(index)>
                                        <div class="accordion__body markdown" inner_html=answer_html.clone()></div>
                                    </Show>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }
            }}
        </section>
    }
}
