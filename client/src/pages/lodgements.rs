//! Public lodgement browse page with tag filtering.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::lodgement_card::LodgementCard;
use crate::components::page_status::{error_view, loading_view};
use crate::components::tag_filter::TagFilter;
use crate::net::types::Lodgement;
use crate::state::loadable::Loadable;
use crate::util::tags::{collect_tags, filter_lodgements};

#[component]
pub fn LodgementsPage() -> impl IntoView {
    let lodgements = RwSignal::new(Loadable::<Vec<Lodgement>>::default());
    let selected = RwSignal::new(Vec::<String>::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        lodgements.set(Loadable::from_result(crate::net::api::list_lodgements().await));
    });

    let tags = Signal::derive(move || lodgements.with(|l| l.ready().map(|items| collect_tags(items)).unwrap_or_default()));

    view! {
        <section class="page lodgements-page">
            <h1 class="page__title">"Lodgements"</h1>
            <TagFilter tags=tags selected=selected/>
            {move || match lodgements.get() {
                Loadable::Loading => loading_view(),
                Loadable::Failed(message) => error_view(message),
                Loadable::Ready(items) => {
                    let visible = filter_lodgements(&items, &selected.get());
                    if visible.is_empty() {
                        view! { <p class="page__empty">"No lodgements match the selected tags."</p> }.into_any()
                    } else {
                        view! {
                            <div class="lodgement-grid">
                                {visible
                                    .into_iter()
                                    .map(|lodgement| view! { <LodgementCard lodgement=lodgement/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </section>
    }
}
