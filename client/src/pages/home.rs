//! Landing page listing announcements.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::page_status::{error_view, loading_view};
use crate::net::types::Announcement;
use crate::state::loadable::Loadable;
use crate::util::format::{safe_href, short_date};

#[component]
pub fn HomePage() -> impl IntoView {
    let announcements = RwSignal::new(Loadable::<Vec<Announcement>>::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        announcements.set(Loadable::from_result(crate::net::api::list_announcements().await));
    });

    view! {
        <section class="page home-page">
            <h1 class="page__title">"Announcements"</h1>
            {move || match announcements.get() {
                Loadable::Loading => loading_view(),
                Loadable::Failed(message) => error_view(message),
                Loadable::Ready(items) if items.is_empty() => {
                    view! { <p class="page__empty">"No announcements yet."</p> }.into_any()
                }
                Loadable::Ready(items) => {
                    view! {
                        <div class="announcement-list">
                            {items.into_iter().map(announcement_card).collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

fn announcement_card(announcement: Announcement) -> impl IntoView {
    let date = short_date(&announcement.created_at).to_owned();
    let content = match safe_href(&announcement.content) {
        Some(href) => view! {
            <a class="announcement__link" href=href target="_blank" rel="noopener noreferrer">
                {announcement.content}
            </a>
        }
        .into_any(),
        None => view! { <p class="announcement__text">{announcement.content}</p> }.into_any(),
    };
    view! {
        <article class="card announcement">
            <header class="announcement__header">
                <h2 class="announcement__title">{announcement.title}</h2>
                <span class="announcement__date">{date}</span>
            </header>
            {content}
        </article>
    }
}
