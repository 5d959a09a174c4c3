//! Toggleable tag chips narrowing the lodgement list.

use leptos::prelude::*;

use crate::util::tags::toggle_tag;

#[component]
pub fn TagFilter(#[prop(into)] tags: Signal<Vec<String>>, selected: RwSignal<Vec<String>>) -> impl IntoView {
    view! {
        <div class="tag-filter">
            <span class="tag-filter__label">"Filter by tag"</span>
            {move || {
                tags.get()
                    .into_iter()
                    .map(|tag| {
                        let label = tag.clone();
                        let active_tag = tag.clone();
                        view! {
                            <button
                                class="tag tag-filter__chip"
                                class:tag-filter__chip--active=move || {
                                    selected.get().iter().any(|t| *t == active_tag)
                                }
                                on:click=move |_| selected.update(|s| toggle_tag(s, &tag))
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <Show when=move || !selected.get().is_empty()>
                <button class="btn tag-filter__clear" on:click=move |_| selected.set(Vec::new())>
                    "Clear"
                </button>
            </Show>
        </div>
    }
}
