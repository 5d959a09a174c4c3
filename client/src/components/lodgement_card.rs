//! Card for one lodgement on the browse page.

use leptos::prelude::*;

use crate::net::types::{Lodgement, lodgement_size_label};
use crate::util::format::availability_label;

#[component]
pub fn LodgementCard(lodgement: Lodgement) -> impl IntoView {
    let name = lodgement.display_name();
    let image = lodgement.image_url();
    let badge = availability_label(lodgement.is_available, lodgement.busy_until.as_deref());
    let size = lodgement_size_label(lodgement.size);
    let alt = name.clone();

    view! {
        <article class="lodgement-card" class:lodgement-card--busy=!lodgement.is_available>
            {image.map(|src| view! { <img class="lodgement-card__image" src=src alt=alt/> })}
            <div class="lodgement-card__body">
                <h3 class="lodgement-card__name">{name}</h3>
                <span
                    class="lodgement-card__badge"
                    class:lodgement-card__badge--available=lodgement.is_available
                >
                    {badge}
                </span>
                <p class="lodgement-card__meta">{size} " · " {lodgement.location}</p>
                <p class="lodgement-card__description">{lodgement.description}</p>
                <ul class="lodgement-card__tags">
                    {lodgement
                        .tags
                        .into_iter()
                        .map(|tag| view! { <li class="tag">{tag}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </article>
    }
}
