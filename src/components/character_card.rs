//! Character Card Component
//!
//! Grid tile shared by the list and favorites views.

use leptos::prelude::*;
use swapi_client::CharacterRecord;

use crate::components::Portrait;

/// Card with portrait, name, height, star button and details link.
///
/// The star does not navigate; `on_star` decides what it means
/// (toggle on the list, remove on favorites).
#[component]
pub fn CharacterCard(
    record: CharacterRecord,
    #[prop(into)] detail_href: String,
    #[prop(into)] is_favorite: Signal<bool>,
    #[prop(into)] star_label: String,
    #[prop(into)] on_star: Callback<CharacterRecord>,
) -> impl IntoView {
    let star_record = record.clone();
    let star_class = move || {
        if is_favorite.get() { "star-btn active" } else { "star-btn" }
    };

    view! {
        <div class="character-card">
            <a class="character-card-image" href=detail_href.clone()>
                <Portrait id=record.id alt=record.name.clone() image_class="character-image" />
            </a>
            <div class="character-card-body">
                <div class="character-name">{record.name.clone()}</div>
                <div class="character-card-row">
                    <span class="character-height">{format!("Height: {}cm", record.height)}</span>
                    <button
                        class=star_class
                        aria-label=star_label
                        on:click=move |ev| {
                            ev.prevent_default();
                            ev.stop_propagation();
                            on_star.run(star_record.clone());
                        }
                    >
                        "★"
                    </button>
                </div>
                <a class="details-btn" href=detail_href>"View Details"</a>
            </div>
        </div>
    }
}
