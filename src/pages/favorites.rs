//! Favorites Page
//!
//! `/favorites`: bookmarked characters straight from storage, no
//! remote fetch.

use leptos::prelude::*;
use swapi_client::CharacterRecord;

use crate::components::CharacterCard;
use crate::context::use_app_context;
use crate::store::CatalogStateStoreFields;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let ctx = use_app_context();
    ctx.reload_favorites();

    let store = ctx.store();
    let remove = {
        let ctx = ctx.clone();
        Callback::new(move |record: CharacterRecord| ctx.remove_favorite(&record))
    };

    view! {
        <section class="favorites">
            <a class="back-btn" href="/">"← Go Back"</a>
            <Show
                when=move || !store.favorites().read().is_empty()
                fallback=|| view! { <p class="empty-message">"No items available"</p> }
            >
                <div class="character-grid">
                    <For
                        each=move || store.favorites().get()
                        key=|record| record.name.clone()
                        children=move |record| {
                            let href = format!("/character/{}?source=favorites", record.id);
                            view! {
                                <CharacterCard
                                    record=record
                                    detail_href=href
                                    is_favorite=Signal::stored(true)
                                    star_label="Remove from Favorites"
                                    on_star=remove
                                />
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}
