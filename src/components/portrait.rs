//! Portrait Component
//!
//! Character image from the image host. Best-effort: a broken image
//! swaps to a placeholder and is not an error.

use leptos::prelude::*;
use swapi_client::{portrait_url, CharacterId};

use crate::context::use_app_context;

#[component]
pub fn Portrait(
    id: CharacterId,
    #[prop(into)] alt: String,
    #[prop(into, optional)] image_class: String,
) -> impl IntoView {
    let ctx = use_app_context();
    let src = portrait_url(&ctx.config().image_base_url, id);
    let (broken, set_broken) = signal(false);
    let placeholder_class = format!("{} portrait-placeholder", image_class);

    view! {
        <Show
            when=move || !broken.get()
            fallback=move || view! { <div class=placeholder_class.clone()>"?"</div> }
        >
            <img
                src=src.clone()
                alt=alt.clone()
                class=image_class.clone()
                loading="lazy"
                on:error=move |_| set_broken.set(true)
            />
        </Show>
    }
}
