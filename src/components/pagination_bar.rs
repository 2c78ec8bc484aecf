//! Pagination Bar Component
//!
//! Previous / page window / Next. Buttons are links to `/?page=N` so the
//! current page lives in the URL.

use leptos::prelude::*;

use crate::pagination::PaginationState;

fn page_href(page: u32) -> String {
    format!("/?page={}", page)
}

#[component]
pub fn PaginationBar(state: PaginationState, width: u32) -> impl IntoView {
    view! {
        <nav class="pagination">
            {state.has_previous().then(|| view! {
                <a class="page-btn nav" href=page_href(state.page - 1)>"Previous"</a>
            })}
            {state.window(width).into_iter().map(|page| {
                let class = if page == state.page { "page-btn active" } else { "page-btn" };
                view! { <a class=class href=page_href(page)>{page}</a> }
            }).collect_view()}
            {state.has_next().then(|| view! {
                <a class="page-btn nav" href=page_href(state.page + 1)>"Next"</a>
            })}
        </nav>
    }
}
