//! Notice Banner Component
//!
//! Shows the current notice from the store with a close button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, CatalogStateStoreFields, NoticeKind};

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    move || {
        store.notice().get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice success",
                NoticeKind::Warning => "notice warning",
            };
            let ctx = ctx.clone();
            view! {
                <div class=class role="status">
                    <span class="notice-message">{notice.message}</span>
                    <button class="notice-close" on:click=move |_| ctx.dismiss_notice()>"×"</button>
                </div>
            }
        })
    }
}
