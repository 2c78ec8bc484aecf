//! Character List Page
//!
//! `/?page=N`: one page of characters with favorite toggles and the
//! pagination bar.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;
use swapi_client::{CharacterRecord, RemoteSource};

use crate::components::{CharacterCard, LoadFailed, LoadState, LoadingSpinner, PaginationBar};
use crate::context::use_app_context;
use crate::mount::MountGuard;
use crate::pagination::{page_from_query, PaginationState};

/// A loaded page and where it sits in the listing
#[derive(Debug, Clone, PartialEq)]
struct ListPage {
    pagination: PaginationState,
    characters: Vec<CharacterRecord>,
}

#[component]
pub fn CharacterListPage() -> impl IntoView {
    let ctx = use_app_context();
    let query = use_query_map();
    let page = Memo::new(move |_| query.with(|q| page_from_query(q.get("page").as_deref())));

    let (state, set_state) = signal(LoadState::<ListPage>::Loading);
    let (retry, set_retry) = signal(0u32);
    let guard = MountGuard::new();

    ctx.reload_favorites();

    let source = ctx.source();
    let page_size = ctx.config().page_size;
    Effect::new(move |_| {
        let page = page.get();
        let _ = retry.get();
        let ticket = guard.begin();
        set_state.set(LoadState::Loading);

        let source = source.clone();
        let guard = guard.clone();
        spawn_local(async move {
            log::debug!("[LIST] loading page {}", page);
            let result = source.people_page(page).await.map(|people| ListPage {
                pagination: PaginationState::new(page, people.count, page_size),
                characters: people.results,
            });
            if !guard.is_current(ticket) {
                log::debug!("[LIST] dropping stale response for page {}", page);
                return;
            }
            if let Err(e) = &result {
                log::error!("[LIST] page {}: {}", page, e);
            }
            set_state.set(LoadState::from_result(result));
        });
    });

    let toggle = {
        let ctx = ctx.clone();
        Callback::new(move |record: CharacterRecord| ctx.toggle_favorite(&record))
    };
    let width = ctx.config().page_window;

    view! {
        <section class="character-list">
            {move || match state.get() {
                LoadState::Loading => view! { <LoadingSpinner /> }.into_any(),
                LoadState::Failed { message, retryable } => view! {
                    <LoadFailed
                        message=message
                        retryable=retryable
                        on_retry=move |_| set_retry.update(|n| *n += 1)
                    />
                }.into_any(),
                LoadState::Ready(list) => {
                    let ctx = ctx.clone();
                    view! {
                        <div class="character-grid">
                            {list.characters.into_iter().map(|record| {
                                let ctx = ctx.clone();
                                let name = record.name.clone();
                                let is_favorite = Signal::derive(move || ctx.is_favorite(&name));
                                let href = format!("/character/{}?source=list", record.id);
                                view! {
                                    <CharacterCard
                                        record=record
                                        detail_href=href
                                        is_favorite=is_favorite
                                        star_label="Toggle Favorite"
                                        on_star=toggle
                                    />
                                }
                            }).collect_view()}
                        </div>
                        <PaginationBar state=list.pagination width=width />
                    }.into_any()
                }
            }}
        </section>
    }
}
