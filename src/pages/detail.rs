//! Character Detail Page
//!
//! `/character/:id?source=...`: one character plus its film titles.
//! The film fan-out is all-or-nothing.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_params_map, use_query_map};
use swapi_client::{character_detail, CharacterDetail, CharacterId, CharacterRecord};

use crate::components::{LoadFailed, LoadState, LoadingSpinner, Portrait};
use crate::context::use_app_context;
use crate::mount::MountGuard;

/// Where the back button leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackTarget {
    List,
    Favorites,
}

impl BackTarget {
    pub fn from_query(source: Option<&str>) -> Self {
        match source {
            Some("favorites") => Self::Favorites,
            _ => Self::List,
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Self::List => "/",
            Self::Favorites => "/favorites",
        }
    }
}

/// Label/value rows shown under the name
fn attribute_rows(record: &CharacterRecord) -> Vec<(&'static str, String)> {
    vec![
        ("Height", format!("{} cm", record.height)),
        ("Mass", format!("{} kg", record.mass)),
        ("Hair Color", record.hair_color.clone()),
        ("Skin Color", record.skin_color.clone()),
        ("Eye Color", record.eye_color.clone()),
        ("Birth Year", record.birth_year.clone()),
        ("Gender", record.gender.clone()),
    ]
}

#[component]
pub fn CharacterDetailPage() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let query = use_query_map();
    let id_param = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let back = Memo::new(move |_| query.with(|q| BackTarget::from_query(q.get("source").as_deref())));

    let (state, set_state) = signal(LoadState::<CharacterDetail>::Loading);
    let (retry, set_retry) = signal(0u32);
    let guard = MountGuard::new();

    let source = ctx.source();
    Effect::new(move |_| {
        let raw_id = id_param.get();
        let _ = retry.get();
        let ticket = guard.begin();
        set_state.set(LoadState::Loading);

        let source = source.clone();
        let guard = guard.clone();
        spawn_local(async move {
            let result = match raw_id.parse::<CharacterId>() {
                Ok(id) => character_detail(&source, id).await,
                Err(e) => Err(e),
            };
            if !guard.is_current(ticket) {
                log::debug!("[DETAIL] dropping stale response for {}", raw_id);
                return;
            }
            if let Err(e) = &result {
                log::error!("[DETAIL] character {}: {}", raw_id, e);
            }
            set_state.set(LoadState::from_result(result));
        });
    });

    view! {
        <section class="character-detail-page">
            <a class="back-btn" href=move || back.get().href() aria-label="Go Back">"← Back"</a>
            {move || match state.get() {
                LoadState::Loading => view! { <LoadingSpinner /> }.into_any(),
                LoadState::Failed { message, retryable } => view! {
                    <LoadFailed
                        message=message
                        retryable=retryable
                        on_retry=move |_| set_retry.update(|n| *n += 1)
                    />
                }.into_any(),
                LoadState::Ready(detail) => view! {
                    <article class="character-detail">
                        <Portrait id=detail.record.id alt=detail.record.name.clone() image_class="detail-image" />
                        <div class="detail-body">
                            <h2 class="detail-name">{detail.record.name.clone()}</h2>
                            <dl class="detail-attributes">
                                {attribute_rows(&detail.record).into_iter().map(|(label, value)| view! {
                                    <div class="detail-attribute">
                                        <dt>{label}</dt>
                                        <dd>{value}</dd>
                                    </div>
                                }).collect_view()}
                            </dl>
                            <h3 class="detail-films-heading">"Movies"</h3>
                            <ul class="film-list">
                                {detail.films.into_iter().map(|title| view! {
                                    <li class="film-tag">{title}</li>
                                }).collect_view()}
                            </ul>
                        </div>
                    </article>
                }.into_any(),
            }}
        </section>
    }
}
