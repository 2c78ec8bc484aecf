//! Application Context
//!
//! Shared services provided via Leptos Context API: configuration, the
//! favorites store and notices. Constructed once in `App`.

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use swapi_client::{CharacterRecord, HttpSource};

use crate::config::CatalogConfig;
use crate::favorites::FavoritesStore;
use crate::storage::BrowserStorage;
use crate::store::{
    store_clear_notice, store_is_favorite, store_push_notice, store_set_favorites, AppStore,
    CatalogStateStoreFields, NoticeKind,
};

/// App-wide services provided via context
#[derive(Clone)]
pub struct AppContext {
    config: Arc<CatalogConfig>,
    favorites: StoredValue<FavoritesStore<BrowserStorage>>,
    store: AppStore,
}

impl AppContext {
    /// Open the favorites store and mirror it into `store`.
    pub fn new(config: CatalogConfig, store: AppStore) -> Self {
        let mut favorites = FavoritesStore::open(BrowserStorage, config.favorites_key.clone());
        store_set_favorites(&store, favorites.entries());
        let subscription = favorites.subscribe(move |entries| store_set_favorites(&store, entries));
        log::info!("[APP] {} favorites loaded", favorites.entries().len());

        let favorites = StoredValue::new(favorites);
        on_cleanup(move || {
            favorites.try_update_value(|favorites| favorites.unsubscribe(subscription));
        });

        Self {
            config: Arc::new(config),
            favorites,
            store,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn store(&self) -> AppStore {
        self.store
    }

    /// Remote source for the configured API root
    pub fn source(&self) -> HttpSource {
        HttpSource::new(self.config.api_base_url.clone())
    }

    /// Re-read persisted favorites (views call this on mount)
    pub fn reload_favorites(&self) {
        self.favorites.update_value(|favorites| favorites.reload());
    }

    /// Tracked membership check for rendering
    pub fn is_favorite(&self, name: &str) -> bool {
        store_is_favorite(&self.store, name)
    }

    /// Toggle `record` and report the result as a notice
    pub fn toggle_favorite(&self, record: &CharacterRecord) {
        let mut outcome = None;
        self.favorites
            .update_value(|favorites| outcome = Some(favorites.toggle(record)));
        let Some(outcome) = outcome else {
            return;
        };

        match outcome.persisted {
            Ok(()) if outcome.is_favorite => {
                self.notify(NoticeKind::Success, format!("{} added to favorites!", record.name))
            }
            Ok(()) => {
                self.notify(NoticeKind::Success, format!("{} removed from favorites.", record.name))
            }
            Err(e) => self.notify(
                NoticeKind::Warning,
                format!("Favorites changed but could not be saved: {}", e),
            ),
        }
    }

    /// Remove `record` from favorites
    pub fn remove_favorite(&self, record: &CharacterRecord) {
        let mut removed = None;
        self.favorites
            .update_value(|favorites| removed = Some(favorites.remove(record)));

        match removed {
            Some(Ok(_)) => {
                self.notify(NoticeKind::Success, format!("{} removed from favorites.", record.name))
            }
            Some(Err(e)) => self.notify(
                NoticeKind::Warning,
                format!("Favorites changed but could not be saved: {}", e),
            ),
            None => {}
        }
    }

    /// Show a notice; it clears itself after `notice_duration_ms`
    pub fn notify(&self, kind: NoticeKind, message: String) {
        if kind == NoticeKind::Warning {
            log::warn!("[NOTICE] {}", message);
        }
        let store = self.store;
        let id = store_push_notice(&store, kind, message);
        let duration = self.config.notice_duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            store_clear_notice(&store, id);
        });
    }

    pub fn dismiss_notice(&self) {
        let showing = self.store.notice().read_untracked().as_ref().map(|n| n.id);
        if let Some(id) = showing {
            store_clear_notice(&self.store, id);
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
