//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The
//! favorites field mirrors `FavoritesStore` through its subscription.

use leptos::prelude::*;
use reactive_stores::Store;
use swapi_client::CharacterRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
}

/// Transient message shown in the banner
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Current favorites, in bookmark order
    pub favorites: Vec<CharacterRecord>,
    /// Notice on screen, if any
    pub notice: Option<Notice>,
    /// Last notice id handed out
    pub notice_seq: u64,
}

/// Type alias for the store
pub type AppStore = Store<CatalogState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the favorites mirror
pub fn store_set_favorites(store: &AppStore, entries: &[CharacterRecord]) {
    *store.favorites().write() = entries.to_vec();
}

/// Whether a character with `name` is bookmarked (tracked read)
pub fn store_is_favorite(store: &AppStore, name: &str) -> bool {
    store.favorites().read().iter().any(|fav| fav.name == name)
}

/// Show a notice and return its id
pub fn store_push_notice(store: &AppStore, kind: NoticeKind, message: String) -> u64 {
    let id = {
        let seq_field = store.notice_seq();
        let mut seq = seq_field.write();
        *seq += 1;
        *seq
    };
    *store.notice().write() = Some(Notice { id, kind, message });
    id
}

/// Clear the notice, but only if `id` is still the one showing
pub fn store_clear_notice(store: &AppStore, id: u64) {
    let showing = store.notice().read_untracked().as_ref().map(|n| n.id);
    if showing == Some(id) {
        *store.notice().write() = None;
    }
}
