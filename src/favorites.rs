//! Favorites Store
//!
//! Ordered set of bookmarked characters, unique by name, persisted as one
//! JSON array under a fixed storage key. Every mutation writes the
//! post-mutation set synchronously and then notifies subscribers.

use swapi_client::CharacterRecord;

use crate::error::Result;
use crate::storage::KeyValueStorage;

/// Handle returned by [`FavoritesStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&[CharacterRecord]) + Send + Sync>;

/// Result of [`FavoritesStore::toggle`]
#[derive(Debug)]
pub struct ToggleOutcome {
    /// Membership after the toggle
    pub is_favorite: bool,
    /// The set after the toggle
    pub entries: Vec<CharacterRecord>,
    /// Whether the write reached storage. The in-memory change stands either way.
    pub persisted: Result<()>,
}

pub struct FavoritesStore<S> {
    storage: S,
    key: String,
    entries: Vec<CharacterRecord>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<S: KeyValueStorage> FavoritesStore<S> {
    /// Create the store and load whatever is persisted under `key`.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self {
            storage,
            key: key.into(),
            entries: Vec::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        store.entries = store.load();
        store
    }

    /// Read the persisted set.
    ///
    /// Missing, unreadable or unparsable content all yield an empty set.
    pub fn load(&self) -> Vec<CharacterRecord> {
        let raw = match self.storage.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("[FAVORITES] {}; starting empty", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<CharacterRecord>>(&raw) {
            Ok(entries) => dedupe_by_name(entries),
            Err(e) => {
                log::warn!("[FAVORITES] stored '{}' is not a favorites list ({}); starting empty", self.key, e);
                Vec::new()
            }
        }
    }

    /// Replace the in-memory set with the persisted one and notify.
    pub fn reload(&mut self) {
        self.entries = self.load();
        self.notify();
    }

    pub fn entries(&self) -> &[CharacterRecord] {
        &self.entries
    }

    /// Remove `record` if a same-named entry exists, append it otherwise.
    pub fn toggle(&mut self, record: &CharacterRecord) -> ToggleOutcome {
        let is_favorite = match self.position(&record.name) {
            Some(index) => {
                self.entries.remove(index);
                false
            }
            None => {
                self.entries.push(record.clone());
                true
            }
        };
        log::debug!("[FAVORITES] toggled {} -> {}", record.name, is_favorite);

        let persisted = self.persist();
        self.notify();
        ToggleOutcome {
            is_favorite,
            entries: self.entries.clone(),
            persisted,
        }
    }

    /// Remove the same-named entry. Absent records leave the set and storage untouched.
    ///
    /// On a failed write the in-memory removal stands and the error is returned.
    pub fn remove(&mut self, record: &CharacterRecord) -> Result<Vec<CharacterRecord>> {
        let Some(index) = self.position(&record.name) else {
            return Ok(self.entries.clone());
        };
        self.entries.remove(index);

        let persisted = self.persist();
        self.notify();
        persisted.map(|()| self.entries.clone())
    }

    /// Register `callback`; it runs after every mutation and reload.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&[CharacterRecord]) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns whether `id` was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|fav| fav.name == name)
    }

    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.entries)?;
        let written = self.storage.write(&self.key, &raw);
        if let Err(e) = &written {
            log::warn!("[FAVORITES] {}", e);
        }
        written
    }

    fn notify(&self) {
        for (_, subscriber) in &self.subscribers {
            subscriber(&self.entries);
        }
    }
}

/// Keep the first entry for each name.
fn dedupe_by_name(entries: Vec<CharacterRecord>) -> Vec<CharacterRecord> {
    let mut unique: Vec<CharacterRecord> = Vec::with_capacity(entries.len());
    for entry in entries {
        if !unique.iter().any(|kept| kept.name == entry.name) {
            unique.push(entry);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::storage::MemoryStorage;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    const KEY: &str = "favorites";

    fn record(id: u32, name: &str) -> CharacterRecord {
        serde_json::from_value(json!({
            "name": name,
            "height": "172",
            "mass": "77",
            "hair_color": "blond",
            "skin_color": "fair",
            "eye_color": "blue",
            "birth_year": "19BBY",
            "gender": "male",
            "films": ["https://swapi.dev/api/films/1/"],
            "url": format!("https://swapi.dev/api/people/{id}/"),
        }))
        .unwrap()
    }

    fn persisted(storage: &MemoryStorage) -> Vec<CharacterRecord> {
        serde_json::from_str(&storage.get(KEY).unwrap()).unwrap()
    }

    fn has<S: KeyValueStorage>(store: &FavoritesStore<S>, name: &str) -> bool {
        store.entries().iter().any(|e| e.name == name)
    }

    fn names(entries: &[CharacterRecord]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let storage = Arc::new(MemoryStorage::default());
        let mut store = FavoritesStore::open(storage.clone(), KEY);
        let luke = record(1, "Luke Skywalker");

        let added = store.toggle(&luke);
        assert!(added.is_favorite);
        assert_eq!(added.entries, vec![luke.clone()]);
        assert!(added.persisted.is_ok());

        let removed = store.toggle(&luke);
        assert!(!removed.is_favorite);
        assert!(removed.entries.is_empty());
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_persisted_matches_memory_after_every_mutation() {
        let storage = Arc::new(MemoryStorage::default());
        let mut store = FavoritesStore::open(storage.clone(), KEY);
        let luke = record(1, "Luke Skywalker");
        let leia = record(5, "Leia Organa");
        let han = record(14, "Han Solo");

        store.toggle(&luke);
        assert_eq!(persisted(&storage), store.entries());
        store.toggle(&leia);
        assert_eq!(persisted(&storage), store.entries());
        store.toggle(&han);
        assert_eq!(persisted(&storage), store.entries());
        store.toggle(&luke);
        assert_eq!(persisted(&storage), store.entries());
        store.remove(&leia).unwrap();
        assert_eq!(persisted(&storage), store.entries());
        assert_eq!(names(store.entries()), vec!["Han Solo"]);
    }

    #[test]
    fn test_double_toggle_restores_serialized_content() {
        let vader = record(4, "Darth Vader");
        let initial = serde_json::to_string(&vec![vader]).unwrap();
        let storage = Arc::new(MemoryStorage::with_value(KEY, &initial));
        let mut store = FavoritesStore::open(storage.clone(), KEY);
        let luke = record(1, "Luke Skywalker");

        let first = store.toggle(&luke);
        let second = store.toggle(&luke);

        assert!(first.is_favorite);
        assert!(!second.is_favorite);
        assert_eq!(storage.get(KEY).unwrap(), initial);
    }

    #[test]
    fn test_toggle_matches_by_name_not_snapshot() {
        let storage = Arc::new(MemoryStorage::default());
        let mut store = FavoritesStore::open(storage, KEY);
        let luke = record(1, "Luke Skywalker");
        let mut stale = luke.clone();
        stale.mass = "80".to_string();

        store.toggle(&luke);
        let outcome = store.toggle(&stale);
        assert!(!outcome.is_favorite);
        assert!(outcome.entries.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let luke = record(1, "Luke Skywalker");
        let initial = serde_json::to_string(&vec![luke.clone()]).unwrap();
        let storage = Arc::new(MemoryStorage::with_value(KEY, &initial));
        let mut store = FavoritesStore::open(storage.clone(), KEY);

        let entries = store.remove(&record(2, "C-3PO")).unwrap();
        assert_eq!(entries, vec![luke]);
        assert_eq!(storage.write_count(), 0);
        assert_eq!(storage.get(KEY).unwrap(), initial);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let storage = Arc::new(MemoryStorage::default());
        let mut store = FavoritesStore::open(storage, KEY);
        let luke = record(1, "Luke Skywalker");

        store.toggle(&luke);
        assert!(store.remove(&luke).unwrap().is_empty());
        assert!(store.remove(&luke).unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let store = FavoritesStore::open(MemoryStorage::default(), KEY);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_load_garbage_is_empty() {
        for raw in ["not json", "{\"name\":\"Luke\"}", "null", "[{\"name\":\"Luke\",\"url\":\"nope\"}]"] {
            let store = FavoritesStore::open(MemoryStorage::with_value(KEY, raw), KEY);
            assert!(store.entries().is_empty(), "{raw}");
        }
    }

    #[test]
    fn test_load_drops_duplicate_names() {
        let luke = record(1, "Luke Skywalker");
        let raw = serde_json::to_string(&vec![luke.clone(), record(5, "Leia Organa"), luke]).unwrap();
        let store = FavoritesStore::open(MemoryStorage::with_value(KEY, &raw), KEY);
        assert_eq!(names(store.entries()), vec!["Luke Skywalker", "Leia Organa"]);
    }

    #[test]
    fn test_write_failure_keeps_in_memory_toggle() {
        let storage = Arc::new(MemoryStorage::default());
        let mut store = FavoritesStore::open(storage.clone(), KEY);
        storage.set_fail_writes(true);

        let outcome = store.toggle(&record(1, "Luke Skywalker"));
        assert!(outcome.is_favorite);
        assert_eq!(outcome.entries.len(), 1);
        assert!(matches!(outcome.persisted, Err(Error::StorageWrite { .. })));
        assert!(has(&store, "Luke Skywalker"));
        assert!(storage.get(KEY).is_none());

        // next successful write carries the full in-memory set
        storage.set_fail_writes(false);
        store.toggle(&record(5, "Leia Organa"));
        assert_eq!(persisted(&storage), store.entries());
        assert_eq!(store.entries().len(), 2);
    }

    #[test]
    fn test_remove_write_failure_surfaces_error() {
        let storage = Arc::new(MemoryStorage::default());
        let mut store = FavoritesStore::open(storage.clone(), KEY);
        let luke = record(1, "Luke Skywalker");
        store.toggle(&luke);
        storage.set_fail_writes(true);

        assert!(store.remove(&luke).is_err());
        assert!(!has(&store, "Luke Skywalker"));
    }

    #[test]
    fn test_subscribers_see_every_mutation() {
        let storage = Arc::new(MemoryStorage::default());
        let mut store = FavoritesStore::open(storage, KEY);
        let seen = Arc::new(Mutex::new(Vec::<usize>::new()));
        let sink = seen.clone();
        store.subscribe(move |entries| sink.lock().unwrap().push(entries.len()));

        let luke = record(1, "Luke Skywalker");
        store.toggle(&luke);
        store.toggle(&record(5, "Leia Organa"));
        store.remove(&luke).unwrap();
        store.remove(&luke).unwrap();
        store.reload();

        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 1, 1]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = FavoritesStore::open(MemoryStorage::default(), KEY);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let id = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.toggle(&record(1, "Luke Skywalker"));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.toggle(&record(1, "Luke Skywalker"));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reload_picks_up_external_writes() {
        let storage = Arc::new(MemoryStorage::default());
        let mut store = FavoritesStore::open(storage.clone(), KEY);
        let other_tab = serde_json::to_string(&vec![record(10, "Obi-Wan Kenobi")]).unwrap();
        storage.write(KEY, &other_tab).unwrap();

        assert!(store.entries().is_empty());
        store.reload();
        assert_eq!(names(store.entries()), vec!["Obi-Wan Kenobi"]);
    }
}
