//! Persisted id sets for bookmarks and completion marks.
//!
//! Each [`MarkSet`] owns one store slot and keeps a full in-memory copy of
//! it. The durable format is a plain JSON array of resource ids, e.g.
//! `["ai-1","web-2"]`, so the files stay hand-editable.
//!
//! Persistence is strictly best-effort. A slot that is missing, unreadable
//! or malformed loads as an empty set with no error surfaced, and a failed
//! write leaves the in-memory set authoritative for the rest of the
//! session. Losing a bookmark list must never take the catalog down with it.

use crate::store::StateStore;
use std::collections::BTreeSet;

/// Store key for the bookmark set.
pub const BOOKMARKS_KEY: &str = "bookmarks";
/// Store key for the completed-resource set.
pub const PROGRESS_KEY: &str = "progress";

/// A set of resource ids backed by one [`StateStore`] slot.
///
/// Every mutation writes the whole set back to the store. The set is the
/// sole owner of its slot; nothing else writes that key.
#[derive(Debug)]
pub struct MarkSet<S: StateStore> {
    key: String,
    ids: BTreeSet<String>,
    store: S,
}

impl<S: StateStore> MarkSet<S> {
    /// Load the set stored under `key`, falling back to empty on any
    /// read or parse failure.
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let ids = store
            .read(&key)
            .and_then(|payload| serde_json::from_str::<Vec<String>>(&payload).ok())
            .map(|list| list.into_iter().collect())
            .unwrap_or_default();
        Self { key, ids, store }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &BTreeSet<String> {
        &self.ids
    }

    /// Flip membership for `id` and persist the new set.
    ///
    /// Returns `true` when the id is present after the toggle.
    pub fn toggle(&mut self, id: &str) -> bool {
        let added = if self.ids.contains(id) {
            self.ids.remove(id);
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };
        self.persist();
        added
    }

    fn persist(&mut self) {
        // A failed write is ignored: the in-memory set stays authoritative
        // for this session and the next toggle retries the full payload.
        if let Ok(payload) = serde_json::to_string(&self.ids) {
            let _ = self.store.write(&self.key, &payload);
        }
    }

    /// Hand the backing store back, e.g. to reopen the same slot.
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_opens_empty_when_slot_is_missing() {
        let set = MarkSet::open(InMemoryStore::new(), BOOKMARKS_KEY);
        assert!(set.is_empty());
    }

    #[test]
    fn test_opens_from_stored_array() {
        let mut store = InMemoryStore::new();
        store.write(BOOKMARKS_KEY, r#"["web-2","ai-1"]"#);

        let set = MarkSet::open(store, BOOKMARKS_KEY);
        assert_eq!(set.key(), BOOKMARKS_KEY);
        assert_eq!(set.len(), 2);
        assert!(set.contains("ai-1"));
        assert!(set.contains("web-2"));
    }

    #[test]
    fn test_malformed_payload_falls_back_to_empty() {
        for payload in ["not json", "{\"a\":1}", "[1,2,3]", "\"ai-1\""] {
            let mut store = InMemoryStore::new();
            store.write(PROGRESS_KEY, payload);

            let set = MarkSet::open(store, PROGRESS_KEY);
            assert!(set.is_empty(), "payload {:?} should load as empty", payload);
        }
    }

    #[test]
    fn test_read_failure_falls_back_to_empty() {
        let mut store = InMemoryStore::new();
        store.write(BOOKMARKS_KEY, r#"["ai-1"]"#);
        store.set_simulate_read_error(true);

        let set = MarkSet::open(store, BOOKMARKS_KEY);
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut set = MarkSet::open(InMemoryStore::new(), BOOKMARKS_KEY);

        assert!(set.toggle("ai-1"));
        assert!(set.contains("ai-1"));

        assert!(!set.toggle("ai-1"));
        assert!(!set.contains("ai-1"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggle_writes_through_immediately() {
        let mut set = MarkSet::open(InMemoryStore::new(), BOOKMARKS_KEY);
        set.toggle("web-2");
        set.toggle("ai-1");

        let store = set.into_store();
        assert_eq!(store.read(BOOKMARKS_KEY), Some(r#"["ai-1","web-2"]"#.to_string()));
    }

    #[test]
    fn test_reopening_restores_the_set() {
        let mut set = MarkSet::open(InMemoryStore::new(), PROGRESS_KEY);
        set.toggle("ds-1");
        set.toggle("ds-2");
        set.toggle("ds-1");

        let reopened = MarkSet::open(set.into_store(), PROGRESS_KEY);
        assert_eq!(reopened.len(), 1);
        assert!(reopened.contains("ds-2"));
    }

    #[test]
    fn test_failed_write_keeps_in_memory_set_authoritative() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);

        let mut set = MarkSet::open(store, BOOKMARKS_KEY);
        assert!(set.toggle("ai-1"));
        assert!(set.contains("ai-1"));
        assert_eq!(set.len(), 1);

        // Nothing reached the store.
        let store = set.into_store();
        assert_eq!(store.read(BOOKMARKS_KEY), None);
    }

    #[test]
    fn test_slots_do_not_bleed_into_each_other() {
        let mut store = InMemoryStore::new();
        store.write(BOOKMARKS_KEY, r#"["ai-1"]"#);
        store.write(PROGRESS_KEY, r#"["web-2"]"#);

        let bookmarks = MarkSet::open(store, BOOKMARKS_KEY);
        assert!(bookmarks.contains("ai-1"));
        assert!(!bookmarks.contains("web-2"));

        let progress = MarkSet::open(bookmarks.into_store(), PROGRESS_KEY);
        assert!(progress.contains("web-2"));
        assert!(!progress.contains("ai-1"));
    }
}
