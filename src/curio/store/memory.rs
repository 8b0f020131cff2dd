use super::StateStore;
use std::collections::HashMap;

/// In-memory store for testing. No persistence.
///
/// The simulation switches let tests exercise the degraded paths: a read
/// failure must come up as empty state, a write failure must leave the
/// in-session state intact.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    slots: HashMap<String, String>,
    simulate_read_error: bool,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable read error simulation for testing fallback handling.
    pub fn set_simulate_read_error(&mut self, simulate: bool) {
        self.simulate_read_error = simulate;
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl StateStore for InMemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        if self.simulate_read_error {
            return None;
        }
        self.slots.get(key).cloned()
    }

    fn write(&mut self, key: &str, payload: &str) -> bool {
        if self.simulate_write_error {
            return false;
        }
        self.slots.insert(key.to_string(), payload.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut store = InMemoryStore::new();
        assert!(store.write("bookmarks", "[]"));
        assert_eq!(store.read("bookmarks"), Some("[]".to_string()));
    }

    #[test]
    fn test_simulated_read_error_hides_existing_slot() {
        let mut store = InMemoryStore::new();
        store.write("bookmarks", r#"["ai-1"]"#);
        store.set_simulate_read_error(true);
        assert_eq!(store.read("bookmarks"), None);
    }

    #[test]
    fn test_simulated_write_error_leaves_slot_untouched() {
        let mut store = InMemoryStore::new();
        store.write("bookmarks", r#"["ai-1"]"#);
        store.set_simulate_write_error(true);

        assert!(!store.write("bookmarks", "[]"));
        store.set_simulate_write_error(false);
        assert_eq!(store.read("bookmarks"), Some(r#"["ai-1"]"#.to_string()));
    }
}
