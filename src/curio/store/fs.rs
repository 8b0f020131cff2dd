use super::StateStore;
use std::fs;
use std::path::PathBuf;

/// File-backed store. Each key maps to `<root>/<key>.json`.
///
/// The root directory is created lazily on first write, so a fresh
/// installation reads as empty state without touching the disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl StateStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.slot_path(key)).ok()
    }

    fn write(&mut self, key: &str, payload: &str) -> bool {
        if fs::create_dir_all(&self.root).is_err() {
            return false;
        }
        fs::write(self.slot_path(key), payload).is_ok()
    }
}
