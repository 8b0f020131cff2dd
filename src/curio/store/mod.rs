//! # State Storage
//!
//! This module defines the storage abstraction for user state. The
//! [`StateStore`] trait allows the application to work with different
//! storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing core logic
//!
//! User state is never load-bearing: a resource catalog with no bookmarks
//! is still fully usable. The trait therefore reports failure through
//! `Option`/`bool` rather than `Result`, and callers treat any failure as
//! "no saved state" and keep going. See [`crate::marks`] for the policy.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON file per slot
//! - [`memory::InMemoryStore`]: In-memory storage for testing, with
//!   switches to simulate read and write failures
//!
//! ## Storage Format
//!
//! For `FileStore`, each slot is a file named after its key:
//! ```text
//! ~/.local/share/curio/
//! ├── bookmarks.json      # JSON array of resource ids
//! ├── progress.json       # JSON array of resource ids
//! └── config.json         # CLI configuration
//! ```

pub mod fs;
pub mod memory;

/// Abstract interface for keyed state slots.
///
/// A slot holds one serialized payload under a stable key. Implementations
/// decide where the payload lives.
pub trait StateStore {
    /// Read the payload stored under `key`, or `None` if the slot is
    /// missing or unreadable.
    fn read(&self, key: &str) -> Option<String>;

    /// Write `payload` under `key`, replacing any previous value.
    /// Returns `false` when the write did not take.
    fn write(&mut self, key: &str, payload: &str) -> bool;
}
