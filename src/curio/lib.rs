//! # Curio Architecture
//!
//! Curio is a **UI-agnostic catalog-browsing library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the catalog and both mark sets for the session      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over filter/sort/progress            │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, marks.rs)                           │
//! │  - Abstract StateStore trait for keyed JSON slots           │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Catalog Is Read-Only
//!
//! The resource collection is fixed for the lifetime of a session: loaded
//! once (bundled or from a file), indexed, and never mutated. Everything
//! the user owns—bookmarks, completion marks, configuration—lives outside
//! the catalog in small JSON files. That split keeps every view a pure
//! function of (catalog, marks, criteria) and makes state loss harmless.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The same core could back a TUI, a web service, or any other UI.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`catalog`]: The fixed resource collection and derived counts
//! - [`filter`]: Composable, conjunctive filter criteria
//! - [`sort`]: Stable sort orders
//! - [`progress`]: Completion aggregates for learning paths
//! - [`marks`]: Persisted bookmark/progress sets
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Resource`, `LearningPath`, enums)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod marks;
pub mod model;
pub mod progress;
pub mod sort;
pub mod store;
