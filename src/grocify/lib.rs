//! # Grocify Architecture
//!
//! Grocify keeps a single user's grocery list in a fixed-width text file that
//! reads like a printed receipt. It is a library with a CLI client, not the
//! other way around: the CLI is one way to drive it, and a web handler or any
//! other UI would call the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, sets up logging        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the loaded list          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  List (list.rs)                                             │
//! │  - Merge-or-append, reset, derived totals                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┐  ┌───────────────────────────┐
//! │  Storage (store/)            │─►│  Ledger format (ledger.rs)│
//! │  - DataStore trait           │  │  - parse / render / blank │
//! │  - FileStore, InMemoryStore  │  │  - column layout          │
//! └──────────────────────────────┘  └───────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments, returns `Result<CmdResult>`,
//! and never writes to stdout/stderr or exits the process.
//!
//! ## Session Model
//!
//! The ledger is read once when the API is opened. After that the in-memory
//! list is authoritative and every mutation rewrites the whole file. There is
//! no locking: two processes mutating the same ledger at once can lose one
//! another's changes.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`list`]: The in-memory grocery list
//! - [`ledger`]: The fixed-width file format
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Item`, `Price`, `Totals`
//! - [`config`]: Configuration file
//! - [`init`]: Locating the ledger and config for a session
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod ledger;
pub mod list;
pub mod model;
pub mod store;
