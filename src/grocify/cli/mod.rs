//! # CLI Layer
//!
//! This module is **one possible UI client** for grocify. It plays the part of
//! the request handlers: each subcommand opens the API, performs one operation
//! and renders the resulting `CmdResult`.
//!
//! It is the **only** place in the codebase that:
//! - Parses arguments
//! - Installs the tracing subscriber
//! - Writes to stdout/stderr
//! - Decides exit codes
//!
//! ## Structure
//!
//! - `setup`: clap definitions
//! - `commands`: dispatch and per-command handlers
//! - `render`: template rendering with terminal styles
//! - `styles` / `templates`: the theme and the template sources

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
pub use render::print_error;
