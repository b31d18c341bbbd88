//! Templates for terminal output.
//!
//! Templates are minijinja sources kept in their own files so they are easy to
//! edit and diff, and included here as string constants. Layout math (column
//! widths, padding) happens in Rust before rendering; templates only decide
//! structure and which named style applies to each piece.
//!
//! Every line a template emits ends with an explicit line break in the
//! source; block tags trim their own trailing newline with `-%}`.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
