//! Styles for the grocify CLI.
//!
//! Templates refer to semantic style names ("price", "total") rather than
//! colors. The theme maps each name to a `console::Style`. Names missing from
//! the theme render as plain text.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub static GROCIFY_THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        ("header", Style::new().bold().underlined()),
        ("rule", Style::new().dim()),
        ("name", Style::new()),
        ("quantity", Style::new().cyan()),
        ("price", Style::new().green()),
        ("total", Style::new().bold()),
        ("empty", Style::new().dim().italic()),
        ("info", Style::new().dim()),
        ("success", Style::new().green()),
        ("warning", Style::new().yellow()),
        ("error", Style::new().red()),
    ])
});
