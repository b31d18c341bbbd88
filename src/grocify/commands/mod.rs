use crate::config::GrocifyConfig;
use crate::model::{Item, Totals};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod init;
pub mod paths;
pub mod reset;
pub mod view;

/// Resolved on-disk locations for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrocifyPaths {
    pub ledger: PathBuf,
    pub config_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub items: Vec<Item>,
    pub totals: Option<Totals>,
    pub ledger_text: Option<String>,
    pub paths: Option<GrocifyPaths>,
    pub config: Option<GrocifyConfig>,
    pub config_values: Vec<(String, String)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn with_totals(mut self, totals: Totals) -> Self {
        self.totals = Some(totals);
        self
    }

    pub fn with_ledger_text(mut self, text: String) -> Self {
        self.ledger_text = Some(text);
        self
    }

    pub fn with_paths(mut self, paths: GrocifyPaths) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_config(mut self, config: GrocifyConfig) -> Self {
        self.config = Some(config);
        self
    }
}
