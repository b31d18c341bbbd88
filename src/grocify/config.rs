use crate::error::{GrocifyError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY_SYMBOL: &str = "$";

pub const KEY_LEDGER_PATH: &str = "ledger-path";
pub const KEY_CURRENCY_SYMBOL: &str = "currency-symbol";
pub const KEYS: &[&str] = &[KEY_LEDGER_PATH, KEY_CURRENCY_SYMBOL];

/// Configuration for grocify, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GrocifyConfig {
    /// Ledger file to use instead of the default one in the data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_path: Option<PathBuf>,

    /// Prefix for prices when the list is shown in the terminal (never written to the ledger)
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for GrocifyConfig {
    fn default() -> Self {
        Self {
            ledger_path: None,
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl GrocifyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GrocifyError::Io)?;
        let config: GrocifyConfig =
            serde_json::from_str(&content).map_err(GrocifyError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(GrocifyError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(GrocifyError::Serialization)?;
        fs::write(config_path, content).map_err(GrocifyError::Io)?;
        Ok(())
    }

    /// Current value of a key, as shown to the user
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            KEY_LEDGER_PATH => Ok(self
                .ledger_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            KEY_CURRENCY_SYMBOL => Ok(self.currency_symbol.clone()),
            other => Err(unknown_key(other)),
        }
    }

    /// Set a key from user input. An empty ledger path restores the default.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_LEDGER_PATH => {
                let value = value.trim();
                self.ledger_path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            KEY_CURRENCY_SYMBOL => self.currency_symbol = value.to_string(),
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> GrocifyError {
    GrocifyError::Config(format!(
        "unknown config key: {} (expected one of: {})",
        key,
        KEYS.join(", ")
    ))
}
