//! # Locating the Ledger
//!
//! Grocify keeps one ledger per user. Where it lives is resolved once per
//! session, highest priority first:
//!
//! 1. An explicit path (the CLI's `--ledger` flag).
//! 2. The `GROCIFY_LEDGER` environment variable.
//! 3. `ledger_path` in `config.json`.
//! 4. `grocery_list.txt` in the data directory.
//!
//! The data and config directories are the OS-appropriate ones from the
//! `directories` crate. Setting `GROCIFY_HOME` replaces both with a single
//! directory, which keeps tests and throwaway lists out of the user's real
//! data.
//!
//! A relative ledger path from the config file is taken relative to the
//! config directory, so the file can be moved along with its list.

use crate::commands::GrocifyPaths;
use crate::config::GrocifyConfig;
use crate::error::{GrocifyError, Result};
use crate::store::fs::{FileStore, DEFAULT_LEDGER_FILENAME};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const ENV_HOME: &str = "GROCIFY_HOME";
pub const ENV_LEDGER: &str = "GROCIFY_LEDGER";

pub struct GrocifyContext {
    pub paths: GrocifyPaths,
    pub config: GrocifyConfig,
}

impl GrocifyContext {
    pub fn store(&self) -> FileStore {
        FileStore::new(self.paths.ledger.clone())
    }
}

/// Resolves directories from the environment and loads the config.
pub fn initialize(ledger_override: Option<PathBuf>) -> Result<GrocifyContext> {
    let (data_dir, config_dir) = match std::env::var_os(ENV_HOME) {
        Some(home) if !home.is_empty() => {
            let home = PathBuf::from(home);
            (home.clone(), home)
        }
        _ => {
            let dirs = ProjectDirs::from("com", "grocify", "grocify").ok_or_else(|| {
                GrocifyError::Config("could not determine a home directory".to_string())
            })?;
            (
                dirs.data_dir().to_path_buf(),
                dirs.config_dir().to_path_buf(),
            )
        }
    };

    let config = GrocifyConfig::load(&config_dir)?;
    let env_ledger = std::env::var_os(ENV_LEDGER)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    let ledger = resolve_ledger_path(ledger_override, env_ledger, &config, &data_dir, &config_dir);
    tracing::debug!(ledger = %ledger.display(), config_dir = %config_dir.display(), "resolved paths");

    Ok(GrocifyContext {
        paths: GrocifyPaths { ledger, config_dir },
        config,
    })
}

pub fn resolve_ledger_path(
    flag: Option<PathBuf>,
    env: Option<PathBuf>,
    config: &GrocifyConfig,
    data_dir: &Path,
    config_dir: &Path,
) -> PathBuf {
    if let Some(path) = flag.or(env) {
        return path;
    }
    match &config.ledger_path {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => config_dir.join(path),
        None => data_dir.join(DEFAULT_LEDGER_FILENAME),
    }
}
