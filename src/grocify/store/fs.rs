use super::DataStore;
use crate::error::{GrocifyError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LEDGER_FILENAME: &str = "grocery_list.txt";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A store for the default ledger filename inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_LEDGER_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(GrocifyError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn read_ledger(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(GrocifyError::LedgerNotFound(self.path.clone()));
        }
        fs::read_to_string(&self.path).map_err(GrocifyError::Io)
    }

    fn write_ledger(&mut self, contents: &str) -> Result<()> {
        self.ensure_parent()?;
        fs::write(&self.path, contents).map_err(GrocifyError::Io)
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
