use super::DataStore;
use crate::error::{GrocifyError, Result};
use std::path::PathBuf;

/// Ledger text held in memory. Behaves like a [`super::fs::FileStore`] whose
/// file may or may not exist yet.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    contents: Option<String>,
}

impl InMemoryStore {
    /// A store with no ledger yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }

    /// A store holding the ledger of an empty list.
    pub fn initialized() -> Self {
        Self::with_contents(crate::ledger::blank())
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn read_ledger(&self) -> Result<String> {
        self.contents
            .clone()
            .ok_or_else(|| GrocifyError::LedgerNotFound(PathBuf::from("<memory>")))
    }

    fn write_ledger(&mut self, contents: &str) -> Result<()> {
        self.contents = Some(contents.to_string());
        Ok(())
    }

    fn exists(&self) -> bool {
        self.contents.is_some()
    }
}

// --- Test Fixtures ---


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_has_no_ledger() {
        let store = InMemoryStore::new();
        assert!(!store.exists());
        assert!(matches!(
            store.read_ledger(),
            Err(GrocifyError::LedgerNotFound(_))
        ));
    }

    #[test]
    fn initialize_writes_blank_ledger() {
        let mut store = InMemoryStore::new();
        store.initialize().unwrap();
        assert_eq!(store.contents(), Some(crate::ledger::blank().as_str()));
        assert!(store.load_items().unwrap().is_empty());
    }
}
