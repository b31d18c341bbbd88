//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts *where* the ledger text lives. The format
//! itself belongs to [`crate::ledger`]; a store only reads and replaces the
//! whole text.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one ledger file on disk
//!   (`grocery_list.txt` by default).
//! - [`memory::InMemoryStore`]: Ledger text held in memory, for tests.
//!
//! ## Rewrite Model
//!
//! Every mutation rewrites the entire ledger. The writer reads the current
//! text first so the header and footer borders already in the file are kept
//! verbatim. Writes are not atomic: a crash mid-write can leave a truncated
//! file, which the loader will then reject.

use crate::error::Result;
use crate::ledger;
use crate::model::{Item, Totals};
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for ledger storage.
pub trait DataStore {
    /// Read the full ledger text. Fails if no ledger has been created.
    fn read_ledger(&self) -> Result<String>;

    /// Replace the full ledger text, creating it if needed.
    fn write_ledger(&mut self, contents: &str) -> Result<()>;

    /// Whether a ledger has been created.
    fn exists(&self) -> bool;

    /// Where the ledger lives, for stores backed by a file.
    fn location(&self) -> Option<&Path> {
        None
    }

    /// Load the items of the ledger, in file order.
    fn load_items(&self) -> Result<Vec<Item>> {
        let text = self.read_ledger()?;
        let items = ledger::parse_items(&text)?;
        tracing::debug!(count = items.len(), "loaded ledger items");
        Ok(items)
    }

    /// Rewrite the ledger with `items` and `totals`, keeping its header and
    /// footer borders.
    fn rewrite(&mut self, items: &[Item], totals: Totals) -> Result<()> {
        let existing = self.read_ledger()?;
        let rendered = ledger::render(&existing, items, totals)?;
        self.write_ledger(&rendered)?;
        tracing::debug!(
            count = items.len(),
            total_quantity = totals.quantity,
            total_price = %totals.price,
            "rewrote ledger"
        );
        Ok(())
    }

    /// Write the ledger of an empty list.
    fn initialize(&mut self) -> Result<()> {
        self.write_ledger(&ledger::blank())
    }
}
