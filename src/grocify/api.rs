//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every grocify operation, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Owns the session state**: the loaded [`GroceryList`]
//! - **Returns structured types** (`Result<CmdResult>`), never strings
//!
//! Opening the API runs the loader: the ledger is parsed once, here, and a
//! missing or malformed ledger is an error the caller must surface. The
//! operations that work without a loaded list (`init`, `config`, `paths`) are
//! free functions so a UI can run them before any ledger exists.
//!
//! `GrocifyApi<S: DataStore>` is generic over storage:
//! - Production: `GrocifyApi<FileStore>`
//! - Testing: `GrocifyApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::list::GroceryList;
use crate::model::Price;
use crate::store::DataStore;

/// The main API facade for grocify operations.
pub struct GrocifyApi<S: DataStore> {
    list: GroceryList<S>,
    paths: commands::GrocifyPaths,
}

impl<S: DataStore> GrocifyApi<S> {
    /// Loads the ledger from `store`.
    pub fn open(store: S, paths: commands::GrocifyPaths) -> Result<Self> {
        let list = GroceryList::load(store)?;
        Ok(Self { list, paths })
    }

    pub fn add_item(
        &mut self,
        name: &str,
        price: Price,
        quantity: u64,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.list, name, price, quantity)
    }

    pub fn reset(&mut self) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.list)
    }

    pub fn view(&self, raw: bool) -> Result<commands::CmdResult> {
        commands::view::run(&self.list, raw)
    }

    pub fn list(&self) -> &GroceryList<S> {
        &self.list
    }

    pub fn paths(&self) -> &commands::GrocifyPaths {
        &self.paths
    }
}

/// Creates the ledger in `store`.
pub fn init<S: DataStore>(store: &mut S, force: bool) -> Result<commands::CmdResult> {
    commands::init::run(store, force)
}

pub fn config(
    paths: &commands::GrocifyPaths,
    action: ConfigAction,
) -> Result<commands::CmdResult> {
    commands::config::run(paths, action)
}

pub fn paths(paths: &commands::GrocifyPaths) -> Result<commands::CmdResult> {
    commands::paths::run(paths)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, GrocifyPaths, MessageLevel};
