use crate::commands::CmdResult;
use crate::error::Result;
use crate::list::GroceryList;
use crate::store::DataStore;

/// Current items and totals. With `raw`, also the ledger text itself.
pub fn run<S: DataStore>(list: &GroceryList<S>, raw: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default()
        .with_items(list.items().to_vec())
        .with_totals(list.totals());
    if raw {
        result = result.with_ledger_text(list.ledger_text()?);
    }
    Ok(result)
}
