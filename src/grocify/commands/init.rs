use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Creates the ledger of an empty list. An existing ledger is left alone
/// unless `force` is set.
pub fn run<S: DataStore>(store: &mut S, force: bool) -> Result<CmdResult> {
    let location = store
        .location()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<memory>".to_string());
    let mut result = CmdResult::default();

    if store.exists() && !force {
        result.add_message(CmdMessage::warning(format!(
            "A grocery list already exists at {} (use --force to start over)",
            location
        )));
        return Ok(result);
    }

    store.initialize()?;
    tracing::info!(%location, force, "initialized ledger");
    result.add_message(CmdMessage::success(format!(
        "Initialized grocery list at {}",
        location
    )));
    Ok(result)
}
