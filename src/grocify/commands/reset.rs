use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::list::GroceryList;
use crate::store::DataStore;

pub fn run<S: DataStore>(list: &mut GroceryList<S>) -> Result<CmdResult> {
    list.reset()?;
    let mut result = CmdResult::default().with_totals(list.totals());
    result.add_message(CmdMessage::success("Your grocery list was reset!"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Totals;
    use crate::store::memory::fixtures::ListFixture;

    #[test]
    fn reset_clears_items() {
        let mut list = ListFixture::new()
            .with_item("Milk", "2.5", 1)
            .with_item("Eggs", "3", 12)
            .list;

        let result = run(&mut list).unwrap();
        assert!(list.items().is_empty());
        assert_eq!(result.totals, Some(Totals::default()));
        assert_eq!(result.messages[0].content, "Your grocery list was reset!");
    }
}
