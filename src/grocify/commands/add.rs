use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::list::{AddOutcome, GroceryList};
use crate::model::{Item, Price};
use crate::store::DataStore;

pub fn run<S: DataStore>(
    list: &mut GroceryList<S>,
    name: &str,
    price: Price,
    quantity: u64,
) -> Result<CmdResult> {
    let outcome = list.add(Item::new(name.trim(), price, quantity))?;
    let item = outcome.item().clone();

    let mut result = CmdResult::default()
        .with_items(vec![item.clone()])
        .with_totals(list.totals());
    result.add_message(CmdMessage::success(format!(
        "{} has been added to your grocery list!",
        item.name
    )));
    if let AddOutcome::Merged(_) = outcome {
        result.add_message(CmdMessage::info(format!(
            "{} is now {} for {}",
            item.name, item.quantity, item.price
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::ListFixture;

    #[test]
    fn appending_reports_success() {
        let mut list = ListFixture::new().list;
        let result = run(&mut list, "  Milk ", "2.50".parse().unwrap(), 1).unwrap();

        assert_eq!(list.items()[0].name, "Milk");
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(
            result.messages[0].content,
            "Milk has been added to your grocery list!"
        );
        assert_eq!(result.totals.unwrap().quantity, 1);
    }

    #[test]
    fn merging_reports_the_new_amounts() {
        let mut list = ListFixture::new().with_item("Milk", "2.50", 1).list;
        let result = run(&mut list, "Milk", "1.50".parse().unwrap(), 2).unwrap();

        assert_eq!(result.items[0].quantity, 3);
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[1].content, "Milk is now 3 for 4");
    }

    #[test]
    fn invalid_items_are_errors() {
        let mut list = ListFixture::new().list;
        assert!(run(&mut list, "   ", "1".parse().unwrap(), 1).is_err());
        assert!(list.items().is_empty());
    }
}
