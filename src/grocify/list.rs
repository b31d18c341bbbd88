//! # The Grocery List
//!
//! [`GroceryList`] owns the in-memory items for the lifetime of a session and
//! mirrors every change to its [`DataStore`].
//!
//! ```text
//!   load ──► Loaded ──┬── add ───┐
//!                     │          ├──► Loaded (ledger rewritten)
//!                     └── reset ─┘
//! ```
//!
//! The in-memory items are the source of truth once loaded. The ledger is
//! parsed exactly once, in [`GroceryList::load`], and from then on only
//! written. Totals are never stored; they are summed from the items whenever
//! needed, including for the totals row written to the ledger.

use crate::error::{GrocifyError, Result};
use crate::ledger;
use crate::model::{Item, Totals};
use crate::store::DataStore;

/// What [`GroceryList::add`] did with a submitted item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new entry was appended.
    Appended(Item),
    /// The submission was folded into an existing entry of the same name;
    /// carries the entry's new state.
    Merged(Item),
}

impl AddOutcome {
    pub fn item(&self) -> &Item {
        match self {
            AddOutcome::Appended(item) | AddOutcome::Merged(item) => item,
        }
    }
}

pub struct GroceryList<S: DataStore> {
    store: S,
    items: Vec<Item>,
}

impl<S: DataStore> GroceryList<S> {
    /// Reads the ledger from `store`. A missing or malformed ledger is fatal.
    pub fn load(store: S) -> Result<Self> {
        let items = store.load_items()?;
        Ok(Self { store, items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn totals(&self) -> Totals {
        Totals::of(&self.items)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Merges `candidate` into the entry with the same name, or appends it,
    /// then rewrites the ledger.
    ///
    /// Nothing changes if the candidate is invalid, the merged values would
    /// no longer fit their columns, or the ledger cannot be written.
    pub fn add(&mut self, candidate: Item) -> Result<AddOutcome> {
        ledger::validate_item(&candidate)?;

        let mut items = self.items.clone();
        let outcome = match items.iter().position(|i| i.name == candidate.name) {
            Some(idx) => {
                let merged = merge(&items[idx], &candidate)?;
                ledger::check_fits(&merged)?;
                items[idx] = merged.clone();
                AddOutcome::Merged(merged)
            }
            None => {
                items.push(candidate.clone());
                AddOutcome::Appended(candidate)
            }
        };
        let totals = Totals::checked_of(&items)
            .ok_or_else(|| GrocifyError::Invalid("list totals are too large".into()))?;

        self.commit(items, totals)?;
        let merged = matches!(outcome, AddOutcome::Merged(_));
        tracing::info!(name = %outcome.item().name, merged, "added item");
        Ok(outcome)
    }

    /// Empties the list and rewrites the ledger with zero rows and 0/0 totals.
    pub fn reset(&mut self) -> Result<()> {
        let cleared = self.items.len();
        self.commit(Vec::new(), Totals::default())?;
        tracing::info!(cleared, "reset grocery list");
        Ok(())
    }

    /// The ledger text as currently stored.
    pub fn ledger_text(&self) -> Result<String> {
        self.store.read_ledger()
    }

    /// Writes `items` to the store and only then adopts them.
    fn commit(&mut self, items: Vec<Item>, totals: Totals) -> Result<()> {
        self.store.rewrite(&items, totals)?;
        self.items = items;
        Ok(())
    }
}

fn merge(existing: &Item, candidate: &Item) -> Result<Item> {
    let overflow = || GrocifyError::Invalid(format!("totals for {} are too large", existing.name));
    Ok(Item {
        name: existing.name.clone(),
        price: existing
            .price
            .checked_add(candidate.price)
            .ok_or_else(overflow)?,
        quantity: existing
            .quantity
            .checked_add(candidate.quantity)
            .ok_or_else(overflow)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Price;
    use crate::store::memory::fixtures::ListFixture;
    use crate::store::memory::InMemoryStore;

    fn price(s: &str) -> Price {
        s.parse().unwrap()
    }

    #[test]
    fn loading_a_missing_ledger_fails() {
        let err = GroceryList::load(InMemoryStore::new()).err().unwrap();
        assert!(matches!(err, GrocifyError::LedgerNotFound(_)));
    }

    #[test]
    fn milk_twice_merges_into_one_entry() {
        let mut list = ListFixture::new().list;

        let first = list.add(Item::new("Milk", price("2.50"), 1)).unwrap();
        assert!(matches!(first, AddOutcome::Appended(_)));
        assert_eq!(list.items(), &[Item::new("Milk", price("2.5"), 1)]);
        assert_eq!(list.totals().price.to_string(), "2.5");
        assert_eq!(list.totals().quantity, 1);

        let second = list.add(Item::new("Milk", price("1.50"), 2)).unwrap();
        assert_eq!(second, AddOutcome::Merged(Item::new("Milk", price("4"), 3)));
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].price.to_string(), "4");
        assert_eq!(list.totals().price.to_string(), "4");
        assert_eq!(list.totals().quantity, 3);
    }

    #[test]
    fn ledger_totals_match_the_items_after_a_merge() {
        let fixture = ListFixture::new()
            .with_item("Milk", "2.50", 1)
            .with_item("Bread", "3", 1)
            .with_item("Milk", "1.50", 2);
        let text = fixture.list.ledger_text().unwrap();
        assert!(text.contains("| Total: 4       | Total: 7        |"));
    }

    #[test]
    fn new_names_append_and_leave_others_alone() {
        let mut list = ListFixture::new()
            .with_item("Milk", "2.5", 1)
            .with_item("Eggs", "3.25", 12)
            .list;

        list.add(Item::new("milk", price("1"), 1)).unwrap();

        let names: Vec<&str> = list.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Eggs", "milk"]);
        assert_eq!(list.items()[0], Item::new("Milk", price("2.5"), 1));
        assert_eq!(list.items()[1], Item::new("Eggs", price("3.25"), 12));
    }

    #[test]
    fn reload_reproduces_the_list() {
        let list = ListFixture::new()
            .with_item("Milk", "2.5", 1)
            .with_item("Rice", "3.00", 2)
            .list;
        let store = list.store().clone();

        let first = GroceryList::load(store.clone()).unwrap();
        let second = GroceryList::load(store).unwrap();
        assert_eq!(first.items(), list.items());
        assert_eq!(first.items(), second.items());
        assert_eq!(first.items()[1].price.to_string(), "3");
    }

    #[test]
    fn reset_empties_list_and_ledger() {
        let mut list = ListFixture::new()
            .with_item("Milk", "2.5", 1)
            .with_item("Eggs", "3", 6)
            .list;

        list.reset().unwrap();
        assert!(list.items().is_empty());
        assert_eq!(list.totals(), Totals::default());
        assert_eq!(list.ledger_text().unwrap(), ledger::blank());

        let reloaded = GroceryList::load(list.store().clone()).unwrap();
        assert!(reloaded.items().is_empty());
    }

    #[test]
    fn rejected_items_leave_the_list_untouched() {
        let mut list = ListFixture::new().with_item("Milk", "2.5", 1).list;
        let before = list.ledger_text().unwrap();

        assert!(list.add(Item::new("", price("1"), 1)).is_err());
        assert!(list.add(Item::new("Milk", price("1"), 0)).is_err());
        assert!(list
            .add(Item::new("Milk", Price::from_cents(u64::MAX), 1))
            .is_err());
        assert!(list
            .add(Item::new("Milk", price("1"), 99_999_999_999_999))
            .is_err());

        assert_eq!(list.items(), &[Item::new("Milk", price("2.5"), 1)]);
        assert_eq!(list.ledger_text().unwrap(), before);
    }

    #[test]
    fn merged_values_must_still_fit() {
        let mut list = ListFixture::new()
            .with_item("Milk", "1", 99_999_999_999_999)
            .list;
        let err = list.add(Item::new("Milk", price("1"), 1)).unwrap_err();
        assert!(matches!(err, GrocifyError::Invalid(_)));
        assert_eq!(list.items()[0].quantity, 99_999_999_999_999);
    }

    #[test]
    fn padded_names_cannot_shadow_an_existing_entry() {
        let mut list = ListFixture::new().with_item("Milk", "1", 1).list;

        for name in [" Milk", "Milk ", "\tMilk"] {
            let err = list.add(Item::new(name, price("1"), 1)).unwrap_err();
            assert!(matches!(err, GrocifyError::Invalid(_)), "{name:?}");
        }

        let reloaded = GroceryList::load(list.store().clone()).unwrap();
        assert_eq!(reloaded.items(), &[Item::new("Milk", price("1"), 1)]);
        assert_eq!(reloaded.items(), list.items());
    }

    #[test]
    fn list_totals_may_not_overflow() {
        let mut list = ListFixture::new().list;
        let big = price("999999999999999");
        let mut count = 0;
        let err = loop {
            match list.add(Item::new(format!("Item {count}"), big, 1)) {
                Ok(_) => count += 1,
                Err(err) => break err,
            }
            assert!(count < 1_000, "totals never overflowed");
        };

        assert!(matches!(err, GrocifyError::Invalid(_)));
        assert_eq!(list.items().len(), count);
        assert!(Totals::checked_of(list.items()).is_some());
    }

    /// Holds a ledger but refuses every write.
    #[derive(Clone)]
    struct ReadOnlyStore(String);

    impl DataStore for ReadOnlyStore {
        fn read_ledger(&self) -> Result<String> {
            Ok(self.0.clone())
        }

        fn write_ledger(&mut self, _contents: &str) -> Result<()> {
            Err(GrocifyError::Io(std::io::Error::other("disk full")))
        }

        fn exists(&self) -> bool {
            true
        }
    }

    #[test]
    fn failed_writes_leave_the_list_unchanged() {
        let seeded = ListFixture::new()
            .with_item("Milk", "2.5", 1)
            .list
            .ledger_text()
            .unwrap();
        let mut list = GroceryList::load(ReadOnlyStore(seeded)).unwrap();
        let before = list.items().to_vec();

        assert!(matches!(
            list.add(Item::new("Eggs", price("3"), 12)),
            Err(GrocifyError::Io(_))
        ));
        assert!(list.add(Item::new("Milk", price("1"), 1)).is_err());
        assert!(list.reset().is_err());

        assert_eq!(list.items(), before.as_slice());
        assert_eq!(list.totals().quantity, 1);
    }
}
