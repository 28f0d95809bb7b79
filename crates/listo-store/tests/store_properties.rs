//! Save/load properties of the collection store.

#![allow(missing_docs)]

use listo_core::{Collection, Item, ShoppingList, ThemeColor, Timestamp};
use listo_store::{CollectionStore, MemoryStore};
use proptest::prelude::*;

fn arb_item() -> impl Strategy<Value = Item> {
    ("[a-zA-Zа-я ]{1,12}", any::<bool>(), any::<i64>()).prop_map(|(text, completed, created_at)| {
        let mut item = Item::new(text, Timestamp(created_at));
        item.completed = completed;
        item
    })
}

fn arb_list() -> impl Strategy<Value = ShoppingList> {
    (
        "[A-Za-z0-9 ]{1,16}",
        prop::collection::vec(arb_item(), 0..8),
        any::<i64>(),
        prop::sample::select(ThemeColor::PALETTE.to_vec()),
    )
        .prop_map(|(title, items, created_at, theme)| {
            let mut list = ShoppingList::new(title, Timestamp(created_at), theme);
            list.items = items;
            list
        })
}

proptest! {
    #[test]
    fn saved_collection_loads_back(lists in prop::collection::vec(arb_list(), 0..5)) {
        let collection = Collection::from(lists);
        let store = CollectionStore::new(MemoryStore::new());
        prop_assert!(store.save(&collection));
        prop_assert_eq!(store.try_load().map_err(|err| TestCaseError::fail(err.to_string()))?, collection);
    }

    #[test]
    fn later_save_replaces_earlier(
        first in prop::collection::vec(arb_list(), 0..3),
        second in prop::collection::vec(arb_list(), 0..3),
    ) {
        let store = CollectionStore::new(MemoryStore::new());
        prop_assert!(store.save(&Collection::from(first)));
        let second = Collection::from(second);
        prop_assert!(store.save(&second));
        prop_assert_eq!(store.load(), second);
    }
}
