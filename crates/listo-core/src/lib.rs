//! Domain types, display ordering and mutations for Listo shopping lists.

/// Timestamps and injectable clocks.
pub mod clock;
pub mod display;
/// Transient drag-reorder state.
pub mod drag;
/// Identifier types.
pub mod id;
pub mod mutation;
/// Search matching and highlighting.
pub mod text_matcher;
/// List colour palette.
pub mod theme;

pub use crate::clock::{Clock, SystemClock, Timestamp};
pub use crate::display::{DisplayRow, SortMode, compute_display_order, display_order, display_rows};
pub use crate::drag::DragSession;
pub use crate::id::{ItemId, ListId};
pub use crate::mutation::Mutation;
pub use crate::text_matcher::{Segment, TextMatcher, highlight};
pub use crate::theme::ThemeColor;

use serde::{Deserialize, Serialize};

/// A single entry of a shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Identifier, unique within the owning list.
    pub id: ItemId,
    /// What to buy.
    pub text: String,
    /// Checked off.
    pub completed: bool,
    /// Creation time.
    pub created_at: Timestamp,
}

impl Item {
    /// Create an active item with a fresh id.
    #[must_use]
    pub fn new(text: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            id: ItemId::new(),
            text: text.into(),
            completed: false,
            created_at,
        }
    }
}

/// A named list of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    /// Identifier, unique within the collection.
    pub id: ListId,
    /// Display title.
    pub title: String,
    /// Items in stored order.
    pub items: Vec<Item>,
    /// Creation time.
    pub created_at: Timestamp,
    /// Accent colour chosen at creation.
    pub theme_color: ThemeColor,
}

impl ShoppingList {
    /// Create an empty list with a fresh id.
    #[must_use]
    pub fn new(title: impl Into<String>, created_at: Timestamp, theme_color: ThemeColor) -> Self {
        Self {
            id: ListId::new(),
            title: title.into(),
            items: Vec::new(),
            created_at,
            theme_color,
        }
    }

    /// Progress counters for list cards and headers.
    #[must_use]
    pub fn summary(&self) -> ListSummary {
        ListSummary::of(&self.items)
    }
}

/// Counts shown on list cards and the list header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSummary {
    /// Items still to buy.
    pub active: usize,
    /// Items checked off.
    pub completed: usize,
    /// All items.
    pub total: usize,
}

impl ListSummary {
    /// Count the items of a list.
    #[must_use]
    pub fn of(items: &[Item]) -> Self {
        let completed = items.iter().filter(|item| item.completed).count();
        Self {
            active: items.len() - completed,
            completed,
            total: items.len(),
        }
    }

    /// Completed share in whole percent (0 for an empty list).
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let percent = self.completed * 100 / self.total;
        u8::try_from(percent).unwrap_or(100)
    }
}

/// Every list of a user; the unit of persistence.
///
/// Serializes as a bare JSON array of lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    lists: Vec<ShoppingList>,
}

impl Collection {
    /// Empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { lists: Vec::new() }
    }

    /// Lists in display order (newest created first).
    #[must_use]
    pub fn lists(&self) -> &[ShoppingList] {
        &self.lists
    }

    /// Number of lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Whether there are no lists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Look up a list.
    #[must_use]
    pub fn get(&self, id: &ListId) -> Option<&ShoppingList> {
        self.lists.iter().find(|list| &list.id == id)
    }

    /// Look up a list for modification.
    pub fn get_mut(&mut self, id: &ListId) -> Option<&mut ShoppingList> {
        self.lists.iter_mut().find(|list| &list.id == id)
    }

    /// Prepend a new empty list with a random theme. Blank titles are ignored.
    pub fn create_list(&mut self, title: &str, clock: &impl Clock) -> Option<ListId> {
        self.create_list_with(title, clock, ThemeColor::random())
    }

    /// Prepend a new empty list with the given theme. Blank titles are ignored.
    pub fn create_list_with(&mut self, title: &str, clock: &impl Clock, theme: ThemeColor) -> Option<ListId> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let list = ShoppingList::new(title, clock.now(), theme);
        let id = list.id.clone();
        self.lists.insert(0, list);
        Some(id)
    }

    /// Retitle a list. Returns false for blank titles, unknown ids or unchanged titles.
    pub fn rename_list(&mut self, id: &ListId, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        match self.get_mut(id) {
            Some(list) if list.title != title => {
                title.clone_into(&mut list.title);
                true
            }
            _ => false,
        }
    }

    /// Remove a list. Returns false for unknown ids.
    pub fn delete_list(&mut self, id: &ListId) -> bool {
        let before = self.lists.len();
        self.lists.retain(|list| &list.id != id);
        self.lists.len() != before
    }

    /// Replace the items of one list. Returns false for unknown ids.
    pub fn update_items(&mut self, id: &ListId, items: Vec<Item>) -> bool {
        self.get_mut(id).is_some_and(|list| {
            list.items = items;
            true
        })
    }

    /// Unwrap into the underlying lists.
    #[must_use]
    pub fn into_lists(self) -> Vec<ShoppingList> {
        self.lists
    }
}

impl From<Vec<ShoppingList>> for Collection {
    fn from(lists: Vec<ShoppingList>) -> Self {
        Self { lists }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixed() -> impl Fn() -> Timestamp {
        || Timestamp(1_700_000_000_000)
    }

    #[test]
    fn wire_format_uses_camel_case_field_names() {
        let item = Item {
            id: "i1".parse().unwrap_or_else(|err| panic!("valid id: {err}")),
            text: "Milk".into(),
            completed: false,
            created_at: Timestamp(1),
        };
        let list = ShoppingList {
            id: "l1".parse().unwrap_or_else(|err| panic!("valid id: {err}")),
            title: "Groceries".into(),
            items: vec![item],
            created_at: Timestamp(2),
            theme_color: ThemeColor::Rose,
        };
        let value = serde_json::to_value(Collection::from(vec![list]))
            .unwrap_or_else(|err| panic!("must serialize: {err}"));
        assert_eq!(
            value,
            json!([{
                "id": "l1",
                "title": "Groceries",
                "items": [{"id": "i1", "text": "Milk", "completed": false, "createdAt": 1}],
                "createdAt": 2,
                "themeColor": "bg-rose-500"
            }])
        );
    }

    #[test]
    fn new_lists_are_prepended() {
        let clock = fixed();
        let mut collection = Collection::new();
        let first = collection.create_list("Groceries", &clock);
        let second = collection.create_list_with("  Hardware ", &clock, ThemeColor::Amber);
        assert!(first.is_some() && second.is_some());
        let titles: Vec<_> = collection.lists().iter().map(|list| list.title.as_str()).collect();
        assert_eq!(titles, vec!["Hardware", "Groceries"]);
        assert_eq!(collection.lists()[0].theme_color, ThemeColor::Amber);
        assert!(collection.lists()[1].items.is_empty());
    }

    #[test]
    fn blank_titles_are_ignored() {
        let clock = fixed();
        let mut collection = Collection::new();
        assert!(collection.create_list("   ", &clock).is_none());
        let id = collection
            .create_list("Groceries", &clock)
            .unwrap_or_else(|| panic!("title is not blank"));
        assert!(!collection.rename_list(&id, " "));
        assert!(!collection.rename_list(&id, "Groceries"));
        assert!(collection.rename_list(&id, "Weekend"));
        assert_eq!(collection.get(&id).map(|list| list.title.as_str()), Some("Weekend"));
    }

    #[test]
    fn delete_and_update_ignore_unknown_ids() {
        let clock = fixed();
        let mut collection = Collection::new();
        let id = collection
            .create_list("Groceries", &clock)
            .unwrap_or_else(|| panic!("title is not blank"));
        let stranger = ListId::new();
        assert!(!collection.update_items(&stranger, Vec::new()));
        assert!(!collection.delete_list(&stranger));
        assert!(collection.update_items(&id, vec![Item::new("Milk", Timestamp(3))]));
        assert_eq!(collection.get(&id).map(|list| list.items.len()), Some(1));
        assert!(collection.delete_list(&id));
        assert!(!collection.delete_list(&id));
        assert!(collection.is_empty());
    }

    #[test]
    fn summary_counts_and_progress() {
        let mut items = vec![
            Item::new("Milk", Timestamp(1)),
            Item::new("Eggs", Timestamp(2)),
            Item::new("Bread", Timestamp(3)),
        ];
        items[1].completed = true;
        let summary = ListSummary::of(&items);
        assert_eq!(summary.active, 2);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.progress_percent(), 33);
        assert_eq!(ListSummary::default().progress_percent(), 0);
    }
}
