//! Item mutations: each operation reads the current sequence and yields the next one.
//!
//! Toggle policy: completing an item moves it to the end of the sequence, so
//! completed items keep the order in which they were checked off; reopening an
//! item moves it to the front, ahead of every other active item.

use crate::Item;
use crate::clock::Clock;
use crate::id::ItemId;

/// Result of applying a mutation to an item sequence.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// The sequence changed; this is the new sequence.
    Changed(Vec<Item>),
    /// Input was blank, unknown, or out of range; the sequence is untouched.
    Unchanged,
}

impl Mutation {
    /// Whether the operation produced a new sequence.
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }

    /// Resolve into the resulting sequence, reusing `current` when nothing changed.
    #[must_use]
    pub fn into_items(self, current: &[Item]) -> Vec<Item> {
        match self {
            Self::Changed(items) => items,
            Self::Unchanged => current.to_vec(),
        }
    }

    /// Replace `items` with the new sequence. Returns true when something changed.
    pub fn apply_to(self, items: &mut Vec<Item>) -> bool {
        match self {
            Self::Changed(next) => {
                *items = next;
                true
            }
            Self::Unchanged => false,
        }
    }
}

/// Prepend a new active item. Blank text is ignored.
pub fn add_item(items: &[Item], text: &str, clock: &impl Clock) -> Mutation {
    let text = text.trim();
    if text.is_empty() {
        return Mutation::Unchanged;
    }
    let mut next = Vec::with_capacity(items.len() + 1);
    next.push(Item::new(text, clock.now()));
    next.extend_from_slice(items);
    Mutation::Changed(next)
}

/// Flip the completion flag of `id` and move it according to the toggle policy.
pub fn toggle_item(items: &[Item], id: &ItemId) -> Mutation {
    let Some(pos) = position(items, id) else {
        return Mutation::Unchanged;
    };
    let mut next = items.to_vec();
    let mut item = next.remove(pos);
    item.completed = !item.completed;
    if item.completed {
        next.push(item);
    } else {
        next.insert(0, item);
    }
    Mutation::Changed(next)
}

/// Replace the text of `id`. Blank text and unknown ids are ignored.
pub fn rename_item(items: &[Item], id: &ItemId, new_text: &str) -> Mutation {
    let new_text = new_text.trim();
    if new_text.is_empty() {
        return Mutation::Unchanged;
    }
    let Some(pos) = position(items, id) else {
        return Mutation::Unchanged;
    };
    if items[pos].text == new_text {
        return Mutation::Unchanged;
    }
    let mut next = items.to_vec();
    next[pos].text = new_text.to_owned();
    Mutation::Changed(next)
}

/// Remove `id` from the sequence.
pub fn delete_item(items: &[Item], id: &ItemId) -> Mutation {
    if position(items, id).is_none() {
        return Mutation::Unchanged;
    }
    Mutation::Changed(items.iter().filter(|item| &item.id != id).cloned().collect())
}

/// Move an active item from `from` to `to`, both counted within the active subsequence.
///
/// Completed items stay in their slots, so their relative order never changes.
pub fn reorder_item(items: &[Item], from: usize, to: usize) -> Mutation {
    let slots: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| !item.completed)
        .map(|(idx, _)| idx)
        .collect();
    if from == to || from >= slots.len() || to >= slots.len() {
        return Mutation::Unchanged;
    }

    let mut active: Vec<Item> = slots.iter().map(|&slot| items[slot].clone()).collect();
    let moved = active.remove(from);
    active.insert(to, moved);

    let mut next = items.to_vec();
    for (slot, item) in slots.into_iter().zip(active) {
        next[slot] = item;
    }
    Mutation::Changed(next)
}

/// Drop every completed item.
pub fn clear_completed(items: &[Item]) -> Mutation {
    if !items.iter().any(|item| item.completed) {
        return Mutation::Unchanged;
    }
    Mutation::Changed(items.iter().filter(|item| !item.completed).cloned().collect())
}

/// Number of active items, i.e. the valid index range for [`reorder_item`].
#[must_use]
pub fn active_len(items: &[Item]) -> usize {
    items.iter().filter(|item| !item.completed).count()
}

fn position(items: &[Item], id: &ItemId) -> Option<usize> {
    items.iter().position(|item| &item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Timestamp;
    use std::cell::Cell;

    fn ticking() -> impl Fn() -> Timestamp {
        let next = Cell::new(1_000);
        move || {
            let now = next.get();
            next.set(now + 1);
            Timestamp(now)
        }
    }

    fn item(text: &str, completed: bool, created_at: i64) -> Item {
        let mut item = Item::new(text, Timestamp(created_at));
        item.completed = completed;
        item
    }

    fn texts(items: &[Item]) -> Vec<&str> {
        items.iter().map(|item| item.text.as_str()).collect()
    }

    #[test]
    fn add_prepends_most_recent_first() {
        let clock = ticking();
        let items = add_item(&[], "Milk", &clock).into_items(&[]);
        let items = add_item(&items, "Bread", &clock).into_items(&items);
        assert_eq!(texts(&items), vec!["Bread", "Milk"]);
        assert!(items.iter().all(|item| !item.completed));
        assert!(items[0].created_at > items[1].created_at);
        assert_ne!(items[0].id, items[1].id);
    }

    #[test]
    fn add_ignores_blank_text_and_trims() {
        let clock = ticking();
        let items = vec![item("Milk", false, 1)];
        assert_eq!(add_item(&items, "", &clock), Mutation::Unchanged);
        assert_eq!(add_item(&items, "   ", &clock), Mutation::Unchanged);
        let next = add_item(&items, "  Eggs \n", &clock).into_items(&items);
        assert_eq!(texts(&next), vec!["Eggs", "Milk"]);
    }

    #[test]
    fn completing_moves_to_end_in_completion_order() {
        let items = vec![
            item("A", false, 3),
            item("B", false, 2),
            item("C", false, 1),
        ];
        let once = toggle_item(&items, &items[0].id).into_items(&items);
        assert_eq!(texts(&once), vec!["B", "C", "A"]);
        let twice = toggle_item(&once, &once[0].id).into_items(&once);
        assert_eq!(texts(&twice), vec!["C", "A", "B"]);
        assert!(twice[1].completed && twice[2].completed);
    }

    #[test]
    fn reopening_moves_to_front_of_active_group() {
        let items = vec![item("A", false, 3), item("B", true, 2), item("C", true, 1)];
        let next = toggle_item(&items, &items[2].id).into_items(&items);
        assert_eq!(texts(&next), vec!["C", "A", "B"]);
        assert!(!next[0].completed);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let items = vec![item("A", false, 1)];
        assert_eq!(toggle_item(&items, &ItemId::new()), Mutation::Unchanged);
    }

    #[test]
    fn rename_replaces_text_only_for_valid_input() {
        let items = vec![item("Milk", false, 1)];
        let id = items[0].id.clone();
        assert_eq!(rename_item(&items, &id, "  "), Mutation::Unchanged);
        assert_eq!(rename_item(&items, &ItemId::new(), "Oat milk"), Mutation::Unchanged);
        assert_eq!(rename_item(&items, &id, " Milk "), Mutation::Unchanged);
        let next = rename_item(&items, &id, " Oat milk ").into_items(&items);
        assert_eq!(next[0].text, "Oat milk");
        assert_eq!(next[0].id, id);
    }

    #[test]
    fn delete_twice_is_idempotent() {
        let items = vec![item("Milk", false, 2), item("Eggs", false, 1)];
        let id = items[0].id.clone();
        let once = delete_item(&items, &id).into_items(&items);
        assert_eq!(texts(&once), vec!["Eggs"]);
        assert_eq!(delete_item(&once, &id), Mutation::Unchanged);
    }

    #[test]
    fn reorder_moves_within_active_items_only() {
        let items = vec![
            item("A", false, 5),
            item("X", true, 4),
            item("B", false, 3),
            item("C", false, 2),
            item("Y", true, 1),
        ];
        let next = reorder_item(&items, 2, 0).into_items(&items);
        assert_eq!(texts(&next), vec!["C", "X", "A", "B", "Y"]);

        let next = reorder_item(&items, 0, 2).into_items(&items);
        assert_eq!(texts(&next), vec!["B", "X", "C", "A", "Y"]);
    }

    #[test]
    fn reorder_rejects_out_of_range_and_same_index() {
        let items = vec![item("A", false, 2), item("X", true, 1)];
        assert_eq!(reorder_item(&items, 0, 0), Mutation::Unchanged);
        assert_eq!(reorder_item(&items, 0, 1), Mutation::Unchanged);
        assert_eq!(reorder_item(&items, 3, 0), Mutation::Unchanged);
        assert_eq!(active_len(&items), 1);
    }

    #[test]
    fn clear_completed_keeps_active_items() {
        let items = vec![item("Milk", false, 2), item("Eggs", true, 1)];
        let next = clear_completed(&items).into_items(&items);
        assert_eq!(texts(&next), vec!["Milk"]);
        assert!(!next[0].completed);
        assert_eq!(clear_completed(&next), Mutation::Unchanged);
    }

    #[test]
    fn apply_to_reports_changes() {
        let mut items = vec![item("Milk", false, 1)];
        let id = items[0].id.clone();
        assert!(toggle_item(&items, &id).apply_to(&mut items));
        assert!(items[0].completed);
        assert!(!toggle_item(&items, &ItemId::new()).apply_to(&mut items));
    }
}
