//! Derived display order for a list's items.
//!
//! Rules, highest priority first, applied by a stable sort:
//! 1. with a search term longer than two characters, matching items first;
//! 2. active items before completed ones;
//! 3. newest `createdAt` first ([`SortMode::Newest`]) or stored order ([`SortMode::Manual`]).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::Item;
use crate::drag::DragSession;
use crate::text_matcher::TextMatcher;

/// Tie-break used after the search and completion rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Most recently created first.
    #[default]
    Newest,
    /// Stored sequence order, which keeps drag reordering in place.
    Manual,
}

impl SortMode {
    fn tie_break(self, a: &Item, b: &Item) -> Ordering {
        match self {
            Self::Newest => b.created_at.cmp(&a.created_at),
            Self::Manual => Ordering::Equal,
        }
    }
}

/// Display order with the default [`SortMode::Newest`] tie-break.
///
/// Returns a reordered copy; `items` is left untouched.
#[must_use]
pub fn compute_display_order(items: &[Item], search_term: &str) -> Vec<Item> {
    display_order(items, search_term, SortMode::Newest)
        .into_iter()
        .cloned()
        .collect()
}

/// Borrowing variant of [`compute_display_order`] with a selectable tie-break.
#[must_use]
pub fn display_order<'a>(items: &'a [Item], search_term: &str, mode: SortMode) -> Vec<&'a Item> {
    ranked(items, search_term, mode)
        .into_iter()
        .map(|(_, _, item)| item)
        .collect()
}

/// One rendered row of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRow<'a> {
    /// The item shown on this row.
    pub item: &'a Item,
    /// Whether the item text contains the search term.
    pub matched: bool,
    /// Index within the active subsequence when the row may be dragged.
    pub drag_index: Option<usize>,
    /// Whether this row is the one currently being dragged.
    pub dragging: bool,
}

/// Display order annotated with search and drag state for rendering.
///
/// Rows are draggable only in [`SortMode::Manual`], only for active items and
/// only while no search term is entered. Highlighting (`matched`) applies to
/// any non-empty term even though ordering ignores short terms.
#[must_use]
pub fn display_rows<'a>(
    items: &'a [Item],
    search_term: &str,
    mode: SortMode,
    drag: Option<&DragSession>,
) -> Vec<DisplayRow<'a>> {
    let highlighter = TextMatcher::new(search_term);
    let drag_enabled = mode == SortMode::Manual && search_term.is_empty();
    let dragged = drag.map(DragSession::index);

    ranked(items, search_term, mode)
        .into_iter()
        .map(|(_, active_index, item)| {
            let drag_index = active_index.filter(|_| drag_enabled);
            DisplayRow {
                item,
                matched: highlighter.as_ref().is_some_and(|m| m.matches(&item.text)),
                drag_index,
                dragging: drag_index.is_some() && drag_index == dragged,
            }
        })
        .collect()
}

/// Items paired with their search flag and active-subsequence index, sorted for display.
fn ranked<'a>(items: &'a [Item], search_term: &str, mode: SortMode) -> Vec<(bool, Option<usize>, &'a Item)> {
    let matcher = TextMatcher::for_search(search_term);
    let mut active_seen = 0;
    let mut keyed: Vec<(bool, Option<usize>, &Item)> = items
        .iter()
        .map(|item| {
            let matched = matcher.as_ref().is_some_and(|m| m.matches(&item.text));
            let active_index = (!item.completed).then(|| {
                active_seen += 1;
                active_seen - 1
            });
            (matched, active_index, item)
        })
        .collect();

    keyed.sort_by(|(a_match, _, a), (b_match, _, b)| {
        b_match
            .cmp(a_match)
            .then(a.completed.cmp(&b.completed))
            .then_with(|| mode.tie_break(a, b))
    });
    keyed
}
