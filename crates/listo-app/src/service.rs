//! Session state over a persisted collection.

use listo_core::mutation::{self, Mutation};
use listo_core::{
    Clock, Collection, DisplayRow, DragSession, Item, ItemId, ListId, ListSummary, ShoppingList, SortMode,
    SystemClock, display_rows,
};
use listo_store::{BlobStore, CollectionStore, FileStore};
use tracing::{debug, info};

use crate::config::ListoConfig;

/// A list as shown on the home screen.
#[derive(Debug, Clone, Copy)]
pub struct ListCard<'a> {
    /// The list itself.
    pub list: &'a ShoppingList,
    /// Item counts for the progress bar.
    pub summary: ListSummary,
}

/// Application state handed to the view layer.
///
/// Owns the in-memory collection plus the per-session UI state (open list,
/// search input, drag in progress) and writes the whole collection back to the
/// store after every change. Invalid input (blank text, unknown ids, stale
/// indexes) is ignored and reported as `false`.
pub struct ListService<S, C = SystemClock> {
    store: CollectionStore<S>,
    clock: C,
    sort: SortMode,
    collection: Collection,
    open_list: Option<ListId>,
    search: String,
    drag: Option<DragSession>,
    last_save_ok: bool,
}

impl<S: BlobStore> ListService<S> {
    /// Load the collection from `store` using the wall clock.
    #[must_use]
    pub fn open(store: CollectionStore<S>, sort: SortMode) -> Self {
        Self::with_clock(store, sort, SystemClock)
    }
}

impl ListService<FileStore> {
    /// File-backed service laid out as `config` describes.
    #[must_use]
    pub fn from_config(config: &ListoConfig) -> Self {
        let backend = FileStore::open(config.storage.data_dir());
        Self::open(CollectionStore::with_key(backend, config.storage.key()), config.display.sort)
    }
}

impl<S: BlobStore, C: Clock> ListService<S, C> {
    /// Load the collection from `store` with an explicit clock.
    #[must_use]
    pub fn with_clock(store: CollectionStore<S>, sort: SortMode, clock: C) -> Self {
        let collection = store.load();
        info!(lists = collection.len(), key = store.key(), "Opened collection");
        Self {
            store,
            clock,
            sort,
            collection,
            open_list: None,
            search: String::new(),
            drag: None,
            last_save_ok: true,
        }
    }

    /// The full collection as last written.
    #[must_use]
    pub const fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Ordering applied to active items.
    #[must_use]
    pub const fn sort_mode(&self) -> SortMode {
        self.sort
    }

    /// Whether the most recent write reached the store.
    #[must_use]
    pub const fn last_save_ok(&self) -> bool {
        self.last_save_ok
    }

    /// Home screen cards, newest list first.
    #[must_use]
    pub fn list_cards(&self) -> Vec<ListCard<'_>> {
        self.collection
            .lists()
            .iter()
            .map(|list| ListCard {
                list,
                summary: list.summary(),
            })
            .collect()
    }

    /// Create a list and open it.
    pub fn create_list(&mut self, title: &str) -> Option<ListId> {
        let Some(id) = self.collection.create_list(title, &self.clock) else {
            debug!("Ignoring blank list title");
            return None;
        };
        info!(list = %id, "Created list");
        self.persist();
        self.enter_list(id.clone());
        Some(id)
    }

    /// Retitle a list; blank titles are ignored.
    pub fn rename_list(&mut self, id: &ListId, title: &str) -> bool {
        let changed = self.collection.rename_list(id, title);
        self.finish("rename_list", changed)
    }

    /// Delete a list; closes it first when it is open.
    pub fn delete_list(&mut self, id: &ListId) -> bool {
        let changed = self.collection.delete_list(id);
        if changed && self.open_list.as_ref() == Some(id) {
            self.close_list();
        }
        if changed {
            info!(list = %id, "Deleted list");
        }
        self.finish("delete_list", changed)
    }

    /// Open a list for editing, resetting search and drag state.
    pub fn open_list(&mut self, id: &ListId) -> bool {
        if self.collection.get(id).is_none() {
            debug!(list = %id, "Cannot open unknown list");
            return false;
        }
        self.enter_list(id.clone());
        true
    }

    /// Return to the home screen.
    pub fn close_list(&mut self) {
        self.open_list = None;
        self.search.clear();
        self.drag = None;
    }

    /// The list currently open, if any.
    #[must_use]
    pub fn current_list(&self) -> Option<&ShoppingList> {
        self.open_list.as_ref().and_then(|id| self.collection.get(id))
    }

    /// Current contents of the add/search input.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search
    }

    /// Update the combined add/search input. A non-empty term ends any drag.
    pub fn set_search(&mut self, term: &str) {
        term.clone_into(&mut self.search);
        if !self.search.is_empty() {
            self.drag = None;
        }
    }

    /// Rows of the open list in display order.
    #[must_use]
    pub fn rows(&self) -> Vec<DisplayRow<'_>> {
        self.current_list().map_or_else(Vec::new, |list| {
            display_rows(&list.items, &self.search, self.sort, self.drag.as_ref())
        })
    }

    /// Add the current input as a new item and clear the input.
    pub fn submit_input(&mut self) -> bool {
        let text = std::mem::take(&mut self.search);
        let added = self.add_item(&text);
        if !added {
            self.search = text;
        }
        added
    }

    /// Prepend a new active item to the open list.
    pub fn add_item(&mut self, text: &str) -> bool {
        let changed = self.mutate_open_list("add_item", |items, clock| mutation::add_item(items, text, clock));
        if changed {
            self.search.clear();
        }
        changed
    }

    /// Check off or reopen an item. Clears a pending search, as the row moves away.
    pub fn toggle_item(&mut self, id: &ItemId) -> bool {
        let changed = self.mutate_open_list("toggle_item", |items, _| mutation::toggle_item(items, id));
        if changed {
            self.search.clear();
        }
        changed
    }

    /// Replace an item's text; blank text keeps the old one.
    pub fn rename_item(&mut self, id: &ItemId, text: &str) -> bool {
        self.mutate_open_list("rename_item", |items, _| mutation::rename_item(items, id, text))
    }

    /// Remove an item from the open list.
    pub fn delete_item(&mut self, id: &ItemId) -> bool {
        self.mutate_open_list("delete_item", |items, _| mutation::delete_item(items, id))
    }

    /// Remove every checked-off item. Callers confirm with the user first.
    pub fn clear_completed(&mut self) -> bool {
        self.mutate_open_list("clear_completed", |items, _| mutation::clear_completed(items))
    }

    /// Move an active item within the active subsequence of the open list.
    pub fn reorder_item(&mut self, from: usize, to: usize) -> bool {
        self.mutate_open_list("reorder_item", |items, _| mutation::reorder_item(items, from, to))
    }

    /// Start dragging the active row at `index`.
    ///
    /// Refused while searching, outside [`SortMode::Manual`], or for indexes
    /// outside the active items.
    pub fn begin_drag(&mut self, index: usize) -> bool {
        if self.sort != SortMode::Manual || !self.search.is_empty() {
            debug!(index, "Drag unavailable in current view");
            return false;
        }
        self.drag = self
            .current_list()
            .and_then(|list| DragSession::begin(&list.items, index));
        self.drag.is_some()
    }

    /// The pointer entered the active row at `target` while dragging.
    pub fn drag_enter(&mut self, target: usize) -> bool {
        let Some(mut session) = self.drag.take() else {
            return false;
        };
        let changed = self.mutate_open_list("drag_enter", |items, _| session.enter(items, target));
        self.drag = Some(session);
        changed
    }

    /// Gesture finished or was interrupted.
    pub const fn end_drag(&mut self) {
        self.drag = None;
    }

    /// The gesture in progress, if any.
    #[must_use]
    pub const fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    fn enter_list(&mut self, id: ListId) {
        self.open_list = Some(id);
        self.search.clear();
        self.drag = None;
    }

    fn mutate_open_list(&mut self, op: &'static str, f: impl FnOnce(&[Item], &C) -> Mutation) -> bool {
        let Some(list) = self
            .open_list
            .as_ref()
            .and_then(|id| self.collection.get_mut(id))
        else {
            debug!(op, "No open list");
            return false;
        };
        let changed = f(&list.items, &self.clock).apply_to(&mut list.items);
        if changed {
            // Indexes shifted; a drag started before this change points at another row.
            self.drag = None;
        }
        self.finish(op, changed)
    }

    fn finish(&mut self, op: &'static str, changed: bool) -> bool {
        if changed {
            self.persist();
        } else {
            debug!(op, "Ignored mutation with no effect");
        }
        changed
    }

    fn persist(&mut self) {
        self.last_save_ok = self.store.save(&self.collection);
    }
}
