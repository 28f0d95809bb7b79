use crate::Item;
use crate::mutation::{self, Mutation};

/// In-progress drag of an active item.
///
/// Lives for a single gesture. Owners hold it as `Option<DragSession>` and
/// drop it when the gesture ends or is interrupted; it is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    index: usize,
}

impl DragSession {
    /// Start dragging the active item at `index`. Returns `None` when the index
    /// does not point into the active subsequence.
    #[must_use]
    pub fn begin(items: &[Item], index: usize) -> Option<Self> {
        (index < mutation::active_len(items)).then_some(Self { index })
    }

    /// Active index of the dragged item.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The pointer moved over the active row at `target`: move the dragged item there.
    pub fn enter(&mut self, items: &[Item], target: usize) -> Mutation {
        let result = mutation::reorder_item(items, self.index, target);
        if result.is_changed() {
            self.index = target;
        }
        result
    }
}
