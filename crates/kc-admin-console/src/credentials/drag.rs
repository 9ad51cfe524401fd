//! Drag-and-drop state of the credential table.

use super::group::RowKey;

/// Returns `items` with `item` moved to `to_index`.
///
/// Unknown items and out-of-range indexes leave the order unchanged.
#[must_use]
pub fn move_item(items: &[RowKey], item: &RowKey, to_index: usize) -> Vec<RowKey> {
    let mut result = items.to_vec();
    let Some(from_index) = items.iter().position(|i| i == item) else {
        return result;
    };
    if from_index == to_index || to_index >= items.len() {
        return result;
    }
    let moved = result.remove(from_index);
    result.insert(to_index, moved);
    result
}

/// Where a drag gesture is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A row is picked up but not over another row yet.
    Dragging {
        /// Dragged row.
        source: RowKey,
    },
    /// A row is held over a target slot.
    Hovering {
        /// Dragged row.
        source: RowKey,
        /// Slot the row would land in.
        target_index: usize,
        /// Order shown while hovering.
        order: Vec<RowKey>,
    },
}

impl DragState {
    /// Picks up a row. Ignored while another drag is in progress.
    pub fn start(&mut self, source: RowKey) -> bool {
        if matches!(self, Self::Idle) {
            *self = Self::Dragging { source };
            true
        } else {
            false
        }
    }

    /// Hovers the dragged row over the row shown at `target_index`.
    ///
    /// Hovering over the dragged row itself, over the slot already
    /// targeted, or outside the table changes nothing. Returns whether
    /// the tentative order changed.
    pub fn over(&mut self, item_order: &[RowKey], target_index: usize) -> bool {
        let (source, current) = match self {
            Self::Idle => return false,
            Self::Dragging { source } => (source.clone(), None),
            Self::Hovering {
                source,
                target_index,
                ..
            } => (source.clone(), Some(*target_index)),
        };

        if target_index >= item_order.len() || current == Some(target_index) {
            return false;
        }
        if self.order(item_order).get(target_index) == Some(&source) {
            return false;
        }

        let order = move_item(item_order, &source, target_index);
        *self = Self::Hovering {
            source,
            target_index,
            order,
        };
        true
    }

    /// The pointer left the table: drop the tentative order but keep the
    /// row picked up.
    pub fn leave(&mut self) {
        if let Self::Hovering { source, .. } = self {
            *self = Self::Dragging {
                source: source.clone(),
            };
        }
    }

    /// Abandons the drag.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Ends the drag, returning the dragged row and the order it was
    /// dropped into. A drop that never hovered a slot yields the current
    /// order.
    pub fn finish(&mut self, item_order: &[RowKey]) -> Option<(RowKey, Vec<RowKey>)> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Dragging { source } => Some((source, item_order.to_vec())),
            Self::Hovering { source, order, .. } => Some((source, order)),
        }
    }

    /// Order to display.
    #[must_use]
    pub fn order(&self, item_order: &[RowKey]) -> Vec<RowKey> {
        match self {
            Self::Hovering { order, .. } => order.clone(),
            _ => item_order.to_vec(),
        }
    }

    /// Row being dragged.
    #[must_use]
    pub fn source(&self) -> Option<&RowKey> {
        match self {
            Self::Idle => None,
            Self::Dragging { source } | Self::Hovering { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str) -> RowKey {
        RowKey::Credential { id: id.to_string() }
    }

    fn rows(ids: &[&str]) -> Vec<RowKey> {
        ids.iter().map(|id| row(id)).collect()
    }

    #[test]
    fn move_item_reinserts() {
        let items = rows(&["a", "b", "c", "d"]);
        assert_eq!(move_item(&items, &row("a"), 2), rows(&["b", "c", "a", "d"]));
        assert_eq!(move_item(&items, &row("d"), 0), rows(&["d", "a", "b", "c"]));
        assert_eq!(move_item(&items, &row("b"), 1), items);
        assert_eq!(move_item(&items, &row("x"), 1), items);
        assert_eq!(move_item(&items, &row("a"), 9), items);
    }

    #[test]
    fn full_gesture() {
        let items = rows(&["a", "b", "c"]);
        let mut drag = DragState::default();

        assert!(drag.start(row("a")));
        assert!(!drag.start(row("b")));
        assert!(drag.over(&items, 2));
        assert_eq!(drag.order(&items), rows(&["b", "c", "a"]));
        assert!(!drag.over(&items, 2));

        let (source, order) = drag.finish(&items).unwrap();
        assert_eq!(source, row("a"));
        assert_eq!(order, rows(&["b", "c", "a"]));
        assert_eq!(drag, DragState::Idle);
    }

    #[test]
    fn hovering_own_row_is_ignored() {
        let items = rows(&["a", "b", "c"]);
        let mut drag = DragState::default();
        drag.start(row("b"));

        assert!(!drag.over(&items, 1));
        assert!(matches!(drag, DragState::Dragging { .. }));
    }

    #[test]
    fn leave_reverts_order_and_keeps_source() {
        let items = rows(&["a", "b", "c"]);
        let mut drag = DragState::default();
        drag.start(row("c"));
        drag.over(&items, 0);

        drag.leave();

        assert_eq!(drag.order(&items), items);
        assert_eq!(drag.source(), Some(&row("c")));
    }

    #[test]
    fn cancel_and_idle_finish() {
        let items = rows(&["a", "b"]);
        let mut drag = DragState::default();
        assert!(drag.finish(&items).is_none());
        assert!(!drag.over(&items, 0));

        drag.start(row("a"));
        drag.cancel();
        assert_eq!(drag, DragState::Idle);
    }
}
