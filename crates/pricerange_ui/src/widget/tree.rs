//! Widget tree: element hierarchy, hit testing and bubbling paths.

use super::{WidgetId, WidgetState};
use std::collections::HashMap;

/// Manages the widget hierarchy.
#[derive(Debug)]
pub struct WidgetTree {
    /// Widget states indexed by ID.
    widgets: HashMap<WidgetId, WidgetState>,
    /// Root widget IDs.
    roots: Vec<WidgetId>,
    /// Parent-child relationships, children in insertion (paint) order.
    children: HashMap<WidgetId, Vec<WidgetId>>,
    /// ID counter for generating unique IDs.
    next_id: u64,
}

impl WidgetTree {
    /// Creates a new empty widget tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            widgets: HashMap::with_capacity(64),
            roots: Vec::with_capacity(4),
            children: HashMap::with_capacity(64),
            next_id: 1,
        }
    }

    /// Generates a new unique widget ID.
    pub fn next_id(&mut self) -> WidgetId {
        let id = WidgetId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Registers a root widget.
    pub fn add_root(&mut self, state: WidgetState) {
        let id = state.id;
        self.widgets.insert(id, state);
        self.roots.push(id);
        self.children.insert(id, Vec::new());
    }

    /// Adds a child widget to a parent, painted above its earlier siblings.
    pub fn add_child(&mut self, parent: WidgetId, mut state: WidgetState) {
        let id = state.id;
        state.parent = Some(parent);

        self.widgets.insert(id, state);
        self.children.entry(parent).or_default().push(id);
        self.children.insert(id, Vec::new());
    }

    /// Removes a widget and all its children.
    pub fn remove(&mut self, id: WidgetId) {
        if let Some(children) = self.children.remove(&id) {
            for child in children {
                self.remove(child);
            }
        }

        if let Some(parent) = self.widgets.get(&id).and_then(|s| s.parent) {
            if let Some(siblings) = self.children.get_mut(&parent) {
                siblings.retain(|&c| c != id);
            }
        }

        self.roots.retain(|&r| r != id);
        self.widgets.remove(&id);
    }

    /// Returns true if the widget exists.
    #[must_use]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(&id)
    }

    /// Gets a widget state by ID.
    #[must_use]
    pub fn get(&self, id: WidgetId) -> Option<&WidgetState> {
        self.widgets.get(&id)
    }

    /// Gets mutable access to a widget state.
    #[must_use]
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut WidgetState> {
        self.widgets.get_mut(&id)
    }

    /// Returns the parent of a widget.
    #[must_use]
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.widgets.get(&id).and_then(|s| s.parent)
    }

    /// Returns the children of a widget.
    #[must_use]
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.children.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Returns the widget followed by its ancestors up to the root.
    ///
    /// This is the bubbling path of an event dispatched on `id`.
    pub fn ancestors(&self, id: WidgetId) -> impl Iterator<Item = WidgetId> + '_ {
        let start = self.contains(id).then_some(id);
        std::iter::successors(start, move |&current| self.parent(current))
    }

    /// Returns all widget IDs in depth-first order.
    pub fn iter_dfs(&self) -> impl Iterator<Item = WidgetId> + '_ {
        WidgetDfsIterator {
            tree: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    /// Returns `id` and everything below it in depth-first order.
    pub fn descendants(&self, id: WidgetId) -> impl Iterator<Item = WidgetId> + '_ {
        WidgetDfsIterator {
            tree: self,
            stack: if self.contains(id) { vec![id] } else { Vec::new() },
        }
    }

    /// Returns all widget IDs in reverse depth-first order (topmost first).
    pub fn iter_reverse(&self) -> impl Iterator<Item = WidgetId> + '_ {
        let all: Vec<_> = self.iter_dfs().collect();
        all.into_iter().rev()
    }

    /// Returns the topmost visible widget containing the point.
    #[must_use]
    pub fn hit_test(&self, x: f32, y: f32) -> Option<WidgetId> {
        self.iter_reverse().find(|id| {
            self.widgets
                .get(id)
                .is_some_and(|s| s.is_visible() && s.rect.contains(x, y))
        })
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first iterator over widget tree.
struct WidgetDfsIterator<'a> {
    tree: &'a WidgetTree,
    stack: Vec<WidgetId>,
}

impl Iterator for WidgetDfsIterator<'_> {
    type Item = WidgetId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;

        // Push children in reverse order so they're processed left-to-right
        if let Some(children) = self.tree.children.get(&id) {
            for &child in children.iter().rev() {
                self.stack.push(child);
            }
        }

        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;

    fn sample() -> (WidgetTree, WidgetId, WidgetId, WidgetId) {
        let mut tree = WidgetTree::new();

        let root = tree.next_id();
        tree.add_root(WidgetState::with_rect(root, Rect::new(0.0, 0.0, 400.0, 100.0)));

        let track = tree.next_id();
        tree.add_child(root, WidgetState::with_rect(track, Rect::new(0.0, 40.0, 400.0, 20.0)));

        let handle = tree.next_id();
        tree.add_child(track, WidgetState::with_rect(handle, Rect::new(90.0, 40.0, 20.0, 20.0)));

        (tree, root, track, handle)
    }

    #[test]
    fn test_tree_hierarchy() {
        let (tree, root, track, handle) = sample();

        assert_eq!(tree.children(root), &[track]);
        assert_eq!(tree.ancestors(handle).collect::<Vec<_>>(), vec![handle, track, root]);
        assert_eq!(tree.descendants(track).collect::<Vec<_>>(), vec![track, handle]);
    }

    #[test]
    fn test_hit_test_topmost() {
        let (tree, root, track, handle) = sample();

        assert_eq!(tree.hit_test(100.0, 50.0), Some(handle));
        assert_eq!(tree.hit_test(300.0, 50.0), Some(track));
        assert_eq!(tree.hit_test(300.0, 10.0), Some(root));
        assert_eq!(tree.hit_test(500.0, 10.0), None);
    }

    #[test]
    fn test_remove_subtree() {
        let (mut tree, root, track, handle) = sample();

        tree.remove(track);

        assert!(!tree.contains(track));
        assert!(!tree.contains(handle));
        assert!(tree.children(root).is_empty());
        assert_eq!(tree.ancestors(handle).count(), 0);
    }
}
