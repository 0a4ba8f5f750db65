// SPDX-License-Identifier: Unlicense
//! Append-only node storage addressed by stable integer handles.

use std::ops::Index;

pub use id_arena::Id;

/// An append-only arena of syntax nodes.
///
/// Nodes refer to each other by [`Id`], never by reference. There is no way
/// to remove or mutate a node once added, so every handle returned by
/// [`SyntaxArena::add`] keeps pointing at the same node for the arena's
/// lifetime. Handles remember which arena issued them: [`SyntaxArena::get`]
/// returns `None` for a handle from a different arena, and indexing with one
/// panics.
#[derive(Debug)]
pub struct SyntaxArena<T> {
    nodes: id_arena::Arena<T>,
}

impl<T> SyntaxArena<T> {
    pub fn new() -> Self {
        Self {
            nodes: id_arena::Arena::new(),
        }
    }

    /// Appends `node` and returns its handle.
    pub fn add(&mut self, node: T) -> Id<T> {
        self.nodes.alloc(node)
    }

    pub fn get(&self, id: Id<T>) -> Option<&T> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Id<T>, &T)> {
        self.nodes.iter()
    }
}

impl<T> Default for SyntaxArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<Id<T>> for SyntaxArena<T> {
    type Output = T;

    fn index(&self, id: Id<T>) -> &T {
        &self.nodes[id]
    }
}
