//! Disjoint-set forest over arbitrary hashable elements.
//!
//! One implementation, path compression plus union by rank, shared by
//! the action-position and fluent-position sort inference entry points.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A union-find structure over elements of type `T`.
///
/// Elements are registered with [`UnionFind::insert`] and remembered in
/// insertion order, which callers use for deterministic class
/// numbering.
#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    index: FxHashMap<T, usize>,
    items: Vec<T>,
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl<T: Eq + Hash + Clone> Default for UnionFind<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> UnionFind<T> {
    /// Create an empty structure.
    pub fn new() -> Self {
        Self {
            index: FxHashMap::default(),
            items: Vec::new(),
            parent: Vec::new(),
            rank: Vec::new(),
        }
    }

    /// Register an element, returning its insertion index.
    ///
    /// Re-inserting an existing element is a no-op returning the
    /// original index.
    pub fn insert(&mut self, item: T) -> usize {
        if let Some(&i) = self.index.get(&item) {
            return i;
        }
        let i = self.items.len();
        self.index.insert(item.clone(), i);
        self.items.push(item);
        self.parent.push(i);
        self.rank.push(0);
        i
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no elements are registered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find the representative index of an element, inserting it if new.
    pub fn find(&mut self, item: &T) -> usize {
        let i = match self.index.get(item) {
            Some(&i) => i,
            None => self.insert(item.clone()),
        };
        self.find_root(i)
    }

    /// Union the classes of two elements, inserting either if new.
    pub fn union(&mut self, a: &T, b: &T) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        // Union by rank keeps the forest shallow.
        if self.rank[ra] < self.rank[rb] {
            self.parent[ra] = rb;
        } else if self.rank[ra] > self.rank[rb] {
            self.parent[rb] = ra;
        } else {
            self.parent[rb] = ra;
            self.rank[ra] += 1;
        }
    }

    /// Whether two elements are currently in the same class.
    pub fn same_class(&mut self, a: &T, b: &T) -> bool {
        self.find(a) == self.find(b)
    }

    /// Iterate elements in insertion order together with their root
    /// index, after full path compression.
    pub fn members(&mut self) -> impl Iterator<Item = (&T, usize)> {
        for i in 0..self.parent.len() {
            self.find_root(i);
        }
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (item, self.parent[i]))
    }

    fn find_root(&mut self, mut i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression: point everything on the walk at the root.
        while self.parent[i] != root {
            let next = self.parent[i];
            self.parent[i] = root;
            i = next;
        }
        root
    }
}
