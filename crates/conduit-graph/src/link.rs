//! The link table: per-position sets of linked directions.
//!
//! A [`LinkTable`] is the adjacency representation of the graph. Every
//! attached position has an entry (possibly empty), and links are always
//! stored as symmetric pairs: `p -> d` is present exactly when
//! `p.offset(d) -> d.opposite()` is.

use conduit_core::{Direction, DirectionSet, Pos};
use indexmap::IndexMap;

/// Adjacency of every attached position.
#[derive(Clone, Debug, Default)]
pub struct LinkTable {
    entries: IndexMap<Pos, DirectionSet>,
}

impl LinkTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table presized for `capacity` positions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Number of positions with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `pos` has an entry.
    pub fn contains(&self, pos: Pos) -> bool {
        self.entries.contains_key(&pos)
    }

    /// Linked directions at `pos`, or `None` if `pos` has no entry.
    pub fn get(&self, pos: Pos) -> Option<DirectionSet> {
        self.entries.get(&pos).copied()
    }

    /// Whether `pos -> dir` is linked. `None` if `pos` has no entry.
    pub fn has_link(&self, pos: Pos, dir: Direction) -> Option<bool> {
        self.get(pos).map(|set| set.contains(dir))
    }

    /// Create an empty entry for `pos`, replacing any existing one.
    pub(crate) fn insert_entry(&mut self, pos: Pos, links: DirectionSet) {
        self.entries.insert(pos, links);
    }

    /// Remove the entry for `pos`, returning its links.
    pub(crate) fn remove_entry(&mut self, pos: Pos) -> Option<DirectionSet> {
        self.entries.swap_remove(&pos)
    }

    /// Record the pair `pos -> dir` and its reverse.
    ///
    /// Both endpoints must have entries. Returns `false` and changes
    /// nothing if either is missing.
    pub(crate) fn add(&mut self, pos: Pos, dir: Direction) -> bool {
        let other = pos.offset(dir);
        if !self.contains(pos) || !self.contains(other) {
            return false;
        }
        if let Some(set) = self.entries.get_mut(&pos) {
            set.insert(dir);
        }
        if let Some(set) = self.entries.get_mut(&other) {
            set.insert(dir.opposite());
        }
        true
    }

    /// Remove the pair `pos -> dir` and its reverse.
    ///
    /// Returns `false` if `pos -> dir` was not linked.
    pub(crate) fn remove(&mut self, pos: Pos, dir: Direction) -> bool {
        let removed = match self.entries.get_mut(&pos) {
            Some(set) => set.remove(dir),
            None => false,
        };
        if removed {
            if let Some(set) = self.entries.get_mut(&pos.offset(dir)) {
                set.remove(dir.opposite());
            }
        }
        removed
    }

    /// Iterate `(position, links)` in insertion order (perturbed by removals).
    pub fn iter(&self) -> impl Iterator<Item = (Pos, DirectionSet)> + '_ {
        self.entries.iter().map(|(&p, &set)| (p, set))
    }

    /// Iterate the far ends of every link at `pos`.
    pub fn linked_neighbours(&self, pos: Pos) -> impl Iterator<Item = Pos> {
        self.get(pos)
            .unwrap_or_default()
            .iter()
            .map(move |d| pos.offset(d))
    }
}
