//! Strongly-typed network identifiers.

use std::fmt;

/// Identifies a network within one manager.
///
/// Ids are assigned from a per-manager counter that only ever increases,
/// so an id is never reused, even after the network it named has been
/// absorbed by a merge or destroyed by a detach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkId(pub u32);

impl NetworkId {
    /// The id that follows this one.
    ///
    /// Returns `None` when the id space is exhausted.
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NetworkId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
