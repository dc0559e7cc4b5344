//! Networks and their member slots.

use conduit_core::{NetworkData, NetworkId, Pos};
use indexmap::IndexMap;

/// The member-map value for one position of a network.
///
/// A position that is not a member has no slot at all; `Unloaded` is the
/// distinct state "member whose node instance is not in memory". Unloaded
/// members take part in connectivity exactly like loaded ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeSlot<N> {
    /// The node instance is installed.
    Loaded(N),
    /// The position is a member but its node instance is absent.
    Unloaded,
}

impl<N> NodeSlot<N> {
    /// Whether a node instance is installed.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// The installed node, if any.
    pub fn node(&self) -> Option<&N> {
        match self {
            Self::Loaded(n) => Some(n),
            Self::Unloaded => None,
        }
    }

    /// Mutable access to the installed node, if any.
    pub fn node_mut(&mut self) -> Option<&mut N> {
        match self {
            Self::Loaded(n) => Some(n),
            Self::Unloaded => None,
        }
    }

    /// Take the installed node out, leaving the slot unloaded.
    pub fn take(&mut self) -> Option<N> {
        match std::mem::replace(self, Self::Unloaded) {
            Self::Loaded(n) => Some(n),
            Self::Unloaded => None,
        }
    }

    /// Convert into the installed node, if any.
    pub fn into_node(self) -> Option<N> {
        match self {
            Self::Loaded(n) => Some(n),
            Self::Unloaded => None,
        }
    }
}

impl<N> From<Option<N>> for NodeSlot<N> {
    fn from(node: Option<N>) -> Self {
        match node {
            Some(n) => Self::Loaded(n),
            None => Self::Unloaded,
        }
    }
}

/// One connected group of positions sharing a payload.
///
/// Networks are owned by the manager's registry. Callers get shared or
/// mutable references to read members, edit the payload, or set the
/// tick flag, but membership only changes through the manager.
#[derive(Clone, Debug)]
pub struct Network<D, N> {
    id: NetworkId,
    data: D,
    pub(crate) nodes: IndexMap<Pos, NodeSlot<N>>,
    ticked: bool,
}

impl<D: NetworkData, N> Network<D, N> {
    /// Create an empty network with the given id and payload.
    pub fn new(id: NetworkId, data: D) -> Self {
        Self {
            id,
            data,
            nodes: IndexMap::new(),
            ticked: false,
        }
    }

    /// The network's id.
    pub fn id(&self) -> NetworkId {
        self.id
    }

    /// The payload.
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Mutable access to the payload.
    ///
    /// Changing the payload changes which neighbours this network may
    /// link with from now on; existing links are not revisited.
    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    /// Number of member positions, loaded or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the network has no members.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `pos` is a member.
    pub fn contains(&self, pos: Pos) -> bool {
        self.nodes.contains_key(&pos)
    }

    /// The slot at `pos`, or `None` if `pos` is not a member.
    pub fn slot(&self, pos: Pos) -> Option<&NodeSlot<N>> {
        self.nodes.get(&pos)
    }

    /// Member positions in unspecified order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.nodes.keys().copied()
    }

    /// Iterate the installed nodes.
    pub fn loaded_nodes(&self) -> impl Iterator<Item = (Pos, &N)> + '_ {
        self.nodes
            .iter()
            .filter_map(|(&p, s)| s.node().map(|n| (p, n)))
    }

    /// Iterate the installed nodes mutably.
    pub fn loaded_nodes_mut(&mut self) -> impl Iterator<Item = (Pos, &mut N)> + '_ {
        self.nodes
            .iter_mut()
            .filter_map(|(&p, s)| s.node_mut().map(|n| (p, n)))
    }

    /// Number of members whose node is installed.
    pub fn loaded_count(&self) -> usize {
        self.nodes.values().filter(|s| s.is_loaded()).count()
    }

    /// Whether this network has been processed in the current tick.
    pub fn is_ticked(&self) -> bool {
        self.ticked
    }

    /// Mark the network as processed for the current tick.
    ///
    /// Returns `true` if it was not already marked, so a scheduler can
    /// write `if network.mark_ticked() { process(network) }`.
    pub fn mark_ticked(&mut self) -> bool {
        !std::mem::replace(&mut self.ticked, true)
    }

    pub(crate) fn clear_ticked(&mut self) {
        self.ticked = false;
    }
}
