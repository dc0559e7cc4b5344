//! The network manager: link table, position map, and registry kept in
//! lockstep by `link`, `unlink`, `attach`, and `detach`.
//!
//! # Merge
//!
//! Linking two positions in different networks moves every member of the
//! neighbour's network into the origin's network and drops the
//! neighbour's network. The direction is fixed (neighbour into origin),
//! so the origin's id and payload always survive.
//!
//! # Split
//!
//! Unlinking runs a connectivity search from the origin over the
//! remaining links. Every member it cannot reach moves into one new
//! network holding a clone of the payload. If the cut left three or more
//! fragments, all fragments not containing the origin share that one new
//! network until later unlinks separate them.

use crate::config::{ConfigError, ManagerConfig};
use crate::connectivity::unreachable_members;
use crate::link::LinkTable;
use crate::network::{Network, NodeSlot};
use crate::registry::NetworkRegistry;
use conduit_core::{Direction, DirectionSet, GraphError, NetworkData, NetworkId, NetworkNode, Pos};
use indexmap::IndexMap;
use tracing::{debug, trace};

/// One attached position as persisted: where it is, which network owns
/// it, and which directions are linked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TopologyEntry {
    /// The attached position.
    pub pos: Pos,
    /// The network that owns it.
    pub network: NetworkId,
    /// Directions with a recorded link.
    pub links: DirectionSet,
}

/// Tracks a graph of linked positions and its partition into networks.
///
/// Generic over the payload `D` and the node handle `N`. One manager
/// exists per network type. All methods run to completion with no
/// internal locking; callers serialize access.
///
/// # Examples
///
/// ```
/// use conduit_core::{Direction, NetworkId, Pos};
/// use conduit_graph::{ManagerConfig, NetworkManager};
///
/// let mut mgr: NetworkManager<u32, NetworkId> =
///     NetworkManager::new(ManagerConfig::default()).unwrap();
/// let a = Pos::new(0, 0, 0);
/// let b = a.offset(Direction::East);
/// let na = mgr.attach(None, a, &1).unwrap();
/// mgr.attach(None, b, &1).unwrap();
///
/// assert!(mgr.link(a, Direction::East).unwrap());
/// assert_eq!(mgr.network_count(), 1);
/// assert_eq!(mgr.network_of(b), Some(na));
///
/// assert!(mgr.unlink(b, Direction::West).unwrap());
/// assert_eq!(mgr.network_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct NetworkManager<D, N> {
    pub(crate) config: ManagerConfig,
    pub(crate) links: LinkTable,
    pub(crate) positions: IndexMap<Pos, NetworkId>,
    pub(crate) registry: NetworkRegistry<D, N>,
}

impl<D: NetworkData, N: NetworkNode> NetworkManager<D, N> {
    /// Create an empty manager.
    pub fn new(config: ManagerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let capacity = config.capacity_hint;
        Ok(Self {
            config,
            links: LinkTable::with_capacity(capacity),
            positions: IndexMap::with_capacity(capacity),
            registry: NetworkRegistry::new(),
        })
    }

    /// The configuration this manager was built with.
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Name of the network type this manager holds.
    pub fn network_type(&self) -> &str {
        &self.config.network_type
    }

    fn require(&self, pos: Pos) -> Result<NetworkId, GraphError> {
        self.positions
            .get(&pos)
            .copied()
            .ok_or(GraphError::NotAttached { pos })
    }

    // ── Connectivity ─────────────────────────────────────────────

    /// Link `pos` to its neighbour along `dir`, merging networks if needed.
    ///
    /// Returns `Ok(true)` if a link was created. Returns `Ok(false)` with
    /// no effect if the link already exists, the neighbour is not
    /// attached, or the two payloads differ.
    pub fn link(&mut self, pos: Pos, dir: Direction) -> Result<bool, GraphError> {
        let origin = self.require(pos)?;
        if self.links.has_link(pos, dir) == Some(true) {
            trace!(%pos, %dir, "link already present");
            return Ok(false);
        }
        let other_pos = pos.offset(dir);
        let Some(other) = self.compatible_neighbour(origin, other_pos) else {
            trace!(%pos, %dir, "link not permitted");
            return Ok(false);
        };

        self.links.add(pos, dir);
        if other != origin {
            self.merge_into(origin, other);
        }
        trace!(%pos, %dir, network = %origin, "linked");
        self.verify();
        Ok(true)
    }

    /// Remove the link from `pos` along `dir`, splitting the network if
    /// that disconnected it.
    ///
    /// Returns `Ok(true)` if a link was removed, `Ok(false)` if there was
    /// none.
    pub fn unlink(&mut self, pos: Pos, dir: Direction) -> Result<bool, GraphError> {
        let network = self.require(pos)?;
        if !self.links.remove(pos, dir) {
            trace!(%pos, %dir, "no link to remove");
            return Ok(false);
        }

        let cut = match self.registry.get(network) {
            Some(net) => unreachable_members(&self.links, pos, net.positions()),
            None => Vec::new(),
        };
        if !cut.is_empty() {
            if let Err(e) = self.split_off(network, cut) {
                self.links.add(pos, dir);
                return Err(e);
            }
        }
        trace!(%pos, %dir, %network, "unlinked");
        self.verify();
        Ok(true)
    }

    /// Whether `pos` is linked along `dir`.
    pub fn has_link(&self, pos: Pos, dir: Direction) -> Result<bool, GraphError> {
        self.links
            .has_link(pos, dir)
            .ok_or(GraphError::NotAttached { pos })
    }

    /// Whether a `link(pos, dir)` call would be permitted: the neighbour is
    /// attached and its network's payload equals this one's.
    ///
    /// Does not consider whether the link already exists.
    pub fn can_link(&self, pos: Pos, dir: Direction) -> Result<bool, GraphError> {
        let origin = self.require(pos)?;
        Ok(self.compatible_neighbour(origin, pos.offset(dir)).is_some())
    }

    /// The directions linked at `pos`.
    pub fn links_of(&self, pos: Pos) -> Result<DirectionSet, GraphError> {
        self.links.get(pos).ok_or(GraphError::NotAttached { pos })
    }

    fn compatible_neighbour(&self, origin: NetworkId, other_pos: Pos) -> Option<NetworkId> {
        let other = *self.positions.get(&other_pos)?;
        if other == origin {
            return Some(other);
        }
        let a = self.registry.get(origin)?;
        let b = self.registry.get(other)?;
        (a.data() == b.data()).then_some(other)
    }

    fn merge_into(&mut self, into: NetworkId, absorbed: NetworkId) {
        if !self.registry.contains(into) {
            return;
        }
        let Some(source) = self.registry.remove(absorbed) else {
            return;
        };
        let Some(target) = self.registry.get_mut(into) else {
            return;
        };
        let moved = source.nodes.len();
        for (p, mut slot) in source.nodes {
            if let Some(node) = slot.node_mut() {
                node.set_network(into);
            }
            self.positions.insert(p, into);
            target.nodes.insert(p, slot);
        }
        debug!(%into, %absorbed, moved, size = target.len(), "merged networks");
    }

    fn split_off(&mut self, source: NetworkId, cut: Vec<Pos>) -> Result<NetworkId, GraphError> {
        let Some(data) = self.registry.get(source).map(|n| n.data().clone()) else {
            return Ok(source);
        };
        let fresh = self.registry.create(data)?;

        let slots: Vec<(Pos, NodeSlot<N>)> = match self.registry.get_mut(source) {
            Some(src) => cut
                .into_iter()
                .filter_map(|p| src.nodes.swap_remove(&p).map(|s| (p, s)))
                .collect(),
            None => Vec::new(),
        };
        let moved = slots.len();
        if let Some(dst) = self.registry.get_mut(fresh) {
            for (p, mut slot) in slots {
                if let Some(node) = slot.node_mut() {
                    node.set_network(fresh);
                }
                self.positions.insert(p, fresh);
                dst.nodes.insert(p, slot);
            }
        }
        debug!(%source, %fresh, moved, "split network");
        Ok(fresh)
    }

    // ── Lifecycle ────────────────────────────────────────────────

    /// Attach `pos` as the sole member of a new network with a clone of
    /// `data` as payload.
    ///
    /// `node` may be `None` to attach a position whose node instance is
    /// not in memory. No links are created.
    pub fn attach(&mut self, node: Option<N>, pos: Pos, data: &D) -> Result<NetworkId, GraphError> {
        if let Some(&network) = self.positions.get(&pos) {
            return Err(GraphError::AlreadyAttached { pos, network });
        }
        let id = self.registry.create(data.clone())?;
        let mut slot = NodeSlot::from(node);
        if let Some(n) = slot.node_mut() {
            n.set_network(id);
        }
        if let Some(net) = self.registry.get_mut(id) {
            net.nodes.insert(pos, slot);
        }
        self.positions.insert(pos, id);
        self.links.insert_entry(pos, DirectionSet::empty());
        debug!(%pos, network = %id, "attached");
        self.verify();
        Ok(id)
    }

    /// Remove every link at `pos`, then forget the position.
    ///
    /// Its network is destroyed once it has no members left. Returns the
    /// installed node, if one was loaded.
    ///
    /// Fails with [`GraphError::IdsExhausted`] before touching anything if
    /// fewer ids remain than `pos` has links, since each removed link may
    /// split off a new network.
    pub fn detach(&mut self, pos: Pos) -> Result<Option<N>, GraphError> {
        let linked = self.links_of(pos)?;
        if self.registry.next_id().0.checked_add(linked.len() as u32).is_none() {
            return Err(GraphError::IdsExhausted);
        }
        for dir in linked.iter() {
            self.unlink(pos, dir)?;
        }

        let Some(network) = self.positions.swap_remove(&pos) else {
            return Err(GraphError::NotAttached { pos });
        };
        self.links.remove_entry(pos);
        let mut slot = None;
        let mut destroyed = false;
        if let Some(net) = self.registry.get_mut(network) {
            slot = net.nodes.swap_remove(&pos);
            destroyed = net.is_empty();
        }
        if destroyed {
            self.registry.remove(network);
        }
        debug!(%pos, %network, destroyed, "detached");
        self.verify();
        Ok(slot.and_then(NodeSlot::into_node))
    }

    /// Install a node instance at an already-attached position.
    ///
    /// Sets the node's back-reference and returns the previously installed
    /// node, if the slot was not unloaded. Topology is unchanged.
    pub fn node_loaded(&mut self, mut node: N, pos: Pos) -> Result<Option<N>, GraphError> {
        let id = self.require(pos)?;
        let Some(net) = self.registry.get_mut(id) else {
            return Err(GraphError::NotAttached { pos });
        };
        node.set_network(id);
        let previous = net.nodes.insert(pos, NodeSlot::Loaded(node));
        trace!(%pos, network = %id, "node loaded");
        Ok(previous.and_then(NodeSlot::into_node))
    }

    /// Mark the node instance at `pos` as absent and hand it back.
    ///
    /// The position stays a full member of its network. Topology is
    /// unchanged.
    pub fn node_unloaded(&mut self, pos: Pos) -> Result<Option<N>, GraphError> {
        let id = self.require(pos)?;
        let node = self
            .registry
            .get_mut(id)
            .and_then(|net| net.nodes.get_mut(&pos))
            .and_then(NodeSlot::take);
        trace!(%pos, network = %id, "node unloaded");
        Ok(node)
    }

    /// Clear every network's tick flag. Call once per tick before any
    /// network is processed.
    pub fn mark_all_unticked(&mut self) {
        self.registry.mark_all_unticked();
    }

    // ── Queries ──────────────────────────────────────────────────

    /// Whether `pos` is attached.
    pub fn is_attached(&self, pos: Pos) -> bool {
        self.positions.contains_key(&pos)
    }

    /// The network owning `pos`.
    pub fn network_of(&self, pos: Pos) -> Option<NetworkId> {
        self.positions.get(&pos).copied()
    }

    /// The network owning `pos`, resolved.
    pub fn network_at(&self, pos: Pos) -> Option<&Network<D, N>> {
        self.network_of(pos).and_then(|id| self.registry.get(id))
    }

    /// Look up a live network.
    pub fn network(&self, id: NetworkId) -> Option<&Network<D, N>> {
        self.registry.get(id)
    }

    /// Look up a live network mutably.
    pub fn network_mut(&mut self, id: NetworkId) -> Option<&mut Network<D, N>> {
        self.registry.get_mut(id)
    }

    /// Iterate live networks in unspecified order.
    pub fn networks(&self) -> impl Iterator<Item = &Network<D, N>> + '_ {
        self.registry.iter()
    }

    /// Iterate live networks mutably in unspecified order.
    pub fn networks_mut(&mut self) -> impl Iterator<Item = &mut Network<D, N>> + '_ {
        self.registry.iter_mut()
    }

    /// Number of live networks.
    pub fn network_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of attached positions.
    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    /// The installed node at `pos`, if attached and loaded.
    pub fn node(&self, pos: Pos) -> Option<&N> {
        self.network_at(pos)
            .and_then(|net| net.slot(pos))
            .and_then(NodeSlot::node)
    }

    /// Mutable access to the installed node at `pos`.
    pub fn node_mut(&mut self, pos: Pos) -> Option<&mut N> {
        let id = self.network_of(pos)?;
        self.registry
            .get_mut(id)?
            .nodes
            .get_mut(&pos)
            .and_then(NodeSlot::node_mut)
    }

    /// The id the next created network will receive.
    pub fn next_network_id(&self) -> NetworkId {
        self.registry.next_id()
    }

    /// The link table.
    pub fn link_table(&self) -> &LinkTable {
        &self.links
    }

    /// One entry per attached position, in unspecified order.
    pub fn topology(&self) -> impl Iterator<Item = TopologyEntry> + '_ {
        self.positions.iter().map(|(&pos, &network)| TopologyEntry {
            pos,
            network,
            links: self.links.get(pos).unwrap_or_default(),
        })
    }

    fn verify(&self) {
        if cfg!(debug_assertions) && self.config.verify_consistency {
            let result = self.check_consistency();
            debug_assert!(result.is_ok(), "consistency check failed: {result:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conduit_test_utils::{MockNode, Tier};

    fn manager() -> NetworkManager<Tier, MockNode> {
        NetworkManager::new(ManagerConfig {
            verify_consistency: true,
            ..ManagerConfig::default()
        })
        .unwrap()
    }

    fn p(x: i32, y: i32, z: i32) -> Pos {
        Pos::new(x, y, z)
    }

    #[test]
    fn new_rejects_invalid_config() {
        let result: Result<NetworkManager<Tier, MockNode>, _> =
            NetworkManager::new(ManagerConfig::with_type(""));
        assert!(matches!(result, Err(ConfigError::EmptyNetworkType)));
    }

    #[test]
    fn attach_creates_singleton_and_sets_back_reference() {
        let mut m = manager();
        let id = m.attach(Some(MockNode::new()), p(0, 0, 0), &Tier::Basic).unwrap();
        assert_eq!(m.network_count(), 1);
        assert_eq!(m.node(p(0, 0, 0)).unwrap().network(), Some(id));
        assert_eq!(m.links_of(p(0, 0, 0)), Ok(DirectionSet::empty()));
        assert_eq!(m.next_network_id(), NetworkId(1));
    }

    #[test]
    fn double_attach_is_rejected_without_effect() {
        let mut m = manager();
        let id = m.attach(None, p(0, 0, 0), &Tier::Basic).unwrap();
        let err = m.attach(None, p(0, 0, 0), &Tier::Advanced).unwrap_err();
        assert_eq!(
            err,
            GraphError::AlreadyAttached {
                pos: p(0, 0, 0),
                network: id
            }
        );
        assert_eq!(m.network_count(), 1);
        assert_eq!(m.next_network_id(), NetworkId(1));
        assert_eq!(m.network(id).unwrap().data(), &Tier::Basic);
    }

    #[test]
    fn operations_on_unattached_positions_fail() {
        let mut m = manager();
        let q = p(3, 3, 3);
        let err = GraphError::NotAttached { pos: q };
        assert_eq!(m.link(q, Direction::Up), Err(err.clone()));
        assert_eq!(m.unlink(q, Direction::Up), Err(err.clone()));
        assert_eq!(m.has_link(q, Direction::Up), Err(err.clone()));
        assert_eq!(m.can_link(q, Direction::Up), Err(err.clone()));
        assert_eq!(m.links_of(q), Err(err.clone()));
        assert_eq!(m.detach(q).unwrap_err(), err.clone());
        assert_eq!(m.node_loaded(MockNode::new(), q).unwrap_err(), err.clone());
        assert_eq!(m.node_unloaded(q).unwrap_err(), err);
    }

    #[test]
    fn link_to_missing_neighbour_is_noop() {
        let mut m = manager();
        m.attach(None, p(0, 0, 0), &Tier::Basic).unwrap();
        assert_eq!(m.can_link(p(0, 0, 0), Direction::East), Ok(false));
        assert_eq!(m.link(p(0, 0, 0), Direction::East), Ok(false));
        assert_eq!(m.has_link(p(0, 0, 0), Direction::East), Ok(false));
    }

    #[test]
    fn link_between_incompatible_payloads_is_noop() {
        let mut m = manager();
        m.attach(None, p(0, 0, 0), &Tier::Basic).unwrap();
        m.attach(None, p(1, 0, 0), &Tier::Advanced).unwrap();
        assert_eq!(m.can_link(p(0, 0, 0), Direction::East), Ok(false));
        assert_eq!(m.link(p(0, 0, 0), Direction::East), Ok(false));
        assert_eq!(m.network_count(), 2);
    }

    #[test]
    fn merge_keeps_origin_identity_and_retargets_nodes() {
        let mut m = manager();
        let a = m.attach(Some(MockNode::new()), p(0, 0, 0), &Tier::Basic).unwrap();
        let b = m.attach(Some(MockNode::new()), p(1, 0, 0), &Tier::Basic).unwrap();
        assert!(m.link(p(1, 0, 0), Direction::West).unwrap());
        // Origin was (1,0,0), so its network b survives.
        assert_eq!(m.network_count(), 1);
        assert!(m.network(a).is_none());
        assert_eq!(m.network_of(p(0, 0, 0)), Some(b));
        let node = m.node(p(0, 0, 0)).unwrap();
        assert_eq!(node.network(), Some(b));
        assert_eq!(node.history(), &[a, b]);
    }

    #[test]
    fn link_twice_is_idempotent() {
        let mut m = manager();
        m.attach(None, p(0, 0, 0), &Tier::Basic).unwrap();
        m.attach(None, p(0, 1, 0), &Tier::Basic).unwrap();
        assert_eq!(m.link(p(0, 0, 0), Direction::Up), Ok(true));
        assert_eq!(m.link(p(0, 0, 0), Direction::Up), Ok(false));
        assert_eq!(m.link(p(0, 1, 0), Direction::Down), Ok(false));
        assert_eq!(m.network_count(), 1);
        assert_eq!(m.next_network_id(), NetworkId(2));
    }

    #[test]
    fn unlink_missing_link_is_noop() {
        let mut m = manager();
        m.attach(None, p(0, 0, 0), &Tier::Basic).unwrap();
        assert_eq!(m.unlink(p(0, 0, 0), Direction::South), Ok(false));
        assert_eq!(m.network_count(), 1);
        assert_eq!(m.next_network_id(), NetworkId(1));
    }

    #[test]
    fn split_clones_payload_into_fresh_network() {
        let mut m = manager();
        m.attach(Some(MockNode::new()), p(0, 0, 0), &Tier::Basic).unwrap();
        m.attach(Some(MockNode::new()), p(1, 0, 0), &Tier::Basic).unwrap();
        m.link(p(0, 0, 0), Direction::East).unwrap();
        let before = m.network_of(p(0, 0, 0)).unwrap();

        m.unlink(p(0, 0, 0), Direction::East).unwrap();
        let fresh = m.network_of(p(1, 0, 0)).unwrap();
        assert_eq!(m.network_of(p(0, 0, 0)), Some(before));
        assert!(fresh > before);
        assert_eq!(fresh, NetworkId(2));
        assert_eq!(m.network(fresh).unwrap().data(), &Tier::Basic);
        assert_eq!(m.node(p(1, 0, 0)).unwrap().network(), Some(fresh));
    }

    #[test]
    fn split_with_exhausted_ids_restores_link() {
        let mut m = manager();
        m.attach(None, p(0, 0, 0), &Tier::Basic).unwrap();
        m.attach(None, p(1, 0, 0), &Tier::Basic).unwrap();
        m.link(p(0, 0, 0), Direction::East).unwrap();
        m.registry.set_next_id(NetworkId(u32::MAX));

        assert_eq!(m.unlink(p(0, 0, 0), Direction::East), Err(GraphError::IdsExhausted));
        assert_eq!(m.has_link(p(0, 0, 0), Direction::East), Ok(true));
        assert_eq!(m.network_count(), 1);
        assert_eq!(m.check_consistency(), Ok(()));
    }

    #[test]
    fn unloaded_members_still_conduct() {
        let mut m = manager();
        for x in 0..3 {
            m.attach(Some(MockNode::new()), p(x, 0, 0), &Tier::Basic).unwrap();
        }
        m.link(p(0, 0, 0), Direction::East).unwrap();
        m.link(p(1, 0, 0), Direction::East).unwrap();
        let middle = m.node_unloaded(p(1, 0, 0)).unwrap();
        assert!(middle.is_some());
        assert!(m.node(p(1, 0, 0)).is_none());
        assert!(m.is_attached(p(1, 0, 0)));

        assert_eq!(m.network_count(), 1);
        m.unlink(p(1, 0, 0), Direction::East).unwrap();
        assert_eq!(m.network_count(), 2);
        assert_eq!(m.network_of(p(0, 0, 0)), m.network_of(p(1, 0, 0)));
        assert_ne!(m.network_of(p(1, 0, 0)), m.network_of(p(2, 0, 0)));
    }

    #[test]
    fn node_loaded_replaces_tombstone_and_sets_network() {
        let mut m = manager();
        let id = m.attach(None, p(0, 0, 0), &Tier::Basic).unwrap();
        assert!(m.node(p(0, 0, 0)).is_none());
        let previous = m.node_loaded(MockNode::new(), p(0, 0, 0)).unwrap();
        assert!(previous.is_none());
        assert_eq!(m.node(p(0, 0, 0)).unwrap().network(), Some(id));

        let replaced = m.node_loaded(MockNode::new(), p(0, 0, 0)).unwrap();
        assert!(replaced.is_some());
    }

    #[test]
    fn node_mut_reaches_installed_node() {
        let mut m = manager();
        m.attach(Some(MockNode::new()), p(0, 0, 0), &Tier::Basic).unwrap();
        m.node_mut(p(0, 0, 0)).unwrap().label = "valve".to_string();
        assert_eq!(m.node(p(0, 0, 0)).unwrap().label, "valve");
        assert!(m.node_mut(p(9, 9, 9)).is_none());
    }

    #[test]
    fn detach_singleton_destroys_network_and_returns_node() {
        let mut m = manager();
        let id = m.attach(Some(MockNode::new()), p(0, 0, 0), &Tier::Basic).unwrap();
        let node = m.detach(p(0, 0, 0)).unwrap();
        assert_eq!(node.unwrap().network(), Some(id));
        assert_eq!(m.network_count(), 0);
        assert_eq!(m.node_count(), 0);
        assert!(!m.is_attached(p(0, 0, 0)));
        assert_eq!(m.next_network_id(), NetworkId(1));
    }

    #[test]
    fn detach_middle_of_line_splits_remainder() {
        let mut m = manager();
        for x in 0..3 {
            m.attach(None, p(x, 0, 0), &Tier::Basic).unwrap();
        }
        m.link(p(0, 0, 0), Direction::East).unwrap();
        m.link(p(1, 0, 0), Direction::East).unwrap();
        assert_eq!(m.detach(p(1, 0, 0)), Ok(None));
        assert_eq!(m.network_count(), 2);
        assert_ne!(m.network_of(p(0, 0, 0)), m.network_of(p(2, 0, 0)));
        assert_eq!(m.has_link(p(0, 0, 0), Direction::East), Ok(false));
        assert_eq!(m.has_link(p(2, 0, 0), Direction::West), Ok(false));
    }

    #[test]
    fn mark_all_unticked_resets_flags() {
        let mut m = manager();
        let a = m.attach(None, p(0, 0, 0), &Tier::Basic).unwrap();
        let b = m.attach(None, p(5, 0, 0), &Tier::Basic).unwrap();
        for net in m.networks_mut() {
            assert!(net.mark_ticked());
        }
        m.mark_all_unticked();
        assert!(!m.network(a).unwrap().is_ticked());
        assert!(!m.network(b).unwrap().is_ticked());
    }

    #[test]
    fn topology_reports_every_position() {
        let mut m = manager();
        m.attach(None, p(0, 0, 0), &Tier::Basic).unwrap();
        m.attach(None, p(0, 0, 1), &Tier::Basic).unwrap();
        m.link(p(0, 0, 0), Direction::South).unwrap();
        let mut entries: Vec<TopologyEntry> = m.topology().collect();
        entries.sort_by_key(|e| e.pos);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].links, [Direction::South].into_iter().collect::<DirectionSet>());
        assert_eq!(entries[1].links, [Direction::North].into_iter().collect::<DirectionSet>());
        assert_eq!(entries[0].network, entries[1].network);
    }

    #[test]
    fn network_type_comes_from_config() {
        let m: NetworkManager<Tier, MockNode> =
            NetworkManager::new(ManagerConfig::with_type("conduit:fluid")).unwrap();
        assert_eq!(m.network_type(), "conduit:fluid");
    }
}
