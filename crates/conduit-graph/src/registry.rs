//! The registry of live networks and the id counter.

use crate::network::Network;
use conduit_core::{GraphError, NetworkData, NetworkId};
use indexmap::IndexMap;

/// Owns every live [`Network`] of one manager.
///
/// Ids come from `next_id`, which only ever increases. A removed
/// network's id is gone for good.
#[derive(Clone, Debug)]
pub struct NetworkRegistry<D, N> {
    networks: IndexMap<NetworkId, Network<D, N>>,
    next_id: NetworkId,
}

impl<D, N> Default for NetworkRegistry<D, N> {
    fn default() -> Self {
        Self {
            networks: IndexMap::new(),
            next_id: NetworkId(0),
        }
    }
}

impl<D: NetworkData, N> NetworkRegistry<D, N> {
    /// Create an empty registry whose first id is 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next created network will receive.
    pub fn next_id(&self) -> NetworkId {
        self.next_id
    }

    /// Register a new, empty network with a fresh id.
    pub(crate) fn create(&mut self, data: D) -> Result<NetworkId, GraphError> {
        let id = self.next_id;
        self.next_id = id.checked_next().ok_or(GraphError::IdsExhausted)?;
        self.networks.insert(id, Network::new(id, data));
        Ok(id)
    }

    /// Register a network rebuilt from persisted state, keeping its id.
    pub(crate) fn insert_restored(&mut self, network: Network<D, N>) {
        self.networks.insert(network.id(), network);
    }

    pub(crate) fn set_next_id(&mut self, next: NetworkId) {
        self.next_id = next;
    }

    /// Drop a network from the registry, returning it.
    pub(crate) fn remove(&mut self, id: NetworkId) -> Option<Network<D, N>> {
        self.networks.swap_remove(&id)
    }

    /// Number of live networks.
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    /// Whether no network is live.
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Whether `id` names a live network.
    pub fn contains(&self, id: NetworkId) -> bool {
        self.networks.contains_key(&id)
    }

    /// Look up a live network.
    pub fn get(&self, id: NetworkId) -> Option<&Network<D, N>> {
        self.networks.get(&id)
    }

    /// Look up a live network mutably.
    pub fn get_mut(&mut self, id: NetworkId) -> Option<&mut Network<D, N>> {
        self.networks.get_mut(&id)
    }

    /// Iterate live networks in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Network<D, N>> + '_ {
        self.networks.values()
    }

    /// Iterate live networks mutably in unspecified order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Network<D, N>> + '_ {
        self.networks.values_mut()
    }

    /// Clear every network's tick flag.
    pub fn mark_all_unticked(&mut self) {
        for network in self.networks.values_mut() {
            network.clear_ticked();
        }
    }
}
