//! Rebuilding a manager from persisted parts.

use crate::link::LinkTable;
use crate::manager::{NetworkManager, TopologyEntry};
use crate::network::{Network, NodeSlot};
use crate::registry::NetworkRegistry;
use conduit_core::{NetworkData, NetworkId, NetworkNode, RestoreError};
use indexmap::IndexMap;
use tracing::debug;

impl<D: NetworkData, N: NetworkNode> NetworkManager<D, N> {
    /// Replace this manager's state with the given networks, topology
    /// entries, and id counter.
    ///
    /// Every restored position starts unloaded; install node instances
    /// afterwards with [`node_loaded`](Self::node_loaded). Tick flags start
    /// cleared. The assembled state must pass
    /// [`check_consistency`](Self::check_consistency).
    ///
    /// On error the manager is left exactly as it was.
    pub fn restore<I, T>(
        &mut self,
        networks: I,
        topology: T,
        next_id: NetworkId,
    ) -> Result<(), RestoreError>
    where
        I: IntoIterator<Item = (NetworkId, D)>,
        T: IntoIterator<Item = TopologyEntry>,
    {
        let mut registry = NetworkRegistry::new();
        for (id, data) in networks {
            if registry.contains(id) {
                return Err(RestoreError::DuplicateNetwork { network: id });
            }
            registry.insert_restored(Network::new(id, data));
        }
        registry.set_next_id(next_id);

        let capacity = self.config.capacity_hint;
        let mut links = LinkTable::with_capacity(capacity);
        let mut positions = IndexMap::with_capacity(capacity);
        for TopologyEntry { pos, network, links: set } in topology {
            let Some(net) = registry.get_mut(network) else {
                return Err(RestoreError::UnknownNetwork { pos, network });
            };
            if positions.insert(pos, network).is_some() {
                return Err(RestoreError::DuplicatePosition { pos });
            }
            net.nodes.insert(pos, NodeSlot::Unloaded);
            links.insert_entry(pos, set);
        }

        let restored = Self {
            config: self.config.clone(),
            links,
            positions,
            registry,
        };
        restored.check_consistency()?;
        debug!(
            networks = restored.network_count(),
            positions = restored.node_count(),
            next_id = %next_id,
            "restored manager"
        );
        *self = restored;
        Ok(())
    }
}
