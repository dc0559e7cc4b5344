//! Whole-state invariant checking.
//!
//! The checks are independent of how the state was produced, so the same
//! routine validates live managers (from tests and the
//! `verify_consistency` debug hook) and freshly restored ones.

use crate::manager::NetworkManager;
use conduit_core::{InvariantViolation, NetworkData, NetworkNode};

impl<D: NetworkData, N: NetworkNode> NetworkManager<D, N> {
    /// Verify every structural invariant of the manager.
    ///
    /// Checks, in order, and reports the first failure:
    ///
    /// 1. The link table and the position map have the same key set.
    /// 2. Every link has its reverse at the far end.
    /// 3. Linked positions belong to the same network.
    /// 4. Every position maps to a registered network that lists it.
    /// 5. Every network member maps back to that network.
    /// 6. No registered network is empty, and every id is below the
    ///    counter.
    ///
    /// Networks are not required to be exactly the connected components
    /// of the link graph: a cut that leaves three or more fragments puts
    /// all fragments away from the cut's origin into one network.
    ///
    /// Runs in time linear in the number of positions and networks.
    pub fn check_consistency(&self) -> Result<(), InvariantViolation> {
        for (pos, _) in self.links.iter() {
            if !self.positions.contains_key(&pos) {
                return Err(InvariantViolation::KeySetMismatch { pos });
            }
        }
        for &pos in self.positions.keys() {
            if !self.links.contains(pos) {
                return Err(InvariantViolation::KeySetMismatch { pos });
            }
        }

        for (pos, set) in self.links.iter() {
            for dir in set.iter() {
                let other = pos.offset(dir);
                if self.links.has_link(other, dir.opposite()) != Some(true) {
                    return Err(InvariantViolation::AsymmetricLink { pos, dir });
                }
                let from = self.positions.get(&pos).copied();
                let to = self.positions.get(&other).copied();
                if let (Some(from), Some(to)) = (from, to) {
                    if from != to {
                        return Err(InvariantViolation::CrossNetworkLink { pos, dir, from, to });
                    }
                }
            }
        }

        for (&pos, &network) in &self.positions {
            let Some(net) = self.registry.get(network) else {
                return Err(InvariantViolation::DanglingNetwork { pos, network });
            };
            if !net.contains(pos) {
                return Err(InvariantViolation::MembershipMismatch { network, pos });
            }
        }

        let next = self.registry.next_id();
        for net in self.registry.iter() {
            let network = net.id();
            if net.is_empty() {
                return Err(InvariantViolation::EmptyNetwork { network });
            }
            if network >= next {
                return Err(InvariantViolation::IdNotBelowNext { network, next });
            }
            for pos in net.positions() {
                if self.positions.get(&pos) != Some(&network) {
                    return Err(InvariantViolation::MembershipMismatch { network, pos });
                }
            }
        }
        Ok(())
    }
}
