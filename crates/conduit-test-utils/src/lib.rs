//! Test utilities and mock types for Conduit development.
//!
//! Provides a recording [`MockNode`] and two payload types with
//! [`PayloadCodec`] implementations: the single-byte [`Tier`] and the
//! variable-length [`FluidData`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod payload;

pub use payload::{FluidData, Tier};

use conduit_core::{NetworkId, NetworkNode};

/// Node handle that records every back-reference write.
///
/// `history` lists each network id the manager assigned, oldest first,
/// so tests can assert both the current owner and how it got there.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MockNode {
    pub label: String,
    history: Vec<NetworkId>,
}

impl MockNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            history: Vec::new(),
        }
    }

    /// The most recently assigned network.
    pub fn network(&self) -> Option<NetworkId> {
        self.history.last().copied()
    }

    pub fn history(&self) -> &[NetworkId] {
        &self.history
    }
}

impl NetworkNode for MockNode {
    fn set_network(&mut self, network: NetworkId) {
        self.history.push(network);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_node_records_assignments() {
        let mut n = MockNode::labelled("pump");
        assert_eq!(n.network(), None);
        n.set_network(NetworkId(2));
        n.set_network(NetworkId(7));
        assert_eq!(n.network(), Some(NetworkId(7)));
        assert_eq!(n.history(), &[NetworkId(2), NetworkId(7)]);
        assert_eq!(n.label, "pump");
    }
}
