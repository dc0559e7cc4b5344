//! Collaborator traits a network manager is parameterized over.

use crate::error::PayloadError;
use crate::id::NetworkId;
use std::fmt::Debug;

/// Per-network payload.
///
/// Equality decides whether two networks may be linked: a link is only
/// created between positions whose networks carry equal payloads. `clone`
/// is the deep copy taken when a network is created at attach time and
/// when a split hands the detached fragment a payload of its own.
///
/// Blanket-implemented for every `Clone + PartialEq + Debug` type.
pub trait NetworkData: Clone + PartialEq + Debug {}

impl<T: Clone + PartialEq + Debug> NetworkData for T {}

/// An in-memory node instance occupying one attached position.
///
/// The manager owns installed handles and writes their back-reference
/// whenever the owning network changes: on attach, merge, split, and
/// load. Implementors store the id and never change it themselves.
pub trait NetworkNode {
    /// Record the network that now owns this node.
    fn set_network(&mut self, network: NetworkId);
}

impl NetworkNode for NetworkId {
    fn set_network(&mut self, network: NetworkId) {
        *self = network;
    }
}

impl<T: NetworkNode + ?Sized> NetworkNode for Box<T> {
    fn set_network(&mut self, network: NetworkId) {
        (**self).set_network(network);
    }
}

/// Binary encoding of a payload for persistence.
///
/// The codec treats the encoded bytes as opaque; it only stores them
/// length-prefixed next to the owning network's id.
pub trait PayloadCodec: Sized {
    /// Append the encoded payload to `buf`.
    fn encode_payload(&self, buf: &mut Vec<u8>);

    /// Decode a payload from exactly the bytes `encode_payload` produced.
    fn decode_payload(bytes: &[u8]) -> Result<Self, PayloadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_network_id_tracks_owner() {
        let mut node = NetworkId(0);
        node.set_network(NetworkId(4));
        assert_eq!(node, NetworkId(4));
    }

    #[test]
    fn boxed_node_forwards() {
        let mut node: Box<NetworkId> = Box::new(NetworkId(1));
        node.set_network(NetworkId(9));
        assert_eq!(*node, NetworkId(9));
    }
}
