//! Encoding a manager.

use std::io::Write;

use conduit_core::{NetworkData, NetworkNode, PayloadCodec};
use conduit_graph::{NetworkManager, TopologyEntry};
use tracing::debug;

use crate::codec::{encode_header, write_blob, write_entry, write_len, write_network_id};
use crate::error::CodecError;

/// Write the persistent state of `manager` to `w`.
///
/// Networks are written in id order and topology entries in position
/// order, so equal states always encode to equal bytes. Node handles and
/// tick flags are not persisted.
pub fn encode_manager<D, N>(
    w: &mut dyn Write,
    manager: &NetworkManager<D, N>,
) -> Result<(), CodecError>
where
    D: NetworkData + PayloadCodec,
    N: NetworkNode,
{
    encode_header(w, manager.network_type())?;

    let mut networks: Vec<_> = manager.networks().collect();
    networks.sort_by_key(|n| n.id());
    write_len(w, networks.len())?;
    let mut payload = Vec::new();
    for net in &networks {
        payload.clear();
        net.data().encode_payload(&mut payload);
        write_network_id(w, net.id())?;
        write_blob(w, &payload)?;
    }

    let mut topology: Vec<TopologyEntry> = manager.topology().collect();
    topology.sort_by_key(|e| e.pos);
    write_len(w, topology.len())?;
    for entry in &topology {
        write_entry(w, entry)?;
    }

    write_network_id(w, manager.next_network_id())?;
    debug!(
        network_type = manager.network_type(),
        networks = networks.len(),
        positions = topology.len(),
        "encoded manager"
    );
    Ok(())
}

/// Encode `manager` into a fresh byte vector.
pub fn to_bytes<D, N>(manager: &NetworkManager<D, N>) -> Result<Vec<u8>, CodecError>
where
    D: NetworkData + PayloadCodec,
    N: NetworkNode,
{
    let mut buf = Vec::new();
    encode_manager(&mut buf, manager)?;
    Ok(buf)
}
