//! Decoding a manager.

use std::io::Read;

use conduit_core::{NetworkData, NetworkNode, PayloadCodec};
use conduit_graph::{ManagerConfig, NetworkManager};
use tracing::debug;

use crate::codec::{decode_header, read_blob, read_entry, read_network_id, read_u32};
use crate::error::CodecError;

/// Upper bound on presized record buffers; longer lists grow as read.
const MAX_PREALLOC: usize = 4096;

/// Read a manager from `r`, building it with `config`.
///
/// The recorded network type must equal `config.network_type`. Every
/// position comes back unloaded; install node instances with
/// [`NetworkManager::node_loaded`]. Bytes after the id counter are left
/// unread.
pub fn decode_manager<D, N>(
    r: &mut dyn Read,
    config: ManagerConfig,
) -> Result<NetworkManager<D, N>, CodecError>
where
    D: NetworkData + PayloadCodec,
    N: NetworkNode,
{
    let mut manager = NetworkManager::new(config)?;

    let found = decode_header(r)?;
    if found != manager.network_type() {
        return Err(CodecError::NetworkTypeMismatch {
            expected: manager.network_type().to_string(),
            found,
        });
    }

    let network_count = read_u32(r)? as usize;
    let mut networks = Vec::with_capacity(network_count.min(MAX_PREALLOC));
    for _ in 0..network_count {
        let network = read_network_id(r)?;
        let data = D::decode_payload(&read_blob(r)?)
            .map_err(|source| CodecError::Payload { network, source })?;
        networks.push((network, data));
    }

    let entry_count = read_u32(r)? as usize;
    let mut topology = Vec::with_capacity(entry_count.min(MAX_PREALLOC));
    for _ in 0..entry_count {
        topology.push(read_entry(r)?);
    }

    let next_id = read_network_id(r)?;
    manager.restore(networks, topology, next_id)?;
    debug!(
        network_type = manager.network_type(),
        networks = network_count,
        positions = entry_count,
        "decoded manager"
    );
    Ok(manager)
}

/// Decode a manager from a complete byte slice.
///
/// Unlike [`decode_manager`], rejects trailing bytes.
pub fn from_bytes<D, N>(
    bytes: &[u8],
    config: ManagerConfig,
) -> Result<NetworkManager<D, N>, CodecError>
where
    D: NetworkData + PayloadCodec,
    N: NetworkNode,
{
    let mut rest = bytes;
    let manager = decode_manager(&mut rest, config)?;
    if !rest.is_empty() {
        return Err(CodecError::malformed(format!(
            "{} trailing bytes after id counter",
            rest.len()
        )));
    }
    Ok(manager)
}
