//! Record encoders for the header, network ids, payload blobs, and
//! topology entries.
//!
//! All integers are little-endian. Strings and byte arrays carry a `u32`
//! length prefix.

use std::io::{self, Read, Write};

use conduit_core::{DirectionSet, NetworkId, Pos};
use conduit_graph::TopologyEntry;

use crate::error::CodecError;
use crate::{FORMAT_VERSION, MAGIC};

fn read_array<const SIZE: usize>(r: &mut dyn Read) -> Result<[u8; SIZE], CodecError> {
    let mut buf = [0u8; SIZE];
    r.read_exact(&mut buf)?;
    Ok(buf)
}

/// Write a `u32` count or id.
pub fn write_u32(w: &mut dyn Write, v: u32) -> Result<(), CodecError> {
    Ok(w.write_all(&v.to_le_bytes())?)
}

/// Read a `u32` count or id.
pub fn read_u32(r: &mut dyn Read) -> Result<u32, CodecError> {
    read_array(r).map(u32::from_le_bytes)
}

/// Write a collection length, rejecting collections too large to describe.
pub fn write_len(w: &mut dyn Write, len: usize) -> Result<(), CodecError> {
    let len = u32::try_from(len)
        .map_err(|_| CodecError::malformed(format!("length {len} exceeds u32::MAX")))?;
    write_u32(w, len)
}

/// Write a network id.
pub fn write_network_id(w: &mut dyn Write, id: NetworkId) -> Result<(), CodecError> {
    write_u32(w, id.0)
}

/// Read a network id.
pub fn read_network_id(r: &mut dyn Read) -> Result<NetworkId, CodecError> {
    read_u32(r).map(NetworkId)
}

/// Write a byte blob behind its `u32` length.
pub fn write_blob(w: &mut dyn Write, bytes: &[u8]) -> Result<(), CodecError> {
    write_len(w, bytes.len())?;
    Ok(w.write_all(bytes)?)
}

/// Read a byte blob written by [`write_blob`].
///
/// The body is pulled through `Read::take`, so a corrupt length runs into
/// end of input instead of allocating its full size up front.
pub fn read_blob(r: &mut dyn Read) -> Result<Vec<u8>, CodecError> {
    let len = u64::from(read_u32(r)?);
    let mut buf = Vec::new();
    (&mut *r).take(len).read_to_end(&mut buf)?;
    if buf.len() as u64 != len {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

/// Read a blob that must hold UTF-8 text.
pub fn read_text(r: &mut dyn Read) -> Result<String, CodecError> {
    String::from_utf8(read_blob(r)?)
        .map_err(|e| CodecError::malformed(format!("invalid UTF-8 string: {e}")))
}

/// Write one topology record as five `i32` fields: x, y, z, network id,
/// and link bitmask.
pub fn write_entry(w: &mut dyn Write, entry: &TopologyEntry) -> Result<(), CodecError> {
    let fields = [
        entry.pos.x,
        entry.pos.y,
        entry.pos.z,
        entry.network.0 as i32,
        i32::from(entry.links.bits()),
    ];
    for field in fields {
        w.write_all(&field.to_le_bytes())?;
    }
    Ok(())
}

/// Read one topology record.
///
/// The bitmask must name only the six direction bits.
pub fn read_entry(r: &mut dyn Read) -> Result<TopologyEntry, CodecError> {
    let mut fields = [0i32; 5];
    for field in &mut fields {
        *field = i32::from_le_bytes(read_array(r)?);
    }
    let [x, y, z, network, raw] = fields;
    let pos = Pos::new(x, y, z);
    let links = u8::try_from(raw)
        .ok()
        .and_then(DirectionSet::from_bits)
        .ok_or_else(|| {
            CodecError::malformed(format!("link bitmask {raw} at {pos} is out of range"))
        })?;
    Ok(TopologyEntry {
        pos,
        network: NetworkId(network as u32),
        links,
    })
}

/// Encode the header: magic, version, network type.
pub fn encode_header(w: &mut dyn Write, network_type: &str) -> Result<(), CodecError> {
    w.write_all(&MAGIC)?;
    w.write_all(&[FORMAT_VERSION])?;
    write_blob(w, network_type.as_bytes())
}

/// Decode and validate the header, returning the recorded network type.
pub fn decode_header(r: &mut dyn Read) -> Result<String, CodecError> {
    let magic: [u8; 4] = read_array(r)?;
    if magic != MAGIC {
        return Err(CodecError::InvalidMagic);
    }
    let [version] = read_array::<1>(r)?;
    if version != FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion { found: version });
    }
    read_text(r)
}
