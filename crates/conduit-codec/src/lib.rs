//! Binary persistence for Conduit network managers.
//!
//! Saves the topology of a [`NetworkManager`](conduit_graph::NetworkManager)
//! (networks with their payloads, per-position link masks, and the id
//! counter) and rebuilds it later. Node instances are not persisted; a
//! decoded manager has every position unloaded.
//!
//! # Format
//!
//! ```text
//! [MAGIC "CNDT"] [VERSION u8] [network_type: len-prefixed str]
//! [network_count u32] { [id u32] [payload: len-prefixed bytes] }*
//! [entry_count u32]   { [x i32] [y i32] [z i32] [network i32] [links i32] }*
//! [next_network_id u32]
//! ```
//!
//! Payload bytes come from the payload type's
//! [`PayloadCodec`](conduit_core::PayloadCodec) implementation and are
//! otherwise opaque.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use error::CodecError;
pub use reader::{decode_manager, from_bytes};
pub use writer::{encode_manager, to_bytes};

/// Magic bytes at the start of every encoded manager.
pub const MAGIC: [u8; 4] = *b"CNDT";

/// Current binary format version.
pub const FORMAT_VERSION: u8 = 1;
