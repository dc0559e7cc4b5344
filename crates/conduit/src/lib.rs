//! Conduit: incremental network connectivity for voxel pipe and cable systems.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Conduit sub-crates. For most users, adding `conduit` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use conduit::prelude::*;
//!
//! let mut pipes: NetworkManager<u32, NetworkId> =
//!     NetworkManager::new(ManagerConfig::with_type("conduit:fluid")).unwrap();
//!
//! // Three pipes in a row, all carrying payload 7.
//! for x in 0..3 {
//!     pipes.attach(Some(NetworkId(0)), Pos::new(x, 64, 0), &7).unwrap();
//! }
//! pipes.link(Pos::new(0, 64, 0), Direction::East).unwrap();
//! pipes.link(Pos::new(1, 64, 0), Direction::East).unwrap();
//! assert_eq!(pipes.network_count(), 1);
//!
//! // Breaking the middle link splits the line in two.
//! pipes.unlink(Pos::new(1, 64, 0), Direction::West).unwrap();
//! assert_eq!(pipes.network_count(), 2);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `conduit-core` | Positions, directions, ids, traits, errors |
//! | [`graph`] | `conduit-graph` | The network manager and its parts |
//! | [`codec`] | `conduit-codec` | Binary persistence |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`conduit-core`).
///
/// Contains [`types::Pos`], [`types::Direction`], [`types::NetworkId`],
/// the collaborator traits [`types::NetworkData`], [`types::NetworkNode`],
/// and [`types::PayloadCodec`], plus the shared error types.
pub use conduit_core as types;

/// The connectivity engine (`conduit-graph`).
///
/// [`graph::NetworkManager`] is the entry point; [`graph::Network`] and
/// [`graph::LinkTable`] are the views it hands out.
pub use conduit_graph as graph;

/// Binary persistence (`conduit-codec`).
///
/// Save a manager with [`codec::to_bytes`] and rebuild it with
/// [`codec::from_bytes`].
pub use conduit_codec as codec;

/// Common imports for typical Conduit usage.
///
/// ```rust
/// use conduit::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use conduit_core::{
        Direction, DirectionSet, NetworkData, NetworkId, NetworkNode, PayloadCodec, Pos,
    };

    // Errors
    pub use conduit_codec::CodecError;
    pub use conduit_core::{GraphError, RestoreError};
    pub use conduit_graph::ConfigError;

    // Engine
    pub use conduit_graph::{ManagerConfig, Network, NetworkManager, NodeSlot, TopologyEntry};
}
