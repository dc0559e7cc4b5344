//! Incremental connectivity engine for Conduit link graphs.
//!
//! A [`NetworkManager`] keeps a partition of attached lattice positions
//! into [`Network`]s. Linking two positions merges their networks;
//! unlinking runs a bounded depth-first search and splits off whatever
//! the origin can no longer reach. Node instances may be loaded and
//! unloaded without changing topology.
//!
//! # Modules
//!
//! - [`link`]: the symmetric [`LinkTable`]
//! - [`network`]: [`Network`] and its [`NodeSlot`] members
//! - [`registry`]: live networks and the monotonic id counter
//! - [`manager`]: the public engine
//! - [`config`]: [`ManagerConfig`] and its validation

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub(crate) mod connectivity;
mod consistency;
pub mod link;
pub mod manager;
pub mod network;
pub mod registry;
mod restore;

pub use config::{ConfigError, ManagerConfig};
pub use link::LinkTable;
pub use manager::{NetworkManager, TopologyEntry};
pub use network::{Network, NodeSlot};
pub use registry::NetworkRegistry;
