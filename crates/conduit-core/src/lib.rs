//! Core types and traits for the Conduit link-graph engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the position and direction model, network identifiers, the
//! collaborator traits a manager is parameterized over, and the error
//! types shared by every other crate in the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod pos;
pub mod traits;

pub use error::{GraphError, InvariantViolation, PayloadError, RestoreError};
pub use id::NetworkId;
pub use pos::{Direction, DirectionSet, Pos};
pub use traits::{NetworkData, NetworkNode, PayloadCodec};
