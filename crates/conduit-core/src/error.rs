//! Error types for the Conduit link-graph engine.
//!
//! Organized by subsystem: contract violations on the live graph,
//! consistency-check failures, and restore-from-parts failures.
//! Expected no-ops (linking an already-linked pair, unlinking a missing
//! link, linking incompatible networks) are not errors and have no
//! variant here.

use crate::id::NetworkId;
use crate::pos::{Direction, Pos};
use thiserror::Error;

/// Caller contract violations on a live manager.
///
/// Returned before any state is touched, so a failed call always leaves
/// the manager exactly as it was.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// `attach` was called for a position that already belongs to a network.
    #[error("position {pos} is already attached to network {network}")]
    AlreadyAttached {
        /// The occupied position.
        pos: Pos,
        /// The network that owns it.
        network: NetworkId,
    },
    /// An operation that requires membership was called for a position
    /// that is not attached.
    #[error("position {pos} is not attached to any network")]
    NotAttached {
        /// The offending position.
        pos: Pos,
    },
    /// The id counter cannot advance past `u32::MAX`.
    #[error("network id space exhausted")]
    IdsExhausted,
}

/// A manager state invariant that does not hold.
///
/// Produced by the consistency checker. Any of these indicates a bug in
/// the engine or a hand-assembled state, never a runtime condition.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The link table and the position map have different key sets.
    #[error("position {pos} is in only one of the link table and the position map")]
    KeySetMismatch {
        /// The position present on only one side.
        pos: Pos,
    },
    /// A link has no matching reverse link at its far end.
    #[error("link {pos} -> {dir} has no reverse link")]
    AsymmetricLink {
        /// Origin of the one-sided link.
        pos: Pos,
        /// Direction of the one-sided link.
        dir: Direction,
    },
    /// Two linked positions are assigned to different networks.
    #[error("link {pos} -> {dir} crosses from network {from} to network {to}")]
    CrossNetworkLink {
        /// Origin of the link.
        pos: Pos,
        /// Direction of the link.
        dir: Direction,
        /// Network of the origin.
        from: NetworkId,
        /// Network of the far end.
        to: NetworkId,
    },
    /// The position map names a network that is not registered.
    #[error("position {pos} maps to unregistered network {network}")]
    DanglingNetwork {
        /// The position.
        pos: Pos,
        /// The missing network.
        network: NetworkId,
    },
    /// A network's member map disagrees with the position map.
    #[error("network {network} membership of {pos} disagrees with the position map")]
    MembershipMismatch {
        /// The network.
        network: NetworkId,
        /// The disputed position.
        pos: Pos,
    },
    /// A registered network has no members.
    #[error("network {network} has no members")]
    EmptyNetwork {
        /// The empty network.
        network: NetworkId,
    },
    /// A registered network id is not below the id counter.
    #[error("network {network} is not below the next id {next}")]
    IdNotBelowNext {
        /// The offending network.
        network: NetworkId,
        /// The counter value.
        next: NetworkId,
    },
}

/// Failures rebuilding a manager from persisted parts.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RestoreError {
    /// Two network records share an id.
    #[error("network {network} appears more than once")]
    DuplicateNetwork {
        /// The repeated id.
        network: NetworkId,
    },
    /// A topology entry references a network with no record.
    #[error("position {pos} references unknown network {network}")]
    UnknownNetwork {
        /// The position.
        pos: Pos,
        /// The missing network id.
        network: NetworkId,
    },
    /// Two topology entries share a position.
    #[error("position {pos} appears more than once")]
    DuplicatePosition {
        /// The repeated position.
        pos: Pos,
    },
    /// The restored parts break a manager invariant.
    #[error("restored state is inconsistent: {0}")]
    Inconsistent(#[from] InvariantViolation),
}

/// A payload could not be decoded from its persisted bytes.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct PayloadError {
    /// Human-readable description of what went wrong.
    pub reason: String,
}

impl PayloadError {
    /// Create an error from a description.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_attached_display_names_position() {
        let err = GraphError::NotAttached {
            pos: Pos::new(1, -2, 3),
        };
        assert_eq!(err.to_string(), "position (1, -2, 3) is not attached to any network");
    }

    #[test]
    fn restore_wraps_invariant_source() {
        use std::error::Error;
        let err = RestoreError::from(InvariantViolation::EmptyNetwork {
            network: NetworkId(3),
        });
        assert!(err.to_string().contains("network 3 has no members"));
        assert!(err.source().is_some());
    }
}
