//! Error types for manager persistence.

use std::io;

use conduit_core::{NetworkId, PayloadError, RestoreError};
use conduit_graph::ConfigError;
use thiserror::Error;

/// Errors that can occur while encoding or decoding a manager.
#[derive(Debug, Error)]
pub enum CodecError {
    /// An I/O error occurred during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The data does not start with the expected `b"CNDT"` magic bytes.
    #[error("invalid magic bytes (expected b\"CNDT\")")]
    InvalidMagic,
    /// The format version is not supported by this build.
    #[error("unsupported format version {found}")]
    UnsupportedVersion {
        /// The version found in the data.
        found: u8,
    },
    /// The data was written by a manager of a different network type.
    #[error("network type mismatch: expected {expected:?}, found {found:?}")]
    NetworkTypeMismatch {
        /// The type of the manager being decoded into.
        expected: String,
        /// The type recorded in the data.
        found: String,
    },
    /// A record could not be decoded (corrupt or out-of-range data).
    #[error("malformed data: {detail}")]
    Malformed {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// A network's payload bytes were rejected by the payload decoder.
    #[error("payload of network {network} could not be decoded: {source}")]
    Payload {
        /// The network whose payload failed.
        network: NetworkId,
        /// The decoder's error.
        #[source]
        source: PayloadError,
    },
    /// The decoded parts do not form a valid manager state.
    #[error(transparent)]
    Restore(#[from] RestoreError),
    /// The configuration supplied for decoding is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CodecError {
    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        Self::Malformed {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn payload_error_exposes_source() {
        let err = CodecError::Payload {
            network: NetworkId(4),
            source: PayloadError::new("bad tag"),
        };
        assert_eq!(
            err.to_string(),
            "payload of network 4 could not be decoded: bad tag"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn io_errors_convert() {
        let err: CodecError = io::Error::from(io::ErrorKind::UnexpectedEof).into();
        assert!(matches!(err, CodecError::Io(_)));
    }
}
