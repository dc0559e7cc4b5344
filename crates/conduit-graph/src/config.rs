//! Manager configuration, validation, and error types.
//!
//! [`ManagerConfig`] is the builder-input for constructing a
//! [`NetworkManager`](crate::NetworkManager). [`validate()`](ManagerConfig::validate)
//! checks its invariants once, at construction.

use thiserror::Error;

/// Errors detected during [`ManagerConfig::validate()`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `network_type` is the empty string.
    #[error("network_type must not be empty")]
    EmptyNetworkType,
    /// `network_type` contains a character outside `[a-z0-9_:/.-]`.
    #[error("network_type {value:?} contains invalid character {found:?}")]
    InvalidNetworkType {
        /// The configured type name.
        value: String,
        /// The first offending character.
        found: char,
    },
}

/// Configuration for one [`NetworkManager`](crate::NetworkManager).
///
/// One manager exists per network type: a fluid manager and an item
/// manager never share networks, even at the same positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Name of the network type this manager holds (e.g. `"conduit:fluid"`).
    /// Written into persisted state and checked on load. Default:
    /// `"conduit:generic"`.
    pub network_type: String,
    /// Number of positions to presize the maps for. Default: 0.
    pub capacity_hint: usize,
    /// Run the consistency checker after every mutating call in debug
    /// builds. Default: `false`.
    pub verify_consistency: bool,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            network_type: "conduit:generic".to_string(),
            capacity_hint: 0,
            verify_consistency: false,
        }
    }
}

impl ManagerConfig {
    /// Config with the given type name and defaults elsewhere.
    pub fn with_type(network_type: impl Into<String>) -> Self {
        Self {
            network_type: network_type.into(),
            ..Self::default()
        }
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.network_type.is_empty() {
            return Err(ConfigError::EmptyNetworkType);
        }
        if let Some(found) = self
            .network_type
            .chars()
            .find(|&c| !is_type_name_char(c))
        {
            return Err(ConfigError::InvalidNetworkType {
                value: self.network_type.clone(),
                found,
            });
        }
        Ok(())
    }
}

fn is_type_name_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | ':' | '/' | '.' | '-')
}
