//! Board settings

use serde::{Deserialize, Serialize};

use crate::board::PlacementPolicy;
use crate::error::{ConfigError, ConfigResult};
use crate::identity::IdentityStrategy;

/// Default prefix for sequential instance uids
pub const DEFAULT_UID_PREFIX: &str = "stop";

/// User-tunable board behavior, stored as `settings.toml`.
///
/// Missing keys fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Copy or move when a stop is dropped into another group
    pub placement: PlacementPolicy,
    /// How instance uids are generated
    pub identity: IdentityStrategy,
    /// Prefix for sequential uids
    pub uid_prefix: String,
    /// Whether private groups are rendered initially
    pub show_private: bool,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            placement: PlacementPolicy::Copy,
            identity: IdentityStrategy::Random,
            uid_prefix: DEFAULT_UID_PREFIX.to_string(),
            show_private: false,
        }
    }
}

impl BoardSettings {
    /// Sets the placement policy
    #[must_use]
    pub const fn with_placement(mut self, placement: PlacementPolicy) -> Self {
        self.placement = placement;
        self
    }

    /// Sets the identity strategy
    #[must_use]
    pub const fn with_identity(mut self, identity: IdentityStrategy) -> Self {
        self.identity = identity;
        self
    }

    /// Sets whether private groups start visible
    #[must_use]
    pub const fn with_show_private(mut self, show_private: bool) -> Self {
        self.show_private = show_private;
        self
    }

    /// Parses settings from TOML
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a value is invalid.
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        let settings: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: "settings.toml".into(),
            reason: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serializes settings to TOML
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Validates the settings
    ///
    /// # Errors
    ///
    /// Returns an error if `uid_prefix` is empty or contains whitespace.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.uid_prefix.is_empty() || self.uid_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation {
                field: "uid_prefix".to_string(),
                reason: "must be non-empty and contain no whitespace".to_string(),
            });
        }
        Ok(())
    }
}
