//! Table configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tichect_rules::EdgePolicy;
use tracing::{debug, info, instrument};

/// House rules and presentation options for a game table.
///
/// Every field has a default, so an empty or missing file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// How horizontal attacks treat row edges.
    #[serde(default)]
    edge_policy: EdgePolicy,

    /// Keep the attack control disabled until a token was placed this turn.
    #[serde(default = "default_attack_requires_placement")]
    attack_requires_placement: bool,

    /// Draw the board turned by the current rotation.
    #[serde(default = "default_render_rotated")]
    render_rotated: bool,
}

#[instrument]
fn default_attack_requires_placement() -> bool {
    true
}

#[instrument]
fn default_render_rotated() -> bool {
    true
}

impl GameConfig {
    /// Creates a configuration with explicit settings.
    #[instrument]
    pub fn new(
        edge_policy: EdgePolicy,
        attack_requires_placement: bool,
        render_rotated: bool,
    ) -> Self {
        Self {
            edge_policy,
            attack_requires_placement,
            render_rotated,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(edge_policy = %config.edge_policy, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, falling back to defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the edge policy.
    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(
            EdgePolicy::default(),
            default_attack_requires_placement(),
            default_render_rotated(),
        )
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
