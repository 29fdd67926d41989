//! Configuration file support.
//!
//! Every section is optional; missing values fall back to defaults.
//!
//! ```toml
//! [session]
//! variant = "die"
//! max_tokens = 0
//!
//! [strength]
//! warn_below = "strong"
//! ```

use crate::analysis::{EntropyStrength, StrengthGate};
use crate::tokens::Variant;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("max_tokens {cap} cannot reach {needed} bits with {variant} input")]
    TokenCapTooSmall {
        cap: usize,
        variant: Variant,
        needed: f64,
    },
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub strength: StrengthConfig,
}

/// Capture session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Alphabet used when none is given on the command line.
    pub variant: Variant,
    /// Largest number of tokens an input surface accepts (0 = unlimited).
    pub max_tokens: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Die,
            max_tokens: 0,
        }
    }
}

impl SessionConfig {
    /// The token cap, or `None` when unlimited.
    pub fn token_cap(&self) -> Option<usize> {
        (self.max_tokens > 0).then_some(self.max_tokens)
    }
}

/// Weak-entropy warning settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthConfig {
    /// Completing below this strength requires confirmation.
    pub warn_below: EntropyStrength,
}

impl Default for StrengthConfig {
    fn default() -> Self {
        Self {
            warn_below: StrengthGate::default().warn_below,
        }
    }
}

impl StrengthConfig {
    pub fn gate(&self) -> StrengthGate {
        StrengthGate::new(self.warn_below)
    }
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that a capped session can still reach the warning threshold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(cap) = self.session.token_cap() else {
            return Ok(());
        };

        let variant = self.session.variant;
        let needed = self.strength.warn_below.min_bits();
        if cap as f64 * variant.bits_per_symbol() < needed {
            return Err(ConfigError::TokenCapTooSmall {
                cap,
                variant,
                needed,
            });
        }
        Ok(())
    }
}
