use serde::Deserialize;
use std::fs;

use crate::error::{DecoderError, Result};

/// Scanner-integration settings.
///
/// The defaults reproduce the stock decoder behavior; a config file is only
/// needed when a site's scanner firmware emits a separator placeholder the
/// built-in list does not cover.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Extra literal strings rewritten to the FNC1 separator, matched
    /// case-insensitively (e.g. "{GS}" or "<FNC1>")
    pub separator_aliases: Vec<String>,
    /// Strip leading AIM symbology identifiers ("]C1", "]e0", ...)
    pub strip_aim_prefix: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            separator_aliases: Vec::new(),
            strip_aim_prefix: true,
        }
    }
}

impl DecoderConfig {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            DecoderError::Config(format!("Failed to read config file '{}': {}", path, e))
        })?;

        let config: DecoderConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
