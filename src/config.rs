//! Configuration Module
//!
//! This module defines the configuration structures for the validator.
//! Configuration is loaded from TOML files and parsed using serde.

use crate::validation::is_routing_number;
use anyhow::{Context, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Main configuration structure
///
/// Loaded from a TOML file (e.g., config/default.toml).
///
/// # Example TOML
/// ```toml
/// [ledger]
/// local_routing_number = "883745000"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub ledger: LedgerConfig,
}

/// Ledger configuration
///
/// # Fields
/// - `local_routing_number`: Routing number of this bank. Transfers sent from
///   it must come from the authenticated account.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    pub local_routing_number: String,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Returns
    /// * `Ok(Config)` if the file was successfully loaded and parsed
    /// * `Err` if the file couldn't be read, the TOML is invalid, or the
    ///   local routing number is malformed
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> anyhow::Result<()> {
        if !is_routing_number(&self.ledger.local_routing_number) {
            bail!(
                "ledger.local_routing_number must be 9 digits, got {:?}",
                self.ledger.local_routing_number
            );
        }
        Ok(())
    }
}
