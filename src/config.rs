//! Optional TOML settings for the console demo.
//!
//! Every field has a default, so an absent file or an empty table gives the
//! classic roster: a flying human at 20 feet, an 81 cm duck and a 5300 mAh toy.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::Level;

use crate::error::{DemoError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "flying-objects.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub flying_human_name: String,
    pub altitude: f64,
    pub wing_span: u32,
    pub battery_capacity: u32,
    pub log_level: String,
    pub wait_for_key: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            flying_human_name: "Hussain Naeem".to_string(),
            altitude: 20.0,
            wing_span: 81,
            battery_capacity: 5300,
            log_level: "warn".to_string(),
            wait_for_key: true,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| DemoError::config_parse("<inline>", err.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|err| DemoError::config_parse(path, err.to_string()))
    }

    /// Like [`DemoConfig::load`], but a missing file means defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        match Self::load(path.as_ref()) {
            Err(DemoError::Io(err)) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }

    /// Never fails: any problem with the file or its log level is returned
    /// alongside the configuration that replaces it.
    ///
    /// An unreadable or invalid file gives the defaults. A bad `log_level` is
    /// reset to the default level and keeps the rest of the file.
    pub fn load_lenient(path: impl AsRef<Path>) -> (Self, Vec<DemoError>) {
        let mut problems = Vec::new();
        let mut config = Self::load_or_default(path).unwrap_or_else(|err| {
            problems.push(err);
            Self::default()
        });

        if let Err(err) = config.level() {
            problems.push(err);
            config.log_level = Self::default().log_level;
        }

        (config, problems)
    }

    pub fn level(&self) -> Result<Level> {
        Level::from_str(self.log_level.trim())
            .map_err(|_| DemoError::InvalidLogLevel(self.log_level.clone()))
    }
}
