/// Integration module for the address bar
///
/// Wires configuration, logging and the suggestion container into a single
/// entry point for the embedding browser.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use suggestions::{Platform, SuggestionsConfig};
use tracing_subscriber::EnvFilter;

pub mod application;
pub mod logger;

pub use application::Application;
pub use logger::{LoggerConfig, UnifiedLogger};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Log level or filter directive
    pub log_level: String,

    /// Emit JSON formatted logs
    pub log_json: bool,

    /// Platform the browser runs on, decides top hits eligibility of bookmarks
    pub platform: Platform,

    /// Limits of the suggestion pipeline
    pub suggestions: SuggestionsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_json: false,
            platform: Platform::default(),
            suggestions: SuggestionsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON document, missing keys keep their defaults
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse application configuration")
    }

    /// Load the configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("Invalid configuration file {}", path.display()))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        EnvFilter::try_new(&self.log_level)
            .with_context(|| format!("Invalid log level '{}'", self.log_level))?;
        self.suggestions.validate()?;
        Ok(())
    }

    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: self.log_level.clone(),
            json: self.log_json,
            ..LoggerConfig::default()
        }
    }
}
