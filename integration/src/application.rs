/// Main application module
///
/// Provides the high-level address bar API

use crate::{AppConfig, UnifiedLogger};
use std::sync::Arc;
use suggestions::{
    RemoteSuggestions, SuggestionContainer, SuggestionProcessing, SuggestionResult, SuggestionSources,
};
use tracing::{debug, info};

/// Main application
pub struct Application {
    config: AppConfig,
    container: Arc<SuggestionContainer>,
}

impl Application {
    /// Create and initialize a new application.
    ///
    /// Logging is set up on first use; a subscriber installed earlier by the
    /// host is left in place.
    pub fn new(
        config: AppConfig,
        sources: Arc<dyn SuggestionSources>,
        remote: Arc<dyn RemoteSuggestions>,
    ) -> anyhow::Result<Self> {
        config.validate()?;

        if let Err(e) = UnifiedLogger::init(config.logger_config()) {
            debug!("Keeping existing logger: {}", e);
        }

        info!("Starting address bar suggestions for {:?}", config.platform);

        let processing = SuggestionProcessing::new(config.platform).with_config(config.suggestions.clone());
        let container = Arc::new(SuggestionContainer::new(processing, sources, remote));

        Ok(Self { config, container })
    }

    /// Suggestions for the text currently in the address bar.
    ///
    /// `None` when a newer query or a stop request overtook this one.
    pub async fn suggestions(&self, query: &str) -> Option<SuggestionResult> {
        self.container.get_suggestions(query).await
    }

    /// Drop the results of queries still in flight, e.g. when the address bar closes
    pub fn stop_getting_suggestions(&self) {
        debug!("Stopping suggestions");
        self.container.stop_getting_suggestions();
    }

    /// The last result shown to the user
    pub async fn last_result(&self) -> Option<SuggestionResult> {
        self.container.result().await
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn container(&self) -> &Arc<SuggestionContainer> {
        &self.container
    }
}
