//! Suggestion Container
//!
//! Gathers the local records and the remote payload for a query, runs
//! [`SuggestionProcessing`] and publishes the result. Each call is tagged
//! with a generation; a call that finishes after a newer call started, or
//! after [`SuggestionContainer::stop_getting_suggestions`], is discarded.

use crate::processing::SuggestionProcessing;
use crate::result::SuggestionResult;
use crate::sources::{RemoteSuggestions, SuggestionSources};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

pub struct SuggestionContainer {
    processing: SuggestionProcessing,
    sources: Arc<dyn SuggestionSources>,
    remote: Arc<dyn RemoteSuggestions>,
    generation: AtomicU64,
    result: RwLock<Option<SuggestionResult>>,
}

impl SuggestionContainer {
    pub fn new(
        processing: SuggestionProcessing,
        sources: Arc<dyn SuggestionSources>,
        remote: Arc<dyn RemoteSuggestions>,
    ) -> Self {
        Self {
            processing,
            sources,
            remote,
            generation: AtomicU64::new(0),
            result: RwLock::new(None),
        }
    }

    /// Compute and publish suggestions for `query`.
    ///
    /// Returns `None` when the call was superseded before it finished.
    pub async fn get_suggestions(&self, query: &str) -> Option<SuggestionResult> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let api_result = match self.remote.suggestions(query).await {
            Ok(api_result) => api_result,
            Err(e) => {
                warn!("Remote suggestions failed for '{}', using local only: {}", query, e);
                None
            }
        };

        let history = self.sources.history().await;
        let bookmarks = self.sources.bookmarks().await;
        let internal_pages = self.sources.internal_pages().await;
        let open_tabs = self.sources.open_tabs().await;

        let result = self.processing.result(
            query,
            &history,
            &bookmarks,
            &internal_pages,
            &open_tabs,
            api_result.as_ref(),
        );

        let mut published = self.result.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("Discarding stale suggestions for '{}'", query);
            return None;
        }
        *published = Some(result.clone());
        Some(result)
    }

    /// Discard the results of any call still in flight
    pub fn stop_getting_suggestions(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// The last published result
    pub async fn result(&self) -> Option<SuggestionResult> {
        self.result.read().await.clone()
    }

    pub fn processing(&self) -> &SuggestionProcessing {
        &self.processing
    }
}
