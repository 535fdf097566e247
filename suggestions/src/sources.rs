//! Collaborators that feed the suggestion container.

use crate::api::ApiResult;
use address_bar_core::*;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// On-device records consulted for every query
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SuggestionSources: Send + Sync {
    async fn history(&self) -> Vec<HistorySuggestion>;

    async fn bookmarks(&self) -> Vec<Bookmark>;

    async fn internal_pages(&self) -> Vec<InternalPage>;

    async fn open_tabs(&self) -> Vec<BrowserTab>;
}

/// Provides the already fetched remote payload for a query.
///
/// `Ok(None)` means no remote suggestions are available for this query.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteSuggestions: Send + Sync {
    async fn suggestions(&self, query: &str) -> Result<Option<ApiResult>>;
}

/// Sources backed by in-memory snapshots the application refreshes
#[derive(Debug, Clone, Default)]
pub struct InMemorySources {
    history: Arc<RwLock<Vec<HistorySuggestion>>>,
    bookmarks: Arc<RwLock<Vec<Bookmark>>>,
    internal_pages: Arc<RwLock<Vec<InternalPage>>>,
    open_tabs: Arc<RwLock<Vec<BrowserTab>>>,
}

impl InMemorySources {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn update_history(&self, history: Vec<HistorySuggestion>) {
        *self.history.write().await = history;
    }

    pub async fn update_bookmarks(&self, bookmarks: Vec<Bookmark>) {
        *self.bookmarks.write().await = bookmarks;
    }

    pub async fn update_internal_pages(&self, pages: Vec<InternalPage>) {
        *self.internal_pages.write().await = pages;
    }

    pub async fn update_open_tabs(&self, tabs: Vec<BrowserTab>) {
        *self.open_tabs.write().await = tabs;
    }
}

#[async_trait]
impl SuggestionSources for InMemorySources {
    async fn history(&self) -> Vec<HistorySuggestion> {
        self.history.read().await.clone()
    }

    async fn bookmarks(&self) -> Vec<Bookmark> {
        self.bookmarks.read().await.clone()
    }

    async fn internal_pages(&self) -> Vec<InternalPage> {
        self.internal_pages.read().await.clone()
    }

    async fn open_tabs(&self) -> Vec<BrowserTab> {
        self.open_tabs.read().await.clone()
    }
}

/// Remote provider for when the search API is disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRemoteSuggestions;

#[async_trait]
impl RemoteSuggestions for NoRemoteSuggestions {
    async fn suggestions(&self, _query: &str) -> Result<Option<ApiResult>> {
        Ok(None)
    }
}
