//! Records the suggestion pipeline reads from browser storage.
//!
//! These are owned by the surrounding application; the pipeline only borrows
//! them for the duration of one query.

use crate::errors::{Result, SuggestionsError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// Platform the suggestions are computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mobile,
    #[default]
    Desktop,
}

/// Identifier of an open browser tab
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(pub String);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bookmark as stored by the bookmarks database.
///
/// The URL is kept as the raw stored string; it is only parsed when a
/// suggestion is built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub title: String,
    pub url: String,
    pub is_favorite: bool,
}

impl Bookmark {
    pub fn new(title: impl Into<String>, url: impl Into<String>, is_favorite: bool) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            is_favorite,
        }
    }

    /// Parse the stored URL string
    pub fn parsed_url(&self) -> Result<Url> {
        Url::parse(&self.url).map_err(|e| SuggestionsError::invalid_url(&self.url, e))
    }
}

/// A visited page from browsing history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySuggestion {
    #[serde(default = "Uuid::new_v4")]
    pub identifier: Uuid,
    #[serde(default)]
    pub title: Option<String>,
    pub url: Url,
    pub number_of_visits: u32,
    #[serde(default = "Utc::now")]
    pub last_visit: DateTime<Utc>,
    #[serde(default)]
    pub failed_to_load: bool,
}

impl HistorySuggestion {
    pub fn new(title: Option<&str>, url: &str, number_of_visits: u32) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|e| SuggestionsError::invalid_url(url, e))?;
        Ok(Self {
            identifier: Uuid::new_v4(),
            title: title.map(str::to_string),
            url: parsed,
            number_of_visits,
            last_visit: Utc::now(),
            failed_to_load: false,
        })
    }

    /// Mark the entry as one whose last load failed
    pub fn failed(mut self) -> Self {
        self.failed_to_load = true;
        self
    }
}

/// A static page shipped with the browser (settings, bookmarks manager, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalPage {
    pub title: String,
    pub url: Url,
}

impl InternalPage {
    pub fn new(title: impl Into<String>, url: &str) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|e| SuggestionsError::invalid_url(url, e))?;
        Ok(Self {
            title: title.into(),
            url: parsed,
        })
    }
}

/// A tab currently open in some window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserTab {
    pub title: String,
    pub url: Url,
    #[serde(default)]
    pub tab_id: Option<TabId>,
}

impl BrowserTab {
    pub fn new(title: impl Into<String>, url: &str) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|e| SuggestionsError::invalid_url(url, e))?;
        Ok(Self {
            title: title.into(),
            url: parsed,
            tab_id: None,
        })
    }

    pub fn with_tab_id(mut self, tab_id: TabId) -> Self {
        self.tab_id = Some(tab_id);
        self
    }
}
