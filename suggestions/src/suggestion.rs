//! Suggestion Data Model
//!
//! A closed set of suggestion kinds shown in the address bar. Only the kinds
//! built from local records carry a relevance score; remote phrases and
//! websites always report a score of 0.

use address_bar_core::*;
use tracing::debug;

/// A single address bar suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Suggestion {
    /// A search phrase completion
    Phrase { phrase: String },
    /// A navigable URL without further metadata
    Website { url: Url },
    #[serde(rename_all = "camelCase")]
    Bookmark {
        title: String,
        url: Url,
        is_favorite: bool,
        #[serde(default)]
        score: i64,
    },
    HistoryEntry {
        #[serde(default)]
        title: Option<String>,
        url: Url,
        #[serde(default)]
        score: i64,
    },
    InternalPage {
        title: String,
        url: Url,
        #[serde(default)]
        score: i64,
    },
    #[serde(rename_all = "camelCase")]
    OpenTab {
        title: String,
        url: Url,
        #[serde(default)]
        tab_id: Option<TabId>,
        #[serde(default)]
        score: i64,
    },
    /// Fallback for payloads this model does not understand
    Unknown { value: String },
}

impl Suggestion {
    /// Build a bookmark suggestion.
    ///
    /// Returns `None` when the stored bookmark URL does not parse.
    pub fn from_bookmark(bookmark: &Bookmark, score: i64) -> Option<Self> {
        match bookmark.parsed_url() {
            Ok(url) => Some(Self::Bookmark {
                title: bookmark.title.clone(),
                url,
                is_favorite: bookmark.is_favorite,
                score,
            }),
            Err(e) => {
                debug!("Skipping bookmark '{}': {}", bookmark.title, e);
                None
            }
        }
    }

    pub fn from_history_entry(entry: &HistorySuggestion, score: i64) -> Self {
        Self::HistoryEntry {
            title: entry.title.clone(),
            url: entry.url.clone(),
            score,
        }
    }

    pub fn from_internal_page(page: &InternalPage, score: i64) -> Self {
        Self::InternalPage {
            title: page.title.clone(),
            url: page.url.clone(),
            score,
        }
    }

    pub fn from_tab(tab: &BrowserTab, score: i64) -> Self {
        Self::OpenTab {
            title: tab.title.clone(),
            url: tab.url.clone(),
            tab_id: tab.tab_id.clone(),
            score,
        }
    }

    pub fn from_url(url: Url) -> Self {
        Self::Website { url }
    }

    /// Build a suggestion from a remote phrase.
    ///
    /// Navigational phrases become websites when `http://<phrase>` parses.
    pub fn from_phrase(phrase: &str, is_nav: bool) -> Self {
        if is_nav {
            if let Ok(url) = Url::parse(&format!("http://{}", phrase)) {
                return Self::Website { url };
            }
        }
        Self::Phrase {
            phrase: phrase.to_string(),
        }
    }

    /// Relevance score, 0 for kinds that are never ranked
    pub fn score(&self) -> i64 {
        match self {
            Self::Bookmark { score, .. }
            | Self::HistoryEntry { score, .. }
            | Self::InternalPage { score, .. }
            | Self::OpenTab { score, .. } => *score,
            Self::Phrase { .. } | Self::Website { .. } | Self::Unknown { .. } => 0,
        }
    }

    /// Copy of this suggestion with the score replaced
    pub fn with_score(&self, new_score: i64) -> Self {
        let mut copy = self.clone();
        match &mut copy {
            Self::Bookmark { score, .. }
            | Self::HistoryEntry { score, .. }
            | Self::InternalPage { score, .. }
            | Self::OpenTab { score, .. } => *score = new_score,
            Self::Phrase { .. } | Self::Website { .. } | Self::Unknown { .. } => {}
        }
        copy
    }

    pub fn url(&self) -> Option<&Url> {
        match self {
            Self::Website { url }
            | Self::Bookmark { url, .. }
            | Self::HistoryEntry { url, .. }
            | Self::InternalPage { url, .. }
            | Self::OpenTab { url, .. } => Some(url),
            Self::Phrase { .. } | Self::Unknown { .. } => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Self::HistoryEntry { title, .. } => title.as_deref(),
            Self::Bookmark { title, .. }
            | Self::InternalPage { title, .. }
            | Self::OpenTab { title, .. } => Some(title),
            Self::Phrase { .. } | Self::Website { .. } | Self::Unknown { .. } => None,
        }
    }

    pub fn is_open_tab(&self) -> bool {
        matches!(self, Self::OpenTab { .. })
    }

    pub fn is_bookmark(&self) -> bool {
        matches!(self, Self::Bookmark { .. })
    }

    pub fn is_history_entry(&self) -> bool {
        matches!(self, Self::HistoryEntry { .. })
    }

    /// Whether the suggestion was built from on-device data
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Bookmark { .. }
                | Self::HistoryEntry { .. }
                | Self::InternalPage { .. }
                | Self::OpenTab { .. }
        )
    }

    /// Whether this suggestion repeats `other` for display purposes.
    ///
    /// Only suggestions of the same local kind are compared. Bookmarks, history
    /// entries and tabs compare naked URLs, internal pages compare exact URLs.
    pub fn duplicates(&self, other: &Suggestion) -> bool {
        match (self, other) {
            (
                Self::Bookmark { title, url, is_favorite, .. },
                Self::Bookmark {
                    title: other_title,
                    url: other_url,
                    is_favorite: other_favorite,
                    ..
                },
            ) => title == other_title && is_favorite == other_favorite && url.naked() == other_url.naked(),
            (
                Self::HistoryEntry { title, url, .. },
                Self::HistoryEntry {
                    title: other_title,
                    url: other_url,
                    ..
                },
            ) => title == other_title && url.naked() == other_url.naked(),
            (
                Self::InternalPage { title, url, .. },
                Self::InternalPage {
                    title: other_title,
                    url: other_url,
                    ..
                },
            ) => title == other_title && url == other_url,
            (
                Self::OpenTab { title, url, .. },
                Self::OpenTab {
                    title: other_title,
                    url: other_url,
                    ..
                },
            ) => title == other_title && url.naked() == other_url.naked(),
            _ => false,
        }
    }
}
