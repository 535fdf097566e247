use crate::suggestion::Suggestion;
use address_bar_core::*;

/// Suggestions grouped the way the address bar shows them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResult {
    /// Most prominent group, a prefix of the best navigational matches
    pub top_hits: Vec<Suggestion>,
    /// Phrases and websites from the remote search API
    pub duckduckgo_suggestions: Vec<Suggestion>,
    /// Bookmarks, history entries, internal pages and open tabs
    pub local_suggestions: Vec<Suggestion>,
}

impl SuggestionResult {
    pub fn empty() -> Self {
        Self::default()
    }

    /// All suggestions in display order
    pub fn all(&self) -> Vec<&Suggestion> {
        self.top_hits
            .iter()
            .chain(self.duckduckgo_suggestions.iter())
            .chain(self.local_suggestions.iter())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.top_hits.len() + self.duckduckgo_suggestions.len() + self.local_suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
