//! Remote suggestion payload.
//!
//! The search API answers with a JSON array of `{"phrase": ..., "isNav": ...}`
//! objects. Fetching it is the caller's job; this module only decodes it.

use crate::suggestion::Suggestion;
use address_bar_core::*;

/// One entry of the remote payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSuggestion {
    #[serde(default)]
    pub phrase: Option<String>,
    #[serde(default)]
    pub is_nav: Option<bool>,
}

impl ApiSuggestion {
    pub fn phrase(phrase: impl Into<String>) -> Self {
        Self {
            phrase: Some(phrase.into()),
            is_nav: Some(false),
        }
    }

    pub fn navigational(phrase: impl Into<String>) -> Self {
        Self {
            phrase: Some(phrase.into()),
            is_nav: Some(true),
        }
    }
}

/// Decoded remote payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiResult {
    pub items: Vec<ApiSuggestion>,
}

impl ApiResult {
    pub fn new(items: Vec<ApiSuggestion>) -> Self {
        Self { items }
    }

    /// Decode a payload fetched by the caller
    pub fn from_json(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Suggestions for every item that carries a phrase, in payload order
    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.items
            .iter()
            .filter_map(|item| {
                let phrase = item.phrase.as_deref()?;
                Some(Suggestion::from_phrase(phrase, item.is_nav.unwrap_or(false)))
            })
            .collect()
    }
}
