//! Suggestion Processing Module
//!
//! Orders and filters suggestions coming from history, bookmarks, internal
//! pages, open tabs and the remote search API into a [`SuggestionResult`].
//!
//! The pipeline is a pure function of its inputs:
//! 1. Score local records, drop non-matches and rank them (open tabs first)
//! 2. Append navigational (website) suggestions from the remote API
//! 3. Replace history entries by a bookmark or tab with the same naked URL
//! 4. Drop duplicates and cap the navigational list by query length
//! 5. Split off top hits, then share the remaining budget between groups

use crate::api::ApiResult;
use crate::config::SuggestionsConfig;
use crate::result::SuggestionResult;
use crate::scoring::{Scorer, ScoringService, Token, Tokenizer};
use crate::suggestion::Suggestion;
use address_bar_core::*;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, trace};

/// A suggestion together with its top hits eligibility
#[derive(Debug, Clone, PartialEq, Eq)]
struct EligibleSuggestion {
    suggestion: Suggestion,
    allowed_in_top_hits: bool,
}

/// One local record, used while scoring
#[derive(Debug, Clone, Copy)]
enum LocalSuggestion<'a> {
    Bookmark(&'a Bookmark),
    History(&'a HistorySuggestion),
    InternalPage(&'a InternalPage),
    OpenTab(&'a BrowserTab),
}

impl<'a> LocalSuggestion<'a> {
    fn score(&self, scorer: &dyn Scorer, query: &str, tokens: &[Token]) -> i64 {
        match self {
            Self::Bookmark(bookmark) => scorer.score_bookmark(bookmark, query, tokens),
            Self::History(entry) => scorer.score_history_entry(entry, query, tokens),
            Self::InternalPage(page) => scorer.score_internal_page(page, query, tokens),
            Self::OpenTab(tab) => scorer.score_tab(tab, query),
        }
    }

    fn is_open_tab(&self) -> bool {
        matches!(self, Self::OpenTab(_))
    }

    fn is_allowed_in_top_hits(&self, platform: Platform, min_visits: u32) -> bool {
        match self {
            Self::History(entry) => {
                let visits_are_low = entry.number_of_visits < min_visits;
                !(entry.failed_to_load || (visits_are_low && !entry.url.is_root()))
            }
            Self::Bookmark(bookmark) => match platform {
                Platform::Desktop => bookmark.is_favorite,
                Platform::Mobile => true,
            },
            Self::InternalPage(_) | Self::OpenTab(_) => false,
        }
    }

    fn to_suggestion(self, score: i64) -> Option<Suggestion> {
        match self {
            Self::Bookmark(bookmark) => Suggestion::from_bookmark(bookmark, score),
            Self::History(entry) => Some(Suggestion::from_history_entry(entry, score)),
            Self::InternalPage(page) => Some(Suggestion::from_internal_page(page, score)),
            Self::OpenTab(tab) => Some(Suggestion::from_tab(tab, score)),
        }
    }
}

/// Encapsulates the whole ordering and filtering algorithm
pub struct SuggestionProcessing {
    platform: Platform,
    config: SuggestionsConfig,
    tokenizer: Arc<dyn Tokenizer>,
    scorer: Arc<dyn Scorer>,
}

impl SuggestionProcessing {
    /// Create a processor with the default scorer and limits
    pub fn new(platform: Platform) -> Self {
        let scoring = Arc::new(ScoringService::new());
        Self {
            platform,
            config: SuggestionsConfig::default(),
            tokenizer: scoring.clone(),
            scorer: scoring,
        }
    }

    pub fn with_config(mut self, config: SuggestionsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_scoring(mut self, tokenizer: Arc<dyn Tokenizer>, scorer: Arc<dyn Scorer>) -> Self {
        self.tokenizer = tokenizer;
        self.scorer = scorer;
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn config(&self) -> &SuggestionsConfig {
        &self.config
    }

    /// Compute the grouped suggestions for a query.
    ///
    /// A missing API result only means there are no remote suggestions.
    pub fn result(
        &self,
        query: &str,
        history: &[HistorySuggestion],
        bookmarks: &[Bookmark],
        internal_pages: &[InternalPage],
        open_tabs: &[BrowserTab],
        api_result: Option<&ApiResult>,
    ) -> SuggestionResult {
        let query = query.to_lowercase();

        let duckduckgo_suggestions = api_result.map(ApiResult::suggestions).unwrap_or_default();

        // The API marks navigational items explicitly, so websites are the domain suggestions
        let domain_suggestions = duckduckgo_suggestions
            .iter()
            .filter(|suggestion| matches!(suggestion, Suggestion::Website { .. }))
            .map(|suggestion| EligibleSuggestion {
                suggestion: suggestion.clone(),
                allowed_in_top_hits: true,
            });

        let mut navigational_suggestions =
            self.local_suggestions(&query, history, bookmarks, internal_pages, open_tabs);
        navigational_suggestions.truncate(self.config.local_candidate_limit);
        navigational_suggestions.extend(domain_suggestions);

        // Length in chars, so a combining mark counts on its own
        let max_navigational = self.config.max_navigational(query.chars().count());
        let expanded = replace_history_with_bookmarks_and_tabs(navigational_suggestions);

        let mut deduped = dedup_local_suggestions(expanded);
        deduped.truncate(max_navigational);

        let top_hits = self.top_hits(&deduped);
        let local_suggestions: Vec<Suggestion> = deduped
            .into_iter()
            .skip(top_hits.len())
            .map(|item| item.suggestion)
            .filter(Suggestion::is_local)
            .collect();

        let duckduckgo_suggestions = remove_duplicate_website_suggestions(&top_hits, duckduckgo_suggestions);

        let result = self.make_result(top_hits, duckduckgo_suggestions, local_suggestions);
        debug!(
            "Suggestions for '{}': {} top hits, {} remote, {} local",
            query,
            result.top_hits.len(),
            result.duckduckgo_suggestions.len(),
            result.local_suggestions.len()
        );
        result
    }

    /// Score, filter and rank local records
    fn local_suggestions(
        &self,
        query: &str,
        history: &[HistorySuggestion],
        bookmarks: &[Bookmark],
        internal_pages: &[InternalPage],
        open_tabs: &[BrowserTab],
    ) -> Vec<EligibleSuggestion> {
        let tokens = self.tokenizer.tokens(query);

        // Concatenation order is the tie-break order of the stable sort below
        let mut scored: Vec<(LocalSuggestion<'_>, i64)> = bookmarks
            .iter()
            .map(LocalSuggestion::Bookmark)
            .chain(open_tabs.iter().map(LocalSuggestion::OpenTab))
            .chain(history.iter().map(LocalSuggestion::History))
            .chain(internal_pages.iter().map(LocalSuggestion::InternalPage))
            .map(|local| (local, local.score(self.scorer.as_ref(), query, &tokens)))
            .filter(|(local, score)| {
                if *score <= 0 {
                    trace!("Dropping non-matching candidate {:?}", local);
                }
                *score > 0
            })
            .collect();

        scored.sort_by(|(a, a_score), (b, b_score)| match (a.is_open_tab(), b.is_open_tab()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => b_score.cmp(a_score),
        });

        scored
            .into_iter()
            .filter_map(|(local, score)| {
                let allowed_in_top_hits =
                    local.is_allowed_in_top_hits(self.platform, self.config.min_visits_for_top_hits);
                local.to_suggestion(score).map(|suggestion| EligibleSuggestion {
                    suggestion,
                    allowed_in_top_hits,
                })
            })
            .collect()
    }

    /// Leading run of eligible suggestions, capped at the top hits limit
    fn top_hits(&self, suggestions: &[EligibleSuggestion]) -> Vec<Suggestion> {
        suggestions
            .iter()
            .take_while(|item| item.allowed_in_top_hits)
            .take(self.config.max_top_hits)
            .map(|item| item.suggestion.clone())
            .collect()
    }

    fn make_result(
        &self,
        top_hits: Vec<Suggestion>,
        mut duckduckgo_suggestions: Vec<Suggestion>,
        mut local_suggestions: Vec<Suggestion>,
    ) -> SuggestionResult {
        debug_assert!(top_hits.len() <= self.config.max_top_hits);

        let mut total = top_hits.len();

        // Local suggestions leave room for at least `min_group_size` remote ones
        let local_slots = self
            .config
            .max_suggestions
            .saturating_sub(total + self.config.min_group_size);
        local_suggestions.truncate(local_slots);
        total += local_suggestions.len();

        duckduckgo_suggestions.truncate(self.config.max_suggestions.saturating_sub(total));

        SuggestionResult {
            top_hits,
            duckduckgo_suggestions,
            local_suggestions,
        }
    }
}

/// Show a bookmark or tab in place of a history entry with the same naked URL
fn replace_history_with_bookmarks_and_tabs(suggestions: Vec<EligibleSuggestion>) -> Vec<EligibleSuggestion> {
    suggestions
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let Suggestion::HistoryEntry { url, .. } = &item.suggestion else {
                return item.clone();
            };
            let naked = url.naked();

            suggestions[index..]
                .iter()
                .find(|candidate| {
                    (candidate.suggestion.is_bookmark() || candidate.suggestion.is_open_tab())
                        && candidate.suggestion.url().map(UrlExt::naked).as_deref() == Some(naked.as_str())
                })
                .unwrap_or(item)
                .clone()
        })
        .collect()
}

/// Keep the first occurrence of every suggestion
fn dedup_local_suggestions(suggestions: Vec<EligibleSuggestion>) -> Vec<EligibleSuggestion> {
    suggestions.into_iter().fold(Vec::new(), |mut kept, item| {
        if kept.iter().any(|k: &EligibleSuggestion| item.suggestion.duplicates(&k.suggestion)) {
            trace!("Dropping duplicate suggestion {:?}", item.suggestion);
        } else {
            kept.push(item);
        }
        kept
    })
}

/// Remove websites already shown as top hits
fn remove_duplicate_website_suggestions(top_hits: &[Suggestion], suggestions: Vec<Suggestion>) -> Vec<Suggestion> {
    suggestions
        .into_iter()
        .filter(|suggestion| !(matches!(suggestion, Suggestion::Website { .. }) && top_hits.contains(suggestion)))
        .collect()
}
