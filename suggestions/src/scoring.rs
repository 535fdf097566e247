//! Relevance scoring for local suggestion candidates.
//!
//! The pipeline only depends on the [`Tokenizer`] and [`Scorer`] traits; the
//! [`ScoringService`] is the default implementation. A score of 0 or less
//! means the candidate does not match the query.

use address_bar_core::*;

pub type Token = String;

/// Splits a query into tokens
pub trait Tokenizer: Send + Sync {
    fn tokens(&self, query: &str) -> Vec<Token>;
}

/// Scores one local record against a lowercased query
pub trait Scorer: Send + Sync {
    fn score_bookmark(&self, bookmark: &Bookmark, query: &str, tokens: &[Token]) -> i64;

    fn score_history_entry(&self, entry: &HistorySuggestion, query: &str, tokens: &[Token]) -> i64;

    fn score_internal_page(&self, page: &InternalPage, query: &str, tokens: &[Token]) -> i64;

    fn score_tab(&self, tab: &BrowserTab, query: &str) -> i64;
}

const NAKED_URL_PREFIX_SCORE: i64 = 300;
const TITLE_PREFIX_SCORE: i64 = 200;
const TITLE_WORD_SCORE: i64 = 100;
const ROOT_URL_BONUS: i64 = 2000;
const ALL_TOKENS_SCORE: i64 = 10;
const FIRST_TOKEN_URL_BONUS: i64 = 70;
const FIRST_TOKEN_TITLE_BONUS: i64 = 50;
/// Text match weight is shifted above the whole `u32` visit range so visits only break ties
const VISIT_COUNT_SHIFT: u32 = u32::BITS;

/// Default tokenizer and scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringService;

impl ScoringService {
    pub fn new() -> Self {
        Self
    }

    /// Score a title/URL pair against a lowercased query.
    ///
    /// `tokens` are computed from the query when not supplied.
    pub fn score(
        title: Option<&str>,
        url: &Url,
        visit_count: u32,
        lowercased_query: &str,
        tokens: Option<&[Token]>,
    ) -> i64 {
        if lowercased_query.trim().is_empty() {
            return 0;
        }

        let owned_tokens;
        let tokens = match tokens {
            Some(tokens) => tokens,
            None => {
                owned_tokens = tokenize(lowercased_query);
                &owned_tokens
            }
        };

        let title = title.unwrap_or_default().to_lowercase();
        // Matching ignores case, dedup keeps using the case-exact naked form
        let naked = url.naked().to_lowercase();
        let mut score = 0i64;

        if naked.starts_with(lowercased_query) {
            score += NAKED_URL_PREFIX_SCORE;
            if url.is_root() {
                score += ROOT_URL_BONUS;
            }
        } else if starts_at_boundary(&title, lowercased_query) {
            score += TITLE_PREFIX_SCORE;
            if url.is_root() {
                score += ROOT_URL_BONUS;
            }
        } else if starts_any_word(&title, lowercased_query) {
            score += TITLE_WORD_SCORE;
        }

        if tokens.len() > 1 {
            let matches_all_tokens = tokens
                .iter()
                .all(|token| starts_any_word(&title, token) || naked.starts_with(token.as_str()));

            if matches_all_tokens {
                score += ALL_TOKENS_SCORE;

                let first = tokens[0].as_str();
                if naked.starts_with(first) {
                    score += FIRST_TOKEN_URL_BONUS;
                } else if starts_at_boundary(&title, first) {
                    score += FIRST_TOKEN_TITLE_BONUS;
                }
            }
        }

        if score > 0 {
            (score << VISIT_COUNT_SHIFT) + i64::from(visit_count)
        } else {
            score
        }
    }
}

impl Tokenizer for ScoringService {
    fn tokens(&self, query: &str) -> Vec<Token> {
        tokenize(query)
    }
}

impl Scorer for ScoringService {
    fn score_bookmark(&self, bookmark: &Bookmark, query: &str, tokens: &[Token]) -> i64 {
        match bookmark.parsed_url() {
            Ok(url) => Self::score(Some(&bookmark.title), &url, 0, query, Some(tokens)),
            Err(_) => 0,
        }
    }

    fn score_history_entry(&self, entry: &HistorySuggestion, query: &str, tokens: &[Token]) -> i64 {
        Self::score(
            entry.title.as_deref(),
            &entry.url,
            entry.number_of_visits,
            query,
            Some(tokens),
        )
    }

    fn score_internal_page(&self, page: &InternalPage, query: &str, tokens: &[Token]) -> i64 {
        Self::score(Some(&page.title), &page.url, 0, query, Some(tokens))
    }

    fn score_tab(&self, tab: &BrowserTab, query: &str) -> i64 {
        Self::score(Some(&tab.title), &tab.url, 0, query, None)
    }
}

fn tokenize(query: &str) -> Vec<Token> {
    query.split_whitespace().map(str::to_string).collect()
}

/// `text` starts with `needle`, optionally after leading punctuation such as quotes
fn starts_at_boundary(text: &str, needle: &str) -> bool {
    text.starts_with(needle)
        || text
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .starts_with(needle)
}

/// `needle` starts at the beginning of `text` or right after a whitespace
fn starts_any_word(text: &str, needle: &str) -> bool {
    starts_at_boundary(text, needle)
        || text
            .char_indices()
            .filter(|(_, c)| c.is_whitespace())
            .any(|(i, c)| starts_at_boundary(&text[i + c.len_utf8()..], needle))
}
