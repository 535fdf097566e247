//! Property-based tests for the suggestion pipeline
//!
//! Inputs are drawn from small title and URL pools so that duplicates,
//! score ties and naked-URL collisions show up often.

use proptest::prelude::*;
use std::sync::Arc;
use suggestions::*;

// ============================================================================
// Test Data Generators
// ============================================================================

/// Scores every record by title length, short titles do not match
#[derive(Debug, Default)]
struct TitleLengthScorer;

impl TitleLengthScorer {
    fn score_title(title: &str) -> i64 {
        title.chars().count() as i64 - 4
    }
}

impl Scorer for TitleLengthScorer {
    fn score_bookmark(&self, bookmark: &Bookmark, _query: &str, _tokens: &[Token]) -> i64 {
        Self::score_title(&bookmark.title)
    }

    fn score_history_entry(&self, entry: &HistorySuggestion, _query: &str, _tokens: &[Token]) -> i64 {
        Self::score_title(entry.title.as_deref().unwrap_or_default())
    }

    fn score_internal_page(&self, page: &InternalPage, _query: &str, _tokens: &[Token]) -> i64 {
        Self::score_title(&page.title)
    }

    fn score_tab(&self, tab: &BrowserTab, _query: &str) -> i64 {
        Self::score_title(&tab.title)
    }
}

fn arb_url() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "https://example.com",
        "http://www.example.com/",
        "https://example.com/page",
        "https://example.com/page?query=1",
        "https://rust-lang.org",
        "https://www.rust-lang.org/learn",
        "http://rust-lang.org/learn/",
        "https://github.com",
        "https://github.com/rust-lang/rust",
        "https://docs.rs",
        "https://crates.io",
    ])
    .prop_map(|s| s.to_string())
}

fn arb_title() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Ex",
        "Docs",
        "Crates",
        "Rust Book",
        "Example Domain",
        "GitHub Home",
        "Learn Rust Today",
    ])
    .prop_map(|s| s.to_string())
}

fn arb_platform() -> impl Strategy<Value = Platform> {
    prop_oneof![Just(Platform::Desktop), Just(Platform::Mobile)]
}

fn arb_bookmark() -> impl Strategy<Value = Bookmark> {
    (arb_title(), arb_url(), any::<bool>())
        .prop_map(|(title, url, is_favorite)| Bookmark::new(&title, &url, is_favorite))
}

fn arb_history_entry() -> impl Strategy<Value = HistorySuggestion> {
    (arb_title(), arb_url(), 0u32..10, any::<bool>()).prop_map(|(title, url, visits, failed)| {
        let entry = HistorySuggestion::new(Some(&title), &url, visits).unwrap();
        if failed {
            entry.failed()
        } else {
            entry
        }
    })
}

fn arb_tab() -> impl Strategy<Value = BrowserTab> {
    (arb_title(), arb_url()).prop_map(|(title, url)| BrowserTab::new(&title, &url).unwrap())
}

fn arb_internal_page() -> impl Strategy<Value = InternalPage> {
    (arb_title(), prop::sample::select(vec!["duck://settings", "duck://bookmarks"]))
        .prop_map(|(title, url)| InternalPage::new(&title, url).unwrap())
}

fn arb_api_result() -> impl Strategy<Value = ApiResult> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["example.com", "rust-lang.org", "rust book", "docs", "github.com"]),
            any::<bool>(),
        ),
        0..10,
    )
    .prop_map(|items| {
        ApiResult::new(
            items
                .into_iter()
                .map(|(phrase, is_nav)| {
                    if is_nav {
                        ApiSuggestion::navigational(phrase)
                    } else {
                        ApiSuggestion::phrase(phrase)
                    }
                })
                .collect(),
        )
    })
}

#[derive(Debug, Clone)]
struct Inputs {
    platform: Platform,
    query: String,
    history: Vec<HistorySuggestion>,
    bookmarks: Vec<Bookmark>,
    internal_pages: Vec<InternalPage>,
    open_tabs: Vec<BrowserTab>,
    api_result: Option<ApiResult>,
}

impl Inputs {
    fn result(&self) -> SuggestionResult {
        SuggestionProcessing::new(self.platform)
            .with_scoring(Arc::new(ScoringService::new()), Arc::new(TitleLengthScorer))
            .result(
                &self.query,
                &self.history,
                &self.bookmarks,
                &self.internal_pages,
                &self.open_tabs,
                self.api_result.as_ref(),
            )
    }

    fn is_eligible(&self, suggestion: &Suggestion) -> bool {
        match suggestion {
            Suggestion::Bookmark { is_favorite, .. } => *is_favorite || self.platform == Platform::Mobile,
            Suggestion::HistoryEntry { title, url, .. } => self.history.iter().any(|entry| {
                entry.title == *title
                    && entry.url == *url
                    && !entry.failed_to_load
                    && (entry.number_of_visits >= 4 || entry.url.is_root())
            }),
            Suggestion::InternalPage { .. } | Suggestion::OpenTab { .. } => false,
            Suggestion::Website { .. } => true,
            Suggestion::Phrase { .. } | Suggestion::Unknown { .. } => false,
        }
    }
}

fn arb_inputs() -> impl Strategy<Value = Inputs> {
    (
        arb_platform(),
        "[a-z]{0,12}",
        prop::collection::vec(arb_history_entry(), 0..20),
        prop::collection::vec(arb_bookmark(), 0..20),
        prop::collection::vec(arb_internal_page(), 0..3),
        prop::collection::vec(arb_tab(), 0..6),
        prop::option::of(arb_api_result()),
    )
        .prop_map(
            |(platform, query, history, bookmarks, internal_pages, open_tabs, api_result)| Inputs {
                platform,
                query,
                history,
                bookmarks,
                internal_pages,
                open_tabs,
                api_result,
            },
        )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The three groups never exceed the shared budget
    #[test]
    fn prop_output_budget(inputs in arb_inputs()) {
        let result = inputs.result();

        prop_assert!(result.top_hits.len() <= 2);
        prop_assert!(result.count() <= 12);
        prop_assert!(result.local_suggestions.len() <= 12 - (result.top_hits.len() + 5));
    }

    /// Groups only carry the kinds they are meant for
    #[test]
    fn prop_groups_hold_expected_kinds(inputs in arb_inputs()) {
        let result = inputs.result();

        prop_assert!(result.local_suggestions.iter().all(Suggestion::is_local));
        prop_assert!(result
            .duckduckgo_suggestions
            .iter()
            .all(|s| matches!(s, Suggestion::Phrase { .. } | Suggestion::Website { .. })),
            "duckduckgo group holds only phrase/website suggestions");
    }

    /// Every top hit is eligible and the first remaining local suggestion is not
    #[test]
    fn prop_top_hits_are_an_eligible_prefix(inputs in arb_inputs()) {
        let result = inputs.result();

        for hit in &result.top_hits {
            prop_assert!(inputs.is_eligible(hit), "ineligible top hit {:?}", hit);
        }

        if result.top_hits.len() < 2 {
            if let Some(first_local) = result.local_suggestions.first() {
                let blocked = match first_local {
                    Suggestion::HistoryEntry { title, url, .. } => inputs.history.iter().any(|entry| {
                        entry.title == *title
                            && entry.url == *url
                            && (entry.failed_to_load || (entry.number_of_visits < 4 && !entry.url.is_root()))
                    }),
                    other => !inputs.is_eligible(other),
                };
                prop_assert!(blocked, "eligible suggestion {:?} left out of top hits", first_local);
            }
        }
    }

    /// Open tabs lead the local suggestions and keep everything else out of top hits
    #[test]
    fn prop_open_tabs_first(inputs in arb_inputs()) {
        let result = inputs.result();

        let first_non_tab = result
            .local_suggestions
            .iter()
            .position(|s| !s.is_open_tab())
            .unwrap_or(result.local_suggestions.len());
        prop_assert!(result.local_suggestions[first_non_tab..].iter().all(|s| !s.is_open_tab()));

        if result.local_suggestions.first().is_some_and(Suggestion::is_open_tab) {
            prop_assert!(result.top_hits.is_empty());
        }
    }

    /// No local suggestion repeats an earlier one
    #[test]
    fn prop_no_duplicates_remain(inputs in arb_inputs()) {
        let result = inputs.result();
        let shown: Vec<&Suggestion> = result
            .top_hits
            .iter()
            .chain(result.local_suggestions.iter())
            .collect();

        for (index, later) in shown.iter().enumerate() {
            for earlier in &shown[..index] {
                prop_assert!(!later.duplicates(earlier), "{:?} repeats {:?}", later, earlier);
            }
        }
    }

    /// Remote websites already shown as top hits are not repeated
    #[test]
    fn prop_top_hit_websites_not_repeated(inputs in arb_inputs()) {
        let result = inputs.result();

        for remote in &result.duckduckgo_suggestions {
            if matches!(remote, Suggestion::Website { .. }) {
                prop_assert!(!result.top_hits.contains(remote));
            }
        }
    }

    /// The same inputs always give the same output
    #[test]
    fn prop_result_is_deterministic(inputs in arb_inputs()) {
        prop_assert_eq!(inputs.result(), inputs.result());
    }

    /// A history entry is shown as the bookmark sharing its naked URL
    #[test]
    fn prop_history_promoted_to_bookmark(
        platform in arb_platform(),
        history_url in prop::sample::select(vec!["https://docs.rs/std", "http://www.docs.rs/std/"]),
        bookmark_url in prop::sample::select(vec!["https://docs.rs/std", "https://www.docs.rs/std"]),
        is_favorite in any::<bool>(),
        visits in 0u32..10,
    ) {
        let inputs = Inputs {
            platform,
            query: "docs".to_string(),
            history: vec![HistorySuggestion::new(Some("Standard Library Docs"), history_url, visits).unwrap()],
            bookmarks: vec![Bookmark::new("Std Docs", bookmark_url, is_favorite)],
            internal_pages: vec![],
            open_tabs: vec![],
            api_result: None,
        };
        let result = inputs.result();
        let shown: Vec<&Suggestion> = result.all();

        prop_assert!(shown.iter().all(|s| !s.is_history_entry()));
        prop_assert_eq!(shown.iter().filter(|s| s.is_bookmark()).count(), 1);
    }
}
