use address_bar_core::*;

/// Limits applied while building a [`SuggestionResult`](crate::SuggestionResult)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestionsConfig {
    /// Upper bound for all groups combined
    pub max_suggestions: usize,
    /// Upper bound for the top hits group
    pub max_top_hits: usize,
    /// Slots kept free for remote suggestions when local ones are plentiful
    pub min_group_size: usize,
    /// Scored local candidates beyond this rank are dropped before merging
    pub local_candidate_limit: usize,
    /// History entries visited fewer times than this only reach top hits when they are a site root
    pub min_visits_for_top_hits: u32,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 12,
            max_top_hits: 2,
            min_group_size: 5,
            local_candidate_limit: 100,
            min_visits_for_top_hits: 4,
        }
    }
}

impl SuggestionsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_suggestions == 0 {
            return Err(SuggestionsError::Configuration {
                details: "maxSuggestions must be greater than zero".to_string(),
            });
        }
        if self.max_top_hits > self.max_suggestions {
            return Err(SuggestionsError::Configuration {
                details: format!(
                    "maxTopHits ({}) exceeds maxSuggestions ({})",
                    self.max_top_hits, self.max_suggestions
                ),
            });
        }
        if self.min_group_size > self.max_suggestions {
            return Err(SuggestionsError::Configuration {
                details: format!(
                    "minGroupSize ({}) exceeds maxSuggestions ({})",
                    self.min_group_size, self.max_suggestions
                ),
            });
        }
        Ok(())
    }

    /// Ceiling for navigational suggestions given the query length in characters
    pub fn max_navigational(&self, query_length: usize) -> usize {
        self.max_suggestions
            .saturating_sub(self.min_group_size)
            .min(query_length + 1)
    }
}
