//! Configuration for the retrieval orchestrator.

use serde::{Deserialize, Serialize};

/// Configuration for query processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Minimum similarity a candidate must reach to count as a match.
    pub similarity_threshold: f32,

    /// Maximum number of candidates requested from the store.
    pub max_candidates: usize,

    /// What to do when the catalog search itself fails.
    pub search_failure: SearchFailurePolicy,
}

impl QueryConfig {
    /// Set the similarity threshold.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Set the maximum candidate count.
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// Set the search failure policy.
    pub fn with_search_failure(mut self, policy: SearchFailurePolicy) -> Self {
        self.search_failure = policy;
        self
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.5,
            max_candidates: 4,
            search_failure: SearchFailurePolicy::DegradeToNoMatch,
        }
    }
}

/// Behavior when the catalog store errors during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchFailurePolicy {
    /// Treat a store failure as an empty candidate list and take the
    /// fallback path. A warning is logged so outages are not silent.
    DegradeToNoMatch,

    /// Propagate the store failure to the caller as a hard error.
    Propagate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = QueryConfig::default();
        assert_eq!(config.similarity_threshold, 0.5);
        assert_eq!(config.max_candidates, 4);
        assert_eq!(config.search_failure, SearchFailurePolicy::DegradeToNoMatch);
    }

    #[test]
    fn test_builder_setters() {
        let config = QueryConfig::default()
            .with_threshold(0.7)
            .with_max_candidates(2)
            .with_search_failure(SearchFailurePolicy::Propagate);

        assert_eq!(config.similarity_threshold, 0.7);
        assert_eq!(config.max_candidates, 2);
        assert_eq!(config.search_failure, SearchFailurePolicy::Propagate);
    }
}
