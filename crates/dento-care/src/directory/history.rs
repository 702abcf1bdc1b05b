use std::collections::VecDeque;

use crate::config::DEFAULT_SEARCH_HISTORY_LIMIT;

/// Most-recent-first list of distinct search terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistory {
    terms: VecDeque<String>,
    limit: usize,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::with_limit(DEFAULT_SEARCH_HISTORY_LIMIT)
    }
}

impl SearchHistory {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            terms: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Records a term. Empty and already-remembered terms leave the history untouched.
    pub fn record(&mut self, term: &str) -> bool {
        if term.is_empty() || self.terms.iter().any(|known| known == term) {
            return false;
        }

        self.terms.push_front(term.to_string());
        self.terms.truncate(self.limit);
        true
    }

    pub fn terms(&self) -> Vec<String> {
        self.terms.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_term_comes_first() {
        let mut history = SearchHistory::default();
        history.record("ألم");
        history.record("تبييض");
        assert_eq!(history.terms(), vec!["تبييض", "ألم"]);
    }

    #[test]
    fn repeated_terms_keep_their_position() {
        let mut history = SearchHistory::default();
        history.record("ألم");
        history.record("تبييض");
        assert!(!history.record("ألم"));
        assert_eq!(history.terms(), vec!["تبييض", "ألم"]);
    }

    #[test]
    fn empty_terms_are_ignored() {
        let mut history = SearchHistory::default();
        assert!(!history.record(""));
        assert!(history.is_empty());
    }

    #[test]
    fn oldest_terms_drop_off_at_the_limit() {
        let mut history = SearchHistory::with_limit(3);
        for term in ["a", "b", "c", "d"] {
            history.record(term);
        }
        assert_eq!(history.terms(), vec!["d", "c", "b"]);
        assert_eq!(history.len(), 3);
    }
}
