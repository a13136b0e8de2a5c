//! Title search
//!
//! The engine only supplies candidate titles; ranking is delegated to a
//! [`Matcher`]. [`TokenMatcher`] is a lexical default that needs no model.
//! Catalog titles carry their node ID; allergen names have none.

use menu_catalog::NodeId;
use std::collections::HashSet;

/// A searchable title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Node the title belongs to, if any
    pub id: Option<NodeId>,
    /// Display title
    pub title: String,
}

impl Candidate {
    /// Candidate for a catalog node
    #[must_use]
    pub fn new(id: NodeId, title: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            title: title.into(),
        }
    }

    /// Candidate with no node behind it
    #[must_use]
    pub fn named(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
        }
    }
}

/// Candidate with its match score, higher is better
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    /// Matched candidate
    pub candidate: Candidate,
    /// Score in `(0, 1]`
    pub score: f64,
}

/// Ranks candidates against a free-text query
pub trait Matcher: Send + Sync {
    /// Matching candidates, best first; non-matches are omitted
    fn rank(&self, query: &str, candidates: &[Candidate]) -> Vec<ScoredCandidate>;

    /// Single best match
    fn best_match(&self, query: &str, candidates: &[Candidate]) -> Option<Candidate> {
        self.rank(query, candidates)
            .into_iter()
            .next()
            .map(|s| s.candidate)
    }
}

/// Token-overlap matcher
///
/// Text is lowercased and every non-alphanumeric or non-ASCII character
/// becomes a separator. The score is the Jaccard overlap of the token sets.
/// Ties keep candidate order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenMatcher;

impl TokenMatcher {
    fn tokens(text: &str) -> HashSet<String> {
        text.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    ' '
                }
            })
            .collect::<String>()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

impl Matcher for TokenMatcher {
    fn rank(&self, query: &str, candidates: &[Candidate]) -> Vec<ScoredCandidate> {
        let query = Self::tokens(query);
        if query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<ScoredCandidate> = candidates
            .iter()
            .filter_map(|c| {
                let title = Self::tokens(&c.title);
                let shared = query.intersection(&title).count();
                if shared == 0 {
                    return None;
                }
                let union = query.union(&title).count();
                Some(ScoredCandidate {
                    candidate: c.clone(),
                    score: shared as f64 / union as f64,
                })
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<Candidate> {
        vec![
            Candidate::new(NodeId(1), "Big Mac"),
            Candidate::new(NodeId(2), "Big Mac Meal"),
            Candidate::new(NodeId(3), "Café Latte"),
            Candidate::new(NodeId(4), "Fries"),
        ]
    }

    #[test]
    fn exact_title_ranks_first() {
        let ranked = TokenMatcher.rank("big mac", &candidates());
        let ids: Vec<i64> = ranked
            .iter()
            .filter_map(|s| s.candidate.id)
            .map(NodeId::get)
            .collect();
        assert_eq!(ids, vec![1, 2]);
        assert!((ranked[0].score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn non_ascii_splits_tokens() {
        let best = TokenMatcher.best_match("LATTE!", &candidates()).unwrap();
        assert_eq!(best.id, Some(NodeId(3)));
    }

    #[test]
    fn named_candidates_rank_like_titles() {
        let names = vec![Candidate::named("Brioche bread"), Candidate::named("Beef patty")];
        let best = TokenMatcher.best_match("beef", &names).unwrap();
        assert_eq!(best, Candidate::named("Beef patty"));
        assert_eq!(best.id, None);
    }

    #[test]
    fn no_overlap_no_match() {
        assert!(TokenMatcher.best_match("salad", &candidates()).is_none());
        assert!(TokenMatcher.rank("  ", &candidates()).is_empty());
    }
}
