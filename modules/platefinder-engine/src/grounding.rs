use std::collections::HashMap;

use tracing::debug;

use platefinder_common::{normalize_name, CandidateRecord, GroundingEntry, VerifiedRestaurant};

use crate::traits::GroundingHint;

/// Lookup from normalized venue name to authoritative grounding fact. Built
/// per call from that call's own grounding side channel; never shared.
#[derive(Debug, Default)]
pub struct GroundingIndex {
    entries: HashMap<String, GroundingEntry>,
}

impl GroundingIndex {
    /// Later hints with the same normalized key overwrite earlier ones,
    /// mirroring the upstream side channel offering one hint per distinct
    /// matched entity.
    pub fn from_hints(hints: &[GroundingHint]) -> Self {
        let mut entries = HashMap::new();
        for hint in hints {
            entries.insert(
                normalize_name(&hint.title),
                GroundingEntry {
                    title: hint.title.clone(),
                    uri: hint.uri.clone(),
                },
            );
        }
        Self { entries }
    }

    /// Resolve a candidate name. Entries with an empty URI never verify
    /// anything.
    pub fn resolve(&self, name: &str) -> Option<&GroundingEntry> {
        self.entries
            .get(&normalize_name(name))
            .filter(|entry| !entry.uri.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Join candidates against the index. A candidate that does not resolve is
/// silently excluded — the model commonly names venues grounding did not
/// independently confirm, and an unverified venue must never be shown with a
/// synthesized or guessed link.
pub fn verify(candidates: Vec<CandidateRecord>, index: &GroundingIndex) -> Vec<VerifiedRestaurant> {
    let mut verified = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let Some(entry) = index.resolve(&candidate.name) else {
            debug!(name = %candidate.name, "Candidate has no grounding entry, dropping");
            continue;
        };

        let name = if entry.title.is_empty() {
            candidate.name.clone()
        } else {
            entry.title.clone()
        };

        verified.push(VerifiedRestaurant {
            name,
            quality_score: candidate.quality_score,
            rating: candidate.rating,
            review_count: candidate.review_count,
            pros: candidate.pros,
            cons: candidate.cons,
            maps_uri: entry.uri.clone(),
        });
    }

    verified
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{candidate, hint};

    #[test]
    fn index_is_case_and_whitespace_insensitive() {
        let index = GroundingIndex::from_hints(&[hint("Ramen House", "maps://1")]);
        assert!(index.resolve("  ramen house ").is_some());
        assert!(index.resolve("RAMEN HOUSE").is_some());
        assert!(index.resolve("Ramen Shack").is_none());
    }

    #[test]
    fn later_hints_overwrite_earlier() {
        let index = GroundingIndex::from_hints(&[
            hint("Ramen House", "maps://old"),
            hint("ramen house", "maps://new"),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.resolve("Ramen House").unwrap().uri, "maps://new");
    }

    #[test]
    fn empty_uri_never_resolves() {
        let index = GroundingIndex::from_hints(&[hint("Ramen House", "")]);
        assert!(index.resolve("Ramen House").is_none());
    }

    #[test]
    fn unmatched_candidates_are_dropped() {
        let index = GroundingIndex::from_hints(&[hint("Ramen House", "maps://1")]);
        let verified = verify(
            vec![candidate("Ramen House", 1200), candidate("Invented Bistro", 50)],
            &index,
        );
        assert_eq!(verified.len(), 1);
        assert_eq!(verified[0].maps_uri, "maps://1");
    }

    #[test]
    fn grounding_title_becomes_display_name() {
        let index = GroundingIndex::from_hints(&[hint("Ramen House", "maps://1")]);
        let verified = verify(vec![candidate("ramen house", 1200)], &index);
        assert_eq!(verified[0].name, "Ramen House");
    }

    #[test]
    fn empty_grounding_title_falls_back_to_candidate_name() {
        let index = GroundingIndex::from_hints(&[GroundingHint {
            title: String::new(),
            uri: "maps://1".to_string(),
        }]);
        // Candidate whose normalized name is the empty string matches the
        // empty-titled hint.
        let verified = verify(vec![candidate("  ", 10)], &index);
        assert_eq!(verified[0].name, "  ");
    }

    #[test]
    fn empty_hint_list_verifies_nothing() {
        let index = GroundingIndex::from_hints(&[]);
        assert!(index.is_empty());
        assert!(verify(vec![candidate("Ramen House", 1200)], &index).is_empty());
    }
}
