// Lexicon filtering of generated candidates

use crate::config::constants::DELIMITER;
use crate::lexicon::Lexicon;

/// Split a candidate at the first delimiter occurrence.
///
/// Further delimiter occurrences stay in the right half. Returns `None`
/// when the delimiter is absent, i.e. the candidate is malformed.
pub fn split_candidate(candidate: &str) -> Option<(&str, &str)> {
    candidate.split_once(DELIMITER)
}

/// Keep only candidates whose words on both sides are all lexicon members.
///
/// Order-preserving and stable; duplicates pass through when each instance
/// validates. Malformed candidates (no delimiter) are dropped silently so
/// ranking can proceed on the valid subset. A side with no words passes
/// vacuously. Accepted candidates are returned unchanged, original spacing
/// included.
pub fn filter_candidates(candidates: &[String], lexicon: &Lexicon) -> Vec<String> {
    let filtered: Vec<String> = candidates
        .iter()
        .filter(|candidate| is_valid(candidate, lexicon))
        .cloned()
        .collect();

    tracing::debug!(
        "Filtered {} of {} candidates through the lexicon",
        filtered.len(),
        candidates.len()
    );

    filtered
}

fn is_valid(candidate: &str, lexicon: &Lexicon) -> bool {
    let Some((left, right)) = split_candidate(candidate) else {
        return false;
    };

    left.split_whitespace()
        .chain(right.split_whitespace())
        .all(|word| lexicon.contains(word))
}
