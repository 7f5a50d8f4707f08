// Best-effort extraction of the selected candidate from an oracle response

use crate::config::constants::DELIMITER;

/// Lead-in phrases the oracle tends to prepend to its selection.
const RESPONSE_PREFIXES: &[&str] = &[
    "The best palindrome is:",
    "I select:",
    "Selected:",
    "Answer:",
];

/// What the extractor recovered, and how confidently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The response embedded a candidate verbatim, or carried a
    /// delimiter-bearing line after prefix stripping.
    Matched(String),
    /// No usable signal in the response; the first candidate stands in.
    /// Callers must surface this as a degraded selection, not a success.
    Degraded(String),
}

impl Selection {
    pub fn into_inner(self) -> String {
        match self {
            Selection::Matched(s) | Selection::Degraded(s) => s,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Selection::Degraded(_))
    }
}

/// Recover the selected candidate from a free-form oracle response.
///
/// Resolution order, first match wins:
/// 1. The first candidate (in list order) contained verbatim in the
///    response. Responses usually embed the exact candidate text amid
///    commentary.
/// 2. Strip known lead-in prefixes from the trimmed response, then take the
///    first line containing the delimiter, verbatim. The line need not be a
///    member of `candidates`.
/// 3. Fall back to the first candidate, tagged `Degraded`.
///
/// Never fails; returns `None` only when `candidates` is empty and no
/// delimiter line was found.
pub fn extract_selection(response: &str, candidates: &[String]) -> Option<Selection> {
    for candidate in candidates {
        if response.contains(candidate.as_str()) {
            return Some(Selection::Matched(candidate.clone()));
        }
    }

    let mut cleaned = response.trim();
    for prefix in RESPONSE_PREFIXES {
        if let Some(rest) = cleaned.strip_prefix(prefix) {
            cleaned = rest.trim();
        }
    }

    for line in cleaned.lines() {
        let line = line.trim();
        if line.contains(DELIMITER) {
            return Some(Selection::Matched(line.to_string()));
        }
    }

    candidates.first().cloned().map(Selection::Degraded)
}
