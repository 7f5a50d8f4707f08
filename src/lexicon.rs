// Lexicon loading and membership

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Immutable set of known tokens used to validate candidate phrases.
///
/// Loaded once at startup and read-only for the rest of the run. Membership
/// is exact string equality: no case folding, no trimming beyond the
/// per-line strip applied at load time.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    tokens: HashSet<String>,
}

impl Lexicon {
    /// Load a lexicon from a plain-text file, one token per non-empty line.
    ///
    /// Lines are trimmed and blank lines skipped; original casing is kept.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file: {}", path.display()))?;

        let lexicon = Self::from_tokens(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );

        tracing::debug!(
            "Loaded {} lexicon entries from {}",
            lexicon.len(),
            path.display()
        );

        Ok(lexicon)
    }

    /// Build a lexicon from tokens already in memory.
    pub fn from_tokens(tokens: impl IntoIterator<Item = String>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}
