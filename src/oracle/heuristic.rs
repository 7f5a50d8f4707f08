// Deterministic offline ranking heuristic
//
// Stands in for the hosted oracle when running with --offline and in
// tests. Scores lean toward short, word-like phrases; ties go to the
// earliest candidate so selection is reproducible.

use anyhow::{bail, Result};
use async_trait::async_trait;

use super::Oracle;

pub struct HeuristicOracle;

impl HeuristicOracle {
    fn score(candidate: &str) -> i32 {
        let mut score = 0i32;

        // Shorter phrases read better
        score += (50 - candidate.len() as i32).max(0);

        // A handful of spaces means real words on both sides
        let spaces = candidate.matches(' ').count();
        if (1..=4).contains(&spaces) {
            score += 20;
        }

        // Runs of spaces are generator padding, not words
        if !candidate.contains("  ") {
            score += 10;
        }

        score
    }
}

#[async_trait]
impl Oracle for HeuristicOracle {
    async fn select_best(&self, candidates: &[String]) -> Result<String> {
        let mut best: Option<(&String, i32)> = None;

        for candidate in candidates {
            let score = Self::score(candidate);
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((candidate, score)),
            }
        }

        match best {
            Some((candidate, score)) => {
                tracing::debug!("Heuristic selected '{}' (score {})", candidate, score);
                Ok(candidate.clone())
            }
            None => bail!("No candidates to rank"),
        }
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}
