// Ranking oracle interface and implementations

use anyhow::Result;
use async_trait::async_trait;

pub mod extract;
pub mod groq;
pub mod heuristic;
pub mod types;

pub use groq::GroqOracle;
pub use heuristic::HeuristicOracle;

/// Black-box ranking capability: pick the single best phrase from a list.
///
/// The loop only depends on this trait, so tests can swap in a
/// deterministic scorer without touching the control flow.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Select the best candidate from a non-empty list.
    ///
    /// Implementations should return one of `candidates`, but a best-effort
    /// verbatim selection is acceptable; the loop validates its shape.
    async fn select_best(&self, candidates: &[String]) -> Result<String>;

    /// Oracle name for logging
    fn name(&self) -> &str;
}
