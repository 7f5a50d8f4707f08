// Candidate generator interface

use anyhow::Result;
use async_trait::async_trait;

pub mod process;

pub use process::ProcessGenerator;

/// Injectable palindrome generator: seed phrase in, raw candidates out.
///
/// Production runs the external palindromer binary; tests substitute
/// in-memory fakes so the loop never shells out.
#[async_trait]
pub trait CandidateGenerator: Send + Sync {
    /// Produce raw candidate strings for one refinement round.
    ///
    /// `round` is 1-based and only used to name per-round artifacts.
    async fn generate(&self, seed: &str, round: usize) -> Result<Vec<String>>;

    /// Generator name for logging
    fn name(&self) -> &str;
}
