// Configuration structs

use anyhow::{bail, Result};
use std::path::PathBuf;

/// Everything one refinement run needs, assembled from the CLI in `main`.
///
/// The loop takes its collaborators through this struct rather than reading
/// ambient globals, so independent runs never interfere with each other.
#[derive(Debug, Clone)]
pub struct Config {
    /// Starting seed phrase for round 0
    pub seed: String,

    /// Maximum number of refinement rounds
    pub max_iterations: usize,

    /// Groq API key (not required in offline mode)
    pub api_key: Option<String>,

    /// Path to the palindromer binary
    pub generator_path: PathBuf,

    /// Path to the lexicon file
    pub lexicon_path: PathBuf,

    /// Directory where per-round candidate files are written
    pub work_dir: PathBuf,

    /// Rank candidates with the built-in heuristic instead of the Groq API
    pub offline: bool,
}

impl Config {
    /// Check startup preconditions that must hold before the loop runs.
    ///
    /// A missing lexicon file is deliberately not checked here: the run
    /// degrades to unfiltered candidates with a warning instead of failing.
    pub fn validate(&self) -> Result<()> {
        if !self.offline && self.api_key.as_deref().map_or(true, str::is_empty) {
            bail!(
                "No API key provided. Set the GROQ_API_KEY environment variable, \
                 pass --api-key, or run with --offline"
            );
        }

        if !self.generator_path.exists() {
            bail!(
                "Palindromer not found at {}. Build it first or point --generator at the binary",
                self.generator_path.display()
            );
        }

        if self.max_iterations == 0 {
            bail!("Iteration count must be at least 1");
        }

        Ok(())
    }
}
