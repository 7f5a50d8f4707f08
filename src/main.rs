// Autopal - automatic palindrome refinement
// Main entry point

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use autopal::config::constants::{
    DEFAULT_GENERATOR_PATH, DEFAULT_LEXICON_PATH, DEFAULT_MAX_ITERATIONS,
};
use autopal::config::Config;
use autopal::generator::ProcessGenerator;
use autopal::lexicon::Lexicon;
use autopal::oracle::{GroqOracle, HeuristicOracle, Oracle};
use autopal::refine::RefineLoop;

#[derive(Parser)]
#[command(name = "autopal")]
#[command(
    about = "Iteratively refine a palindromic phrase with an external generator and an LLM ranking oracle"
)]
struct Cli {
    /// Starting palindrome seed, e.g. "WAS|SAW"
    seed: String,

    /// Number of refinement rounds
    #[arg(default_value_t = DEFAULT_MAX_ITERATIONS)]
    iterations: usize,

    /// Groq API key; falls back to the GROQ_API_KEY environment variable
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Path to the palindromer binary
    #[arg(long, default_value = DEFAULT_GENERATOR_PATH)]
    generator: PathBuf,

    /// Path to the lexicon file, one token per line
    #[arg(long, default_value = DEFAULT_LEXICON_PATH)]
    lexicon: PathBuf,

    /// Directory where per-round candidate files are written
    #[arg(long, default_value = ".")]
    work_dir: PathBuf,

    /// Rank candidates with the built-in heuristic instead of the Groq API
    #[arg(long)]
    offline: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            seed: self.seed,
            max_iterations: self.iterations,
            api_key: self.api_key,
            generator_path: self.generator,
            lexicon_path: self.lexicon,
            work_dir: self.work_dir,
            offline: self.offline,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Cli::parse().into_config();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<()> {
    // Startup preconditions: missing credential or generator binary is
    // fatal before any round executes
    config.validate()?;

    // A missing lexicon degrades to unfiltered candidates, it does not
    // abort the run
    let lexicon = match Lexicon::load_from_file(&config.lexicon_path) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            tracing::warn!("{:#}; proceeding without lexicon filtering", e);
            Lexicon::default()
        }
    };

    let generator = Arc::new(ProcessGenerator::new(
        config.generator_path.clone(),
        config.work_dir.clone(),
    ));

    let oracle: Arc<dyn Oracle> = if config.offline {
        Arc::new(HeuristicOracle)
    } else {
        let api_key = config
            .api_key
            .clone()
            .context("API key missing after validation")?;
        Arc::new(GroqOracle::new(api_key)?)
    };

    let refine_loop = RefineLoop::new(generator, oracle, lexicon, config.max_iterations);

    let cancel = refine_loop.cancel_flag();
    ctrlc::set_handler(move || {
        cancel.store(true, Ordering::SeqCst);
    })
    .context("Failed to install interrupt handler")?;

    let outcome = refine_loop.run(&config.seed).await;

    println!("\nRefinement complete: {}", outcome.reason.describe());
    println!("History:");
    for (i, seed) in outcome.history.iter().enumerate() {
        println!("  {}: {}", i, seed);
    }

    Ok(())
}
