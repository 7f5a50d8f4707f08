// The refinement loop
//
// Drives one seed through generate -> filter -> rank -> cycle check,
// accumulating the ordered history of accepted seeds.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::constants::DELIMITER;
use crate::filter::filter_candidates;
use crate::generator::CandidateGenerator;
use crate::lexicon::Lexicon;
use crate::oracle::Oracle;

/// Why the loop stopped. Every variant is a documented outcome of the
/// state machine, not an error; the process exits zero for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The configured round bound ran out with no other terminal condition.
    MaxIterationsReached,
    /// The external generator failed (non-zero exit, timeout, spawn error).
    GeneratorFailed,
    /// The generator succeeded but produced zero candidates.
    NoCandidatesGenerated,
    /// Lexicon filtering rejected every candidate.
    NoCandidatesAfterFilter,
    /// The oracle call failed, or its selection was not candidate-shaped.
    OracleFailed,
    /// The selected seed already appeared in the history.
    CycleDetected,
    /// An interrupt arrived; the loop aborted once the in-flight call
    /// returned.
    Interrupted,
}

impl StopReason {
    pub fn describe(&self) -> &'static str {
        match self {
            StopReason::MaxIterationsReached => "iteration bound reached",
            StopReason::GeneratorFailed => "generator failed",
            StopReason::NoCandidatesGenerated => "generator produced no candidates",
            StopReason::NoCandidatesAfterFilter => "no candidates survived lexicon filtering",
            StopReason::OracleFailed => "oracle failed to select a candidate",
            StopReason::CycleDetected => "seed cycle detected",
            StopReason::Interrupted => "interrupted",
        }
    }
}

/// The loop's result: the full seed history plus the reason it stopped.
///
/// History starts with the initial seed and grows by one entry per
/// accepted round. It is returned whole regardless of how the loop ended;
/// partial progress is never discarded.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub history: Vec<String>,
    pub reason: StopReason,
}

pub struct RefineLoop {
    generator: Arc<dyn CandidateGenerator>,
    oracle: Arc<dyn Oracle>,
    lexicon: Lexicon,
    max_iterations: usize,
    cancel: Arc<AtomicBool>,
}

impl RefineLoop {
    pub fn new(
        generator: Arc<dyn CandidateGenerator>,
        oracle: Arc<dyn Oracle>,
        lexicon: Lexicon,
        max_iterations: usize,
    ) -> Self {
        Self {
            generator,
            oracle,
            lexicon,
            max_iterations,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Handle the caller can flip (e.g. from a ctrl-c handler) to stop the
    /// loop as soon as the in-flight generator or oracle call returns.
    /// Accumulated history survives.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Run up to `max_iterations` refinement rounds starting from `seed`.
    ///
    /// Round 0's seed is passed to the generator as-is; it does not need to
    /// be candidate-shaped. Every later seed must contain the delimiter.
    pub async fn run(&self, starting_seed: &str) -> RunOutcome {
        let mut seed = starting_seed.to_string();
        let mut history = vec![seed.clone()];

        println!("Starting palindrome refinement with: {}", seed);
        println!("Running for {} rounds", self.max_iterations);

        for round in 1..=self.max_iterations {
            if self.cancel.load(Ordering::SeqCst) {
                tracing::warn!("Interrupted; stopping with {} seeds recorded", history.len());
                return RunOutcome {
                    history,
                    reason: StopReason::Interrupted,
                };
            }

            println!("\nRound {}/{}", round, self.max_iterations);
            println!("Input: {}", seed);

            let raw = match self.generator.generate(&seed, round).await {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!(
                        "Generator '{}' failed on round {}: {:#}",
                        self.generator.name(),
                        round,
                        e
                    );
                    return RunOutcome {
                        history,
                        reason: StopReason::GeneratorFailed,
                    };
                }
            };

            // An interrupt that arrived while the generator was running
            // aborts now, before any oracle traffic
            if self.cancel.load(Ordering::SeqCst) {
                tracing::warn!("Interrupted during generation; stopping with {} seeds recorded", history.len());
                return RunOutcome {
                    history,
                    reason: StopReason::Interrupted,
                };
            }

            if raw.is_empty() {
                tracing::warn!("No candidates generated on round {}", round);
                return RunOutcome {
                    history,
                    reason: StopReason::NoCandidatesGenerated,
                };
            }

            // An empty lexicon means no filtering at all rather than
            // rejecting every candidate
            let valid = if self.lexicon.is_empty() {
                tracing::warn!("Lexicon is empty; no filtering applied");
                raw
            } else {
                filter_candidates(&raw, &self.lexicon)
            };

            if valid.is_empty() {
                tracing::warn!("No valid candidates after lexicon filtering on round {}", round);
                return RunOutcome {
                    history,
                    reason: StopReason::NoCandidatesAfterFilter,
                };
            }

            println!("Generated {} candidates after filtering", valid.len());

            let selected = match self.oracle.select_best(&valid).await {
                Ok(selected) => selected,
                Err(e) => {
                    tracing::warn!(
                        "Oracle '{}' failed on round {}: {:#}",
                        self.oracle.name(),
                        round,
                        e
                    );
                    return RunOutcome {
                        history,
                        reason: StopReason::OracleFailed,
                    };
                }
            };

            // Same for an interrupt that arrived during the oracle call;
            // the unvalidated selection is dropped
            if self.cancel.load(Ordering::SeqCst) {
                tracing::warn!("Interrupted during ranking; stopping with {} seeds recorded", history.len());
                return RunOutcome {
                    history,
                    reason: StopReason::Interrupted,
                };
            }

            println!("Oracle selected: {}", selected);

            // The selection seeds the next round, so it must be
            // candidate-shaped; a malformed selection is unrecoverable
            if !selected.contains(DELIMITER) {
                tracing::warn!(
                    "Oracle selection '{}' lacks the '{}' delimiter",
                    selected,
                    DELIMITER
                );
                return RunOutcome {
                    history,
                    reason: StopReason::OracleFailed,
                };
            }

            // Cycle check against the whole history, so multi-step cycles
            // are caught too. The repeat is still appended: the history
            // shows the closure of the cycle.
            let cycled = history.iter().any(|prior| *prior == selected);
            history.push(selected.clone());
            if cycled {
                println!("Seed repeated; stopping");
                return RunOutcome {
                    history,
                    reason: StopReason::CycleDetected,
                };
            }

            seed = selected;
        }

        RunOutcome {
            history,
            reason: StopReason::MaxIterationsReached,
        }
    }
}
