// End-to-end tests for the refinement loop with a real subprocess
// generator and the offline heuristic oracle.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use autopal::generator::ProcessGenerator;
use autopal::lexicon::Lexicon;
use autopal::oracle::HeuristicOracle;
use autopal::refine::{RefineLoop, StopReason};

/// Write an executable shell script standing in for the palindromer.
fn write_fake_palindromer(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("fake_palindromer.sh");
    let script = ["#!/bin/sh\n", body, "\n"].concat();
    std::fs::write(&path, script).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

fn write_lexicon(dir: &Path, tokens: &[&str]) -> Lexicon {
    let path = dir.join("dictionary.txt");
    std::fs::write(&path, tokens.join("\n")).unwrap();
    Lexicon::load_from_file(&path).unwrap()
}

#[tokio::test]
async fn test_full_run_converges_to_a_cycle() {
    let dir = tempfile::tempdir().unwrap();

    // The generator always emits the same two candidates, so the second
    // round must re-select an already-seen seed and close a cycle
    let script = write_fake_palindromer(
        dir.path(),
        "out=\"${2#-o=}\"\nprintf 'WAS RAW | WARSAW\\nWAS | SAW\\n' > \"$out\"",
    );
    let lexicon = write_lexicon(dir.path(), &["WAS", "SAW", "RAW", "WARSAW"]);

    let generator = Arc::new(ProcessGenerator::new(script, dir.path().to_path_buf()));
    let refine = RefineLoop::new(generator, Arc::new(HeuristicOracle), lexicon, 5);

    let outcome = refine.run("WAS|SAW").await;

    assert_eq!(outcome.reason, StopReason::CycleDetected);
    // The heuristic prefers the shorter spaced phrase both rounds
    assert_eq!(outcome.history, vec!["WAS|SAW", "WAS | SAW", "WAS | SAW"]);
}

#[tokio::test]
async fn test_full_run_stops_when_lexicon_rejects_everything() {
    let dir = tempfile::tempdir().unwrap();

    let script = write_fake_palindromer(
        dir.path(),
        "out=\"${2#-o=}\"\nprintf 'GLORP | PROLG\\n' > \"$out\"",
    );
    let lexicon = write_lexicon(dir.path(), &["WAS", "SAW"]);

    let generator = Arc::new(ProcessGenerator::new(script, dir.path().to_path_buf()));
    let refine = RefineLoop::new(generator, Arc::new(HeuristicOracle), lexicon, 5);

    let outcome = refine.run("WAS|SAW").await;

    assert_eq!(outcome.reason, StopReason::NoCandidatesAfterFilter);
    assert_eq!(outcome.history, vec!["WAS|SAW"]);
}

#[tokio::test]
async fn test_full_run_survives_generator_crash_mid_run() {
    let dir = tempfile::tempdir().unwrap();

    // Succeeds on round 1, crashes on round 2 (marker file as round state)
    let script = write_fake_palindromer(
        dir.path(),
        concat!(
            "out=\"${2#-o=}\"\n",
            "marker=\"$(dirname \"$out\")/ran_once\"\n",
            "if [ -f \"$marker\" ]; then exit 7; fi\n",
            "touch \"$marker\"\n",
            "printf 'STEP | PETS\\n' > \"$out\""
        ),
    );
    let lexicon = write_lexicon(dir.path(), &["STEP", "PETS"]);

    let generator = Arc::new(ProcessGenerator::new(script, dir.path().to_path_buf()));
    let refine = RefineLoop::new(generator, Arc::new(HeuristicOracle), lexicon, 5);

    let outcome = refine.run("WAS|SAW").await;

    assert_eq!(outcome.reason, StopReason::GeneratorFailed);
    // Round 1 progress is preserved
    assert_eq!(outcome.history, vec!["WAS|SAW", "STEP | PETS"]);
}

#[tokio::test]
async fn test_full_run_without_lexicon_file_applies_no_filtering() {
    let dir = tempfile::tempdir().unwrap();

    let script = write_fake_palindromer(
        dir.path(),
        "out=\"${2#-o=}\"\nprintf 'GLORP | PROLG\\n' > \"$out\"",
    );

    let generator = Arc::new(ProcessGenerator::new(script, dir.path().to_path_buf()));
    // Missing lexicon file degrades to an empty lexicon upstream; here we
    // hand the loop the degraded value directly
    let refine = RefineLoop::new(generator, Arc::new(HeuristicOracle), Lexicon::default(), 1);

    let outcome = refine.run("WAS|SAW").await;

    assert_eq!(outcome.reason, StopReason::MaxIterationsReached);
    assert_eq!(outcome.history, vec!["WAS|SAW", "GLORP | PROLG"]);
}
