// External palindromer invocation
//
// Runs the palindromer binary with a seed phrase and an output file, then
// reads the candidates it wrote, one per line.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

use crate::config::constants::GENERATOR_TIMEOUT_SECS;

use super::CandidateGenerator;

pub struct ProcessGenerator {
    program: PathBuf,
    work_dir: PathBuf,
}

impl ProcessGenerator {
    pub fn new(program: PathBuf, work_dir: PathBuf) -> Self {
        Self { program, work_dir }
    }

    fn output_path(&self, round: usize) -> PathBuf {
        self.work_dir.join(format!("palindromes_iter_{}.txt", round))
    }

    async fn run_palindromer(&self, seed: &str, output_path: &Path) -> Result<()> {
        let mut command = Command::new(&self.program);
        command
            .arg(format!("-t={}", seed))
            .arg(format!("-o={}", output_path.display()))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = command
            .spawn()
            .with_context(|| format!("Failed to spawn palindromer: {}", self.program.display()))?;

        let output = match timeout(
            Duration::from_secs(GENERATOR_TIMEOUT_SECS),
            child.wait_with_output(),
        )
        .await
        {
            Ok(output) => output.context("Failed to collect palindromer output")?,
            Err(_) => bail!("Palindromer timed out after {}s", GENERATOR_TIMEOUT_SECS),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "Palindromer exited with {}: {}",
                output.status,
                stderr.trim()
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            tracing::debug!("Palindromer output: {}", stdout.trim());
        }

        Ok(())
    }

    /// Read candidates back from the output file, skipping blank lines.
    fn read_candidates(path: &Path) -> Result<Vec<String>> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read candidate file: {}", path.display()))?;

        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

#[async_trait]
impl CandidateGenerator for ProcessGenerator {
    async fn generate(&self, seed: &str, round: usize) -> Result<Vec<String>> {
        let output_path = self.output_path(round);
        self.run_palindromer(seed, &output_path).await?;
        Self::read_candidates(&output_path)
    }

    fn name(&self) -> &str {
        "palindromer"
    }
}
