// HTTP client for the Groq ranking oracle

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::constants::{GROQ_API_URL, ORACLE_TIMEOUT_SECS};

use super::extract::{extract_selection, Selection};
use super::types::{ChatRequest, ChatResponse};
use super::Oracle;

pub struct GroqOracle {
    client: Client,
    api_key: String,
    api_url: String,
}

impl GroqOracle {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_api_url(api_key, GROQ_API_URL.to_string())
    }

    /// Construct against a non-default endpoint. Tests point this at a mock
    /// server.
    pub fn with_api_url(api_key: String, api_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(ORACLE_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            api_url,
        })
    }

    /// Send a single ranking request. No retry: an oracle failure ends the
    /// whole refinement run, so there is nothing to salvage here.
    async fn send_ranking(&self, request: &ChatRequest) -> Result<ChatResponse> {
        tracing::debug!("Sending ranking request to {}", self.api_url);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .context("Failed to send request to the ranking oracle")?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            bail!(
                "Oracle request failed\n\nStatus: {}\nBody: {}",
                status,
                error_body
            );
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .context("Failed to parse oracle response")?;

        tracing::debug!("Received oracle response: {:?}", chat_response);

        Ok(chat_response)
    }
}

#[async_trait]
impl Oracle for GroqOracle {
    async fn select_best(&self, candidates: &[String]) -> Result<String> {
        if candidates.is_empty() {
            bail!("No candidates to rank");
        }

        let request = ChatRequest::ranking(candidates);
        let response = self.send_ranking(&request).await?;

        let content = response
            .text()
            .context("Oracle response contained no message content")?;

        match extract_selection(content, candidates) {
            Some(Selection::Matched(selected)) => Ok(selected),
            Some(Selection::Degraded(selected)) => {
                tracing::warn!(
                    "Oracle response carried no usable selection; degrading to first candidate '{}'",
                    selected
                );
                Ok(selected)
            }
            None => bail!("Could not recover a selection from the oracle response"),
        }
    }

    fn name(&self) -> &str {
        "groq"
    }
}
