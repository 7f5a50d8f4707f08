// Groq chat-completions request/response types

use serde::{Deserialize, Serialize};

use crate::config::constants::{ORACLE_MAX_COMPLETION_TOKENS, ORACLE_MODEL};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    pub temperature: f32,
    pub max_completion_tokens: u32,
    pub top_p: f32,
    pub stream: bool,
    pub reasoning_effort: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

impl ChatRequest {
    /// Build the ranking request for a list of candidate phrases.
    pub fn ranking(candidates: &[String]) -> Self {
        let prompt = format!(
            "using the following list of palindromic phrases, return only the \
             single phrase that has the highest semantic value and makes the \
             most logical sense: {}",
            candidates.join("\n")
        );

        Self {
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            model: ORACLE_MODEL.to_string(),
            temperature: 1.0,
            max_completion_tokens: ORACLE_MAX_COMPLETION_TOKENS,
            top_p: 1.0,
            stream: false,
            reasoning_effort: "medium".to_string(),
            stop: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
}

impl ChatResponse {
    /// The assistant's text from the first choice, trimmed.
    ///
    /// Returns `None` when there are no choices or the content is blank,
    /// both of which count as a malformed oracle payload.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.trim())
            .filter(|text| !text.is_empty())
    }
}
