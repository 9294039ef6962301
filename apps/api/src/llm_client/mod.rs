/// LLM Client — the single point of entry for all model API calls in Missive.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// All LLM interactions MUST go through this module.
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("LLM output did not match the expected shape: {0}")]
    Schema(#[from] serde_json::Error),
}

/// One block of user content. Flows that attach a résumé file use
/// `Document`; everything else is plain `Text`.
#[derive(Debug, Clone)]
pub enum UserBlock {
    Text(String),
    Document { media_type: String, data: String },
}

/// A fully rendered prompt, ready for submission.
#[derive(Debug, Clone)]
pub struct ModelPrompt {
    pub system: String,
    pub blocks: Vec<UserBlock>,
}

impl ModelPrompt {
    /// A single-text-block prompt — the common case.
    pub fn text(system: &str, user: String) -> Self {
        Self {
            system: system.to_string(),
            blocks: vec![UserBlock::Text(user)],
        }
    }
}

/// The model API seam. Carried in `AppState` as `Arc<dyn ModelApi>` so
/// handlers and tests can substitute a double without touching flow code.
#[async_trait]
pub trait ModelApi: Send + Sync {
    /// Submits a rendered prompt and returns the model's text output.
    async fn complete(&self, prompt: ModelPrompt) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a [ContentPart],
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ContentPart {
    Text { text: String },
    Document { source: DocumentSource },
}

#[derive(Debug, Serialize)]
struct DocumentSource {
    #[serde(rename = "type")]
    kind: &'static str,
    media_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct LlmResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Production client
// ────────────────────────────────────────────────────────────────────────────

/// The production `ModelApi` over the Anthropic Messages API.
///
/// Single-shot: a failed call is surfaced to the caller, never retried here.
/// The Presentation Layer retries by re-invoking the action.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    pub fn new(api_key: String, model: String, api_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl ModelApi for LlmClient {
    async fn complete(&self, prompt: ModelPrompt) -> Result<String, LlmError> {
        let content: Vec<ContentPart> = prompt
            .blocks
            .into_iter()
            .map(|block| match block {
                UserBlock::Text(text) => ContentPart::Text { text },
                UserBlock::Document { media_type, data } => ContentPart::Document {
                    source: DocumentSource {
                        kind: "base64",
                        media_type,
                        data,
                    },
                },
            })
            .collect();

        let request_body = AnthropicRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            system: &prompt.system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: &content,
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the API's own message when the body parses as an error
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        llm_response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Submits the prompt and deserializes the model's text output as JSON.
/// The system prompt must instruct the model to return bare JSON.
pub async fn request_json<T: DeserializeOwned>(
    model: &dyn ModelApi,
    prompt: ModelPrompt,
) -> Result<T, LlmError> {
    let text = model.complete(prompt).await?;

    // Strip markdown code fences if the model wraps JSON in them
    let cleaned = strip_json_fences(&text);
    if cleaned.is_empty() {
        return Err(LlmError::EmptyContent);
    }

    Ok(serde_json::from_str(cleaned)?)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Test double
// ────────────────────────────────────────────────────────────────────────────


// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
