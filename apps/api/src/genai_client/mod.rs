//! Generation service client: the single point of entry for all calls to the
//! hosted text and image generation API.
//!
//! ARCHITECTURAL RULE: No other module may call the generation API directly.
//! Campaign code depends on the `GenerationService` trait, never on HTTP.
//!
//! Models are hardcoded so prompt templates and sizes stay in step with them.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

use prompts::CAPTION_SYSTEM;

/// Image model used for every campaign image.
pub const IMAGE_MODEL: &str = "gpt-image-1";
/// Text model used for caption generation.
pub const TEXT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Error)]
pub enum GenAiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Image {index} has no base64 payload")]
    MissingImageData { index: usize },

    #[error("Generation service returned empty content")]
    EmptyContent,
}

/// The external generation service as seen by campaign code.
///
/// Carried in `AppState` as `Arc<dyn GenerationService>`.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Generates `count` images for `prompt` at `size` (e.g. `1024x1536`).
    /// Returns one base64-encoded PNG payload per image, in order.
    async fn generate_images(
        &self,
        prompt: &str,
        count: u32,
        size: &str,
    ) -> Result<Vec<String>, GenAiError>;

    /// Generates a single free-text block for `prompt`.
    async fn generate_text(&self, prompt: &str) -> Result<String, GenAiError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ImageGenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u32,
    size: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    b64_json: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

impl ChatResponse {
    /// Text of the first choice, if the model produced any.
    fn text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// OpenAI-compatible client. No retries: a failed call is returned to the
/// caller as-is.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, GenAiError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url,
        })
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, GenAiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Generation API returned {status} for {path}");
            return Err(GenAiError::Api {
                status: status.as_u16(),
                message: upstream_message(body),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl GenerationService for OpenAiClient {
    async fn generate_images(
        &self,
        prompt: &str,
        count: u32,
        size: &str,
    ) -> Result<Vec<String>, GenAiError> {
        let request = ImageGenerationRequest {
            model: IMAGE_MODEL,
            prompt,
            n: count,
            size,
        };

        let response: ImagesResponse = self.post_json("/images/generations", &request).await?;
        debug!("Image call succeeded: {} images", response.data.len());

        collect_payloads(response)
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, GenAiError> {
        let request = ChatRequest {
            model: TEXT_MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: CAPTION_SYSTEM,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response: ChatResponse = self.post_json("/chat/completions", &request).await?;

        if let Some(usage) = &response.usage {
            debug!(
                "Text call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        response.text().ok_or(GenAiError::EmptyContent)
    }
}

fn collect_payloads(response: ImagesResponse) -> Result<Vec<String>, GenAiError> {
    response
        .data
        .into_iter()
        .enumerate()
        .map(|(index, image)| {
            image
                .b64_json
                .ok_or(GenAiError::MissingImageData { index: index + 1 })
        })
        .collect()
}

/// Pulls `error.message` out of an upstream error body, falling back to the raw body.
fn upstream_message(body: String) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}
