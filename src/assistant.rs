use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{AssistantConfig, ChatMessage, ChatPurpose};

/// Canned reply substituted whenever the completion call fails. The failure
/// is logged but never surfaced to the caller as an error.
pub const FALLBACK_REPLY: &str =
    "I'm sorry, I couldn't process your request at the moment. Please try again later.";

/// Blocking client for the external chat-completion endpoint.
pub struct AssistantClient {
    config: AssistantConfig,
    client: reqwest::blocking::Client,
}

impl AssistantClient {
    pub fn new(config: AssistantConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("campus-circle")
            .build()
            .context("build reqwest client")?;
        Ok(Self { config, client })
    }

    /// One round-trip: appends the user message, submits the transcript with
    /// the purpose's system instruction prepended, appends the assistant
    /// reply. On any failure the reply is [`FALLBACK_REPLY`], so a completed
    /// call always grows the transcript by exactly two entries.
    pub fn send(
        &self,
        transcript: &mut Vec<ChatMessage>,
        purpose: ChatPurpose,
        text: &str,
    ) -> String {
        transcript.push(ChatMessage::user(text));
        let reply = match self.complete(transcript, purpose) {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(
                    purpose = %purpose,
                    error = %format!("{:#}", err),
                    "assistant request failed"
                );
                FALLBACK_REPLY.to_string()
            }
        };
        transcript.push(ChatMessage::assistant(reply.clone()));
        reply
    }

    fn complete(&self, transcript: &[ChatMessage], purpose: ChatPurpose) -> Result<String> {
        let key = self
            .config
            .api_key
            .as_deref()
            .context("no API key configured (run `campus-circle assistant login --api-key ...`)")?;

        let mut messages = Vec::with_capacity(transcript.len() + 1);
        messages.push(ChatMessage::system(purpose.system_prompt()));
        messages.extend(transcript.iter().cloned());

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let resp = self
            .client
            .post(url)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", key))
            .json(&CompletionRequest {
                model: &self.config.model,
                messages: &messages,
                max_tokens: self.config.max_tokens,
                temperature: self.config.temperature,
            })
            .send()
            .context("chat completion request")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let message = resp
                .json::<ApiErrorBody>()
                .ok()
                .map(|body| body.error.message)
                .unwrap_or_else(|| "failed to get a response from the assistant".to_string());
            anyhow::bail!("chat completion failed ({}): {}", status, message);
        }

        let body: CompletionResponse = resp.json().context("parse chat completion response")?;
        let choice = body
            .choices
            .into_iter()
            .next()
            .context("chat completion returned no choices")?;
        Ok(choice.message.content)
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
    #[allow(dead_code)]
    #[serde(default)]
    usage: Option<UsageStats>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: ChatMessage,
}

#[allow(dead_code)]
#[derive(Deserialize)]
struct UsageStats {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorMessage,
}

#[derive(Deserialize)]
struct ApiErrorMessage {
    message: String,
}
