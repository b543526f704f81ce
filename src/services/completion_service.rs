use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::{config::Config, constants::prompts::SYSTEM_PROMPT, errors::CompletionError};

/// Turns a rendered prompt into generated text. Implementations are stateless per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompletionSettings {
    pub model: String,
    pub system_prompt: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub timeout: Duration,
}

impl CompletionSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.openai_model.clone(),
            system_prompt: SYSTEM_PROMPT.to_string(),
            temperature: config.openai_temperature,
            max_output_tokens: config.openai_max_output_tokens,
            timeout: config.openai_timeout,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Chat-completions gateway backed by `async-openai`.
pub struct OpenAiCompletionClient {
    client: Client<OpenAIConfig>,
    settings: CompletionSettings,
    has_credential: bool,
}

impl OpenAiCompletionClient {
    pub fn new(config: &Config) -> Self {
        let mut openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());
        if let Some(base_url) = &config.openai_base_url {
            openai_config = openai_config.with_api_base(base_url.as_str());
        }

        // The SDK retries 5xx and 429 responses by default; one attempt per call.
        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        Self {
            client: Client::with_config(openai_config).with_backoff(no_retry),
            settings: CompletionSettings::from_config(config),
            has_credential: config.has_api_key(),
        }
    }

    pub fn settings(&self) -> &CompletionSettings {
        &self.settings
    }

    fn request_for(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: self.settings.system_prompt.clone(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_output_tokens,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        if !self.has_credential {
            return Err(CompletionError::MissingCredential);
        }

        log::debug!(
            "Requesting completion from {} ({} prompt chars, max {} tokens)",
            self.settings.model,
            prompt.len(),
            self.settings.max_output_tokens
        );

        let request = self.request_for(prompt);
        let response: ChatCompletionResponse =
            tokio::time::timeout(self.settings.timeout, self.client.chat().create_byot(request))
                .await
                .map_err(|_| CompletionError::Timeout(self.settings.timeout))??;

        extract_text(response)
    }
}

fn extract_text(response: ChatCompletionResponse) -> Result<String, CompletionError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(CompletionError::EmptyResponse)
}
