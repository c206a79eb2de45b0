//! # DeepSeek chat-completions client
//!
//! Thin wrapper over `async-openai` pointed at the DeepSeek API, which speaks
//! the OpenAI chat-completions protocol. Holds the request settings
//! (temperature, completion-token cap) so callers only pass messages.

use async_openai::{types::CreateChatCompletionRequestArgs, Client};
use std::sync::Arc;

pub use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs,
};

/// Default API base; overridable for tests or proxies.
pub const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com";

/// Client for DeepSeek chat completions. Cheap to clone.
#[derive(Clone)]
pub struct DeepSeekClient {
    client: Arc<Client<async_openai::config::OpenAIConfig>>,
    temperature: f32,
    max_tokens: u32,
}

impl DeepSeekClient {
    /// Creates a client against the default DeepSeek base URL.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEEPSEEK_BASE_URL.to_string())
    }

    /// Creates a client against a custom base URL.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let config = async_openai::config::OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        let client = Client::with_config(config);
        Self {
            client: Arc::new(client),
            temperature: 0.3,
            max_tokens: 1000,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Requests a single chat completion and returns the first choice's text.
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> anyhow::Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build()?;

        let response = self.client.chat().create(request).await?;

        first_choice_content(response.choices.into_iter().map(|c| c.message.content))
    }
}

/// Picks the first choice's text. An empty choice list is an error; a choice
/// without content yields an empty string.
fn first_choice_content(
    contents: impl IntoIterator<Item = Option<String>>,
) -> anyhow::Result<String> {
    match contents.into_iter().next() {
        Some(content) => Ok(content.unwrap_or_default()),
        None => anyhow::bail!("No response from DeepSeek"),
    }
}

/// Masks an API key for logging: first 7 + `***` + last 4 chars.
/// Keys of length <= 11 are fully masked.
pub fn mask_token(token: &str) -> String {
    if token.len() <= 11 {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[token.len() - 4..])
    }
}
