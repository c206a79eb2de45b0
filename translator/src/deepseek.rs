//! DeepSeek-backed [`Translator`]: builds per-route prompts, requests one
//! chat completion, and cleans the reply.

use anyhow::Result;
use async_trait::async_trait;
use deepseek_client::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, DeepSeekClient,
};
use tracing::instrument;

use super::{prompts, Translation, TranslationRoute, Translator};

/// Default chat model for translation requests.
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// [`Translator`] implementation backed by the DeepSeek chat API.
#[derive(Clone)]
pub struct DeepSeekTranslator {
    client: DeepSeekClient,
    model: String,
}

impl DeepSeekTranslator {
    pub fn new(api_key: String) -> Self {
        Self {
            client: DeepSeekClient::new(api_key),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: DeepSeekClient::with_base_url(api_key, base_url),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }
}

#[async_trait]
impl Translator for DeepSeekTranslator {
    #[instrument(skip(self, text), fields(source = route.source.code(), target = route.target.code()))]
    async fn translate(&self, text: &str, route: TranslationRoute) -> Result<Translation> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(prompts::system_prompt(route))
                .build()?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompts::user_prompt(route, text))
                .build()?
                .into(),
        ];

        let raw = self.client.chat_completion(&self.model, messages).await?;

        Ok(Translation {
            source_text: text.to_string(),
            route,
            translated_text: prompts::clean_translation(&raw),
        })
    }
}
