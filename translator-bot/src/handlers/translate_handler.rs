//! Translate handler: detects the message language, relays the text to the
//! translator, and replies in the originating chat.

use crate::core::{Bot, BotError, Handler, HandlerResponse, Message, Result};
use async_trait::async_trait;
use std::sync::Arc;
use translator::{detect_language, Translator};
use tracing::{info, instrument};

/// Messages shorter than this (after trimming) are not worth translating.
const MIN_MESSAGE_CHARS: usize = 2;

/// Handler that translates detected Chinese/Tagalog/Urdu messages and replies
/// with the result. Undetected languages, commands, and very short texts are
/// passed over.
pub struct TranslateHandler {
    translator: Arc<dyn Translator>,
    bot: Arc<dyn Bot>,
}

impl TranslateHandler {
    pub fn new(translator: Arc<dyn Translator>, bot: Arc<dyn Bot>) -> Self {
        Self { translator, bot }
    }

    /// Reply body: marker line with the target language, then the translation.
    fn format_reply(target_name: &str, translated: &str) -> String {
        format!("🌐 Translated to {}:\n{}", target_name, translated)
    }
}

#[async_trait]
impl Handler for TranslateHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = message.content.trim();

        if text.chars().count() < MIN_MESSAGE_CHARS || text.starts_with('/') {
            return Ok(HandlerResponse::Ignore);
        }

        let Some(language) = detect_language(text) else {
            return Ok(HandlerResponse::Ignore);
        };
        let Some(route) = language.route() else {
            return Ok(HandlerResponse::Ignore);
        };

        info!(
            source = route.source.code(),
            target = route.target.code(),
            "Detected language, translating"
        );

        let translation = self
            .translator
            .translate(text, route)
            .await
            .map_err(|e| BotError::Translation(e.to_string()))?;

        // An empty or unchanged translation is not worth a reply.
        if translation.translated_text.is_empty() || translation.translated_text == text {
            return Ok(HandlerResponse::Stop);
        }

        let reply = Self::format_reply(route.target.english_name(), &translation.translated_text);
        self.bot.reply_to(message, &reply).await?;

        info!(
            source = route.source.code(),
            target = route.target.code(),
            reply_len = reply.len(),
            "Translation sent"
        );

        Ok(HandlerResponse::Reply(reply))
    }
}
