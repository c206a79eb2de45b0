//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Production code
//! sends messages via Telegram; tests substitute another Bot impl.

use crate::core::{Bot as CoreBot, BotError, Chat, Message, Result};
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, MessageId, ReplyParameters},
};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        let mut request = self
            .bot
            .send_message(ChatId(message.chat.id), text.to_string());
        // Thread the reply when the incoming id is a real Telegram id.
        if let Some(id) = parse_message_id(&message.id) {
            request = request.reply_parameters(ReplyParameters::new(id));
        }
        request.await.map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}

/// Parses a core message id back into Telegram's numeric form.
fn parse_message_id(s: &str) -> Option<MessageId> {
    s.parse().ok().map(MessageId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_message_id_valid() {
        assert_eq!(parse_message_id("123"), Some(MessageId(123)));
        assert_eq!(parse_message_id("0"), Some(MessageId(0)));
    }

    #[test]
    fn parse_message_id_invalid() {
        assert_eq!(parse_message_id(""), None);
        assert_eq!(parse_message_id("abc"), None);
        assert_eq!(parse_message_id("12.3"), None);
    }
}
