//! Command handler: answers /start, /help, /status, and /languages with
//! static descriptions. Other commands stop the chain so they never reach the
//! translate handler; plain text continues.

use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

pub const START_TEXT: &str = "🤖 Multi-language translation bot is running!\n\n\
✨ Features:\n\
• Chinese messages are translated to Urdu\n\
• Tagalog messages are translated to English\n\
• Urdu messages are translated to English\n\
• Works automatically in groups, no command needed\n\n\
📝 Usage:\n\
Just send a message; the bot detects the language and replies with the translation.";

pub const HELP_TEXT: &str = "📖 Usage\n\n\
🔄 Translation routes:\n\
• Chinese → Urdu\n\
• Tagalog → English\n\
• Urdu → English\n\n\
👥 Group setup:\n\
1. Add the bot to the group\n\
2. Allow it to send messages\n\
3. Disable privacy mode via @BotFather\n\
4. Chat normally; translations arrive as replies\n\n\
🔧 Commands:\n\
/start - bot overview\n\
/help - this message\n\
/status - bot status\n\
/languages - supported languages";

pub const STATUS_TEXT: &str = "✅ Bot is running.\n\n\
🌐 Active translation routes:\n\
• Chinese → Urdu\n\
• Tagalog → English\n\
• Urdu → English\n\n\
📊 Health check endpoint is serving on /health.";

pub const LANGUAGES_TEXT: &str = "🌍 Supported languages\n\n\
📥 Input:\n\
• Chinese - detected by CJK characters\n\
• Tagalog - detected by common words\n\
• Urdu - detected by Arabic-script characters\n\n\
📤 Output:\n\
• Urdu - for Chinese input\n\
• English - for Tagalog and Urdu input";

/// Handler for the bot's slash commands.
pub struct CommandHandler {
    bot: Arc<dyn Bot>,
}

impl CommandHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }

    /// Extracts the command word from text like `/help@my_bot args`.
    /// Returns `None` when the text is not a command.
    fn command_word(text: &str) -> Option<&str> {
        let text = text.trim();
        if !text.starts_with('/') {
            return None;
        }
        let word = text.split_whitespace().next().unwrap_or(text);
        Some(word.split('@').next().unwrap_or(word))
    }

    fn reply_for(command: &str) -> Option<&'static str> {
        match command {
            "/start" => Some(START_TEXT),
            "/help" => Some(HELP_TEXT),
            "/status" => Some(STATUS_TEXT),
            "/languages" => Some(LANGUAGES_TEXT),
            _ => None,
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(command) = Self::command_word(&message.content) else {
            return Ok(HandlerResponse::Continue);
        };

        match Self::reply_for(command) {
            Some(text) => {
                info!(command = %command, "Answering command");
                self.bot.reply_to(message, text).await?;
                Ok(HandlerResponse::Reply(text.to_string()))
            }
            None => {
                // Unknown command; nothing downstream should translate it.
                info!(command = %command, "Ignoring unknown command");
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
