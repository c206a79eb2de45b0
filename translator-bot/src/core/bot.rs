//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; the teloxide implementation lives in
//! `telegram::bot_adapter`. Tests substitute their own impl.

use crate::core::error::Result;
use crate::core::types::{Chat, Message};
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport
/// (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
}
