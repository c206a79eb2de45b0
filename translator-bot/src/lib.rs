//! # Telegram translation bot
//!
//! Detects Chinese, Tagalog, and Urdu messages and replies with DeepSeek
//! translations (Chinese → Urdu, Tagalog/Urdu → English). Wires the handler
//! chain, the teloxide transport, the health endpoint, and env-based config.

pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod handlers;
pub mod health;
pub mod runner;
pub mod telegram;

pub use chain::HandlerChain;
pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::BotConfig;
pub use self::core::{
    init_tracing, Bot, BotError, Chat, Handler, HandlerError, HandlerResponse, Message,
    MessageDirection, Result, ToCoreMessage, ToCoreUser, User,
};
pub use handlers::{CommandHandler, TranslateHandler};
pub use health::serve_health;
pub use runner::run_bot;
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
