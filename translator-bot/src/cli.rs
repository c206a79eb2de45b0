//! Command-line interface for the bot binary.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "translator-bot", about = "Telegram translation bot backed by DeepSeek")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (long polling).
    Run {
        /// Telegram bot token; overrides TELEGRAM_TOKEN / BOT_TOKEN.
        #[arg(long)]
        token: Option<String>,
    },
}

/// Loads config, letting a CLI-supplied token override the environment.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}
