//! Main entry: validate config, init logging, start the health task, probe
//! Telegram, then run the polling REPL.

use anyhow::Result;
use deepseek_client::mask_token;
use std::time::Duration;
use tracing::{error, info, instrument, warn};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;
use crate::core::init_tracing;
use crate::health::serve_health;
use crate::telegram::run_repl;

const STARTUP_ATTEMPTS: u32 = 5;
const STARTUP_RETRY_DELAY: Duration = Duration::from_secs(10);

/// Runs the bot until the process is stopped.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    std::fs::create_dir_all("logs")?;
    init_tracing(config.log_file.as_str())?;

    info!(
        model = %config.translation_model,
        deepseek_base_url = %config.deepseek_base_url,
        api_key = %mask_token(&config.deepseek_api_key),
        "Initializing translator bot"
    );

    let components = build_bot_components(&config)?;
    let handler_chain = build_handler_chain(&components);

    let health_port = config.health_port;
    tokio::spawn(async move {
        // A failed health server must not take the bot down.
        if let Err(e) = serve_health(health_port).await {
            error!(error = %e, port = health_port, "Health check server failed");
        }
    });

    wait_for_telegram(&components.teloxide_bot).await?;

    info!("Bot started successfully");

    run_repl(components.teloxide_bot.clone(), handler_chain).await
}

/// Probes Telegram with get_me before polling, retrying on transient failures
/// (e.g. a previous instance still holding getUpdates).
async fn wait_for_telegram(bot: &teloxide::Bot) -> Result<()> {
    use teloxide::prelude::*;

    let mut last_error = None;
    for attempt in 1..=STARTUP_ATTEMPTS {
        match bot.get_me().await {
            Ok(_) => return Ok(()),
            Err(e) => {
                warn!(
                    attempt = attempt,
                    max_attempts = STARTUP_ATTEMPTS,
                    error = %e,
                    "Telegram not reachable yet"
                );
                last_error = Some(e);
                if attempt < STARTUP_ATTEMPTS {
                    tokio::time::sleep(STARTUP_RETRY_DELAY).await;
                }
            }
        }
    }

    Err(anyhow::anyhow!(
        "Failed to reach Telegram after {} attempts: {}",
        STARTUP_ATTEMPTS,
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
}
