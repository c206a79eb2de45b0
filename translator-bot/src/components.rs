//! Component factory: builds BotComponents from config. Isolates assembly
//! logic from the runner.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, instrument};
use translator::{DeepSeekTranslator, Translator};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::Bot as CoreBot;
use crate::handlers::{CommandHandler, TranslateHandler};
use crate::telegram::TelegramBotAdapter;

/// Core dependencies for run_bot; produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: Bot,
    pub bot_adapter: Arc<dyn CoreBot>,
    pub translator: Arc<dyn Translator>,
}

/// Builds BotComponents from config.
#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = {
        let bot = Bot::new(config.bot_token.clone());
        if let Some(ref url_str) = config.telegram_api_url {
            match reqwest::Url::parse(url_str) {
                Ok(url) => bot.set_api_url(url),
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            }
        } else {
            bot
        }
    };

    let bot_adapter: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    let translator: Arc<dyn Translator> = Arc::new(
        DeepSeekTranslator::with_base_url(
            config.deepseek_api_key.clone(),
            config.deepseek_base_url.clone(),
        )
        .with_model(config.translation_model.clone()),
    );

    Ok(BotComponents {
        teloxide_bot,
        bot_adapter,
        translator,
    })
}

/// Builds the handler chain: commands first so slash commands never reach the
/// translate handler.
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    let command_handler = Arc::new(CommandHandler::new(components.bot_adapter.clone()));
    let translate_handler = Arc::new(TranslateHandler::new(
        components.translator.clone(),
        components.bot_adapter.clone(),
    ));
    HandlerChain::new()
        .add_handler(command_handler)
        .add_handler(translate_handler)
}
