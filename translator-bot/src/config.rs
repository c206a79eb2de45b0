//! Bot configuration, loaded from environment variables.

use anyhow::{bail, Result};
use std::env;

/// Configuration for the translator bot.
pub struct BotConfig {
    pub bot_token: String,
    pub deepseek_api_key: String,
    pub deepseek_base_url: String,
    pub translation_model: String,
    pub health_port: u16,
    pub log_file: String,
    /// Optional Telegram Bot API base URL. When set, bot requests go there
    /// instead of api.telegram.org (used by tests to point at a mock server).
    /// Env: `TELEGRAM_API_URL` or `TELOXIDE_API_URL`.
    pub telegram_api_url: Option<String>,
}

impl BotConfig {
    /// Loads config from environment variables. When `token` is given it
    /// overrides `TELEGRAM_TOKEN` / `BOT_TOKEN`.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .or_else(|| env::var("TELEGRAM_TOKEN").ok())
            .or_else(|| env::var("BOT_TOKEN").ok())
            .unwrap_or_default();
        let deepseek_api_key = env::var("DEEPSEEK_API_KEY").unwrap_or_default();
        let deepseek_base_url = env::var("DEEPSEEK_BASE_URL")
            .unwrap_or_else(|_| deepseek_client::DEEPSEEK_BASE_URL.to_string());
        let translation_model =
            env::var("TRANSLATION_MODEL").unwrap_or_else(|_| "deepseek-chat".to_string());
        let health_port = env::var("HEALTH_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8000);
        let log_file = "logs/translator-bot.log".to_string();

        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            bot_token,
            deepseek_api_key,
            deepseek_base_url,
            translation_model,
            health_port,
            log_file,
            telegram_api_url,
        })
    }

    /// Fails when a required secret is missing.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.is_empty() {
            bail!("TELEGRAM_TOKEN not set (or pass --token)");
        }
        if self.deepseek_api_key.is_empty() {
            bail!("DEEPSEEK_API_KEY not set");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            "TELEGRAM_TOKEN",
            "BOT_TOKEN",
            "DEEPSEEK_API_KEY",
            "DEEPSEEK_BASE_URL",
            "TRANSLATION_MODEL",
            "HEALTH_PORT",
            "TELEGRAM_API_URL",
            "TELOXIDE_API_URL",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();
        env::set_var("TELEGRAM_TOKEN", "test_token");
        env::set_var("DEEPSEEK_API_KEY", "test_key");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "test_token");
        assert_eq!(config.deepseek_api_key, "test_key");
        assert_eq!(config.deepseek_base_url, "https://api.deepseek.com");
        assert_eq!(config.translation_model, "deepseek-chat");
        assert_eq!(config.health_port, 8000);
        assert_eq!(config.log_file, "logs/translator-bot.log");
        assert!(config.telegram_api_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("TELEGRAM_TOKEN", "custom_token");
        env::set_var("DEEPSEEK_API_KEY", "custom_key");
        env::set_var("DEEPSEEK_BASE_URL", "https://custom.api.com");
        env::set_var("TRANSLATION_MODEL", "deepseek-reasoner");
        env::set_var("HEALTH_PORT", "9000");
        env::set_var("TELEGRAM_API_URL", "http://localhost:8081");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "custom_token");
        assert_eq!(config.deepseek_base_url, "https://custom.api.com");
        assert_eq!(config.translation_model, "deepseek-reasoner");
        assert_eq!(config.health_port, 9000);
        assert_eq!(
            config.telegram_api_url,
            Some("http://localhost:8081".to_string())
        );
    }

    #[test]
    #[serial]
    fn test_load_config_with_override_token() {
        clear_env();
        env::set_var("TELEGRAM_TOKEN", "env_token");
        env::set_var("DEEPSEEK_API_KEY", "test_key");

        let config = BotConfig::load(Some("override_token".to_string())).unwrap();

        assert_eq!(config.bot_token, "override_token");
    }

    #[test]
    #[serial]
    fn test_load_config_bot_token_fallback() {
        clear_env();
        env::set_var("BOT_TOKEN", "fallback_token");
        env::set_var("DEEPSEEK_API_KEY", "test_key");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "fallback_token");
    }

    #[test]
    #[serial]
    fn test_validate_rejects_missing_secrets() {
        clear_env();
        let config = BotConfig::load(None).unwrap();
        assert!(config.validate().is_err());

        env::set_var("TELEGRAM_TOKEN", "t");
        let config = BotConfig::load(None).unwrap();
        assert!(config.validate().is_err());

        env::set_var("DEEPSEEK_API_KEY", "k");
        let config = BotConfig::load(None).unwrap();
        assert!(config.validate().is_ok());
    }
}
