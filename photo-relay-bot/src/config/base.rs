//! Base config: Telegram Bot connection and logging. Loaded from env.

use anyhow::Result;
use std::env;

/// Placeholder shipped in `.env.example`; treated as missing.
pub const TOKEN_PLACEHOLDER: &str = "YOUR_BOT_TOKEN_HERE";

/// Base config: Telegram-related and logging only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// TELEGRAM_BOT_TOKEN or BOT_TOKEN; empty when unset
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// Log file path
    pub log_file: String,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides the env token if provided.
    /// Missing values are left empty; [`BaseConfig::validate`] reports them.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .or_else(|| env::var("TELEGRAM_BOT_TOKEN").ok())
            .or_else(|| env::var("BOT_TOKEN").ok())
            .unwrap_or_default();
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/photo-relay-bot.log".to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// True when the token is unset or still the placeholder.
    pub fn token_missing(&self) -> bool {
        let token = self.bot_token.trim();
        token.is_empty() || token == TOKEN_PLACEHOLDER
    }

    /// Validate the optional API URL.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
