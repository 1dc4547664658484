//! BotConfig: BaseConfig + RelayConfig. Use load() for env-based loading, then validate().

use anyhow::Result;

use super::{ApprovalStoreType, BaseConfig, RelayConfig};
use crate::core::ChatTarget;

pub struct BotConfig {
    pub base: BaseConfig,
    pub relay: RelayConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides the env token.
    /// Never fails on missing values; call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let relay = RelayConfig::from_env()?;
        Ok(Self { base, relay })
    }

    /// Names of required settings that are unset or still placeholders.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.base.token_missing() {
            missing.push("TELEGRAM_BOT_TOKEN");
        }
        if self.relay.channel_missing() {
            missing.push("CHANNEL_ID");
        }
        if self.relay.owner_missing() {
            missing.push("OWNER_CHAT_ID");
        }
        missing
    }

    /// Fails fast before init: reports every missing setting at once, then checks formats.
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing();
        if !missing.is_empty() {
            anyhow::bail!(
                "Missing or placeholder configuration for: {}. Please update the .env file or set environment variables.",
                missing.join(", ")
            );
        }
        self.base.validate()?;
        self.relay.channel()?;
        self.relay.owner_chat_id()?;
        self.relay.store_type()?;
        Ok(())
    }

    pub fn relay(&self) -> &RelayConfig {
        &self.relay
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn channel(&self) -> Result<ChatTarget> {
        self.relay.channel()
    }
    pub fn owner_chat_id(&self) -> Result<i64> {
        self.relay.owner_chat_id()
    }
    pub fn approval_store_type(&self) -> Result<ApprovalStoreType> {
        self.relay.store_type()
    }
    pub fn approval_db_path(&self) -> &str {
        &self.relay.approval_db_path
    }
}
