//! Bot configuration: BaseConfig (Telegram + log) + RelayConfig (channel, owner, approval storage).

mod base;
mod bot_config;
mod relay;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use relay::{ApprovalStoreType, RelayConfig};
