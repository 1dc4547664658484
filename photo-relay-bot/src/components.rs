//! Component factory: builds BotComponents and the handler chain from config. Isolates assembly logic from runner.

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::approval::{ApprovalStore, InMemoryApprovalStore, SqliteApprovalStore};
use crate::chain::HandlerChain;
use crate::config::{ApprovalStoreType, BotConfig};
use crate::core::{Bot as CoreBot, ChatTarget};
use crate::handlers::{LoggingHandler, ModerationHandler, SubmissionHandler};
use crate::session::SessionStore;
use crate::telegram::TelegramBotAdapter;

/// Core dependencies for run_bot; produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: Bot,
    pub bot: Arc<dyn CoreBot>,
    pub sessions: SessionStore,
    pub approvals: Arc<dyn ApprovalStore>,
    pub channel: ChatTarget,
    pub owner_chat_id: i64,
}

/// Creates the approval store selected by APPROVAL_STORE_TYPE.
#[instrument(skip(config))]
pub async fn create_approval_store(config: &BotConfig) -> Result<Arc<dyn ApprovalStore>> {
    let store: Arc<dyn ApprovalStore> = match config.approval_store_type()? {
        ApprovalStoreType::Sqlite => {
            info!(db_path = %config.approval_db_path(), "Using SQLite approval store");
            Arc::new(
                SqliteApprovalStore::new(config.approval_db_path())
                    .await
                    .map_err(|e| {
                        error!(error = %e, "Failed to initialize SQLite approval store");
                        anyhow::anyhow!("Failed to initialize SQLite approval store: {}", e)
                    })?,
            )
        }
        ApprovalStoreType::Memory => {
            info!("Using in-memory approval store");
            Arc::new(InMemoryApprovalStore::new())
        }
    };
    Ok(store)
}

/// teloxide Bot with the optional API URL override applied.
pub fn build_teloxide_bot(config: &BotConfig) -> Bot {
    let bot = Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Builds BotComponents with the given approval store.
#[instrument(skip(config, approvals))]
pub fn build_bot_components(
    config: &BotConfig,
    approvals: Arc<dyn ApprovalStore>,
) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config);
    let bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    Ok(BotComponents {
        teloxide_bot,
        bot,
        sessions: SessionStore::new(),
        approvals,
        channel: config.channel()?,
        owner_chat_id: config.owner_chat_id()?,
    })
}

/// Builds the handler chain (logging → moderation → submission).
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    let moderation = Arc::new(ModerationHandler::new(
        components.bot.clone(),
        components.approvals.clone(),
        components.channel.clone(),
        components.owner_chat_id,
    ));
    let submission = Arc::new(SubmissionHandler::new(
        components.bot.clone(),
        components.sessions.clone(),
        components.approvals.clone(),
        ChatTarget::Id(components.owner_chat_id),
    ));
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(moderation)
        .add_handler(submission)
}
