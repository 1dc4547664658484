//! Main entry: validate config, init logging, build components and chain, then run the dispatcher.

use anyhow::Result;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain, create_approval_store};
use crate::config::BotConfig;
use crate::core::init_tracing;
use crate::telegram::run_dispatcher;

#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        channel = %config.relay().channel_id,
        owner_chat_id = %config.relay().owner_chat_id,
        approval_store = %config.relay().approval_store_type,
        "Initializing bot"
    );

    let approvals = create_approval_store(&config).await?;
    let components = build_bot_components(&config, approvals)?;
    let handler_chain = build_handler_chain(&components);
    info!(handlers = ?handler_chain.handler_names(), "Handler chain built");

    info!("Bot started successfully");

    run_dispatcher(components.teloxide_bot, handler_chain, components.bot).await
}
