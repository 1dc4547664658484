//! Dispatcher runner: converts teloxide messages and callback queries to core::Message and passes them to HandlerChain.

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, Message as TgMessage};
use tracing::{debug, error, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};
use crate::chain::HandlerChain;
use crate::core::{Bot as CoreBot, ChatTarget, HandlerResponse, Message, MessageKind, ToCoreMessage};

/// Runs the chain on one core message and sends a `Reply` back to the message's chat.
pub async fn process_message(
    chain: &HandlerChain,
    bot: &dyn CoreBot,
    message: &Message,
) -> crate::core::Result<HandlerResponse> {
    let response = chain.handle(message).await?;
    if let HandlerResponse::Reply(text) = &response {
        bot.send_message(&ChatTarget::from(&message.chat), text).await?;
    }
    Ok(response)
}

/// Answers the callback query, then runs the chain on it. A failed answer is only logged.
pub async fn process_callback(
    chain: &HandlerChain,
    bot: &dyn CoreBot,
    message: &Message,
) -> crate::core::Result<HandlerResponse> {
    if let MessageKind::Callback { query_id, .. } = &message.kind {
        if let Err(e) = bot.answer_callback(query_id, None).await {
            warn!(error = %e, user_id = message.user.id, "answer_callback failed");
        }
    }
    process_message(chain, bot, message).await
}

async fn on_message(
    msg: TgMessage,
    chain: Arc<HandlerChain>,
    core_bot: Arc<dyn CoreBot>,
) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    if let Err(e) = process_message(&chain, core_bot.as_ref(), &core_msg).await {
        error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
    }
    Ok(())
}

async fn on_callback_query(
    query: CallbackQuery,
    chain: Arc<HandlerChain>,
    core_bot: Arc<dyn CoreBot>,
) -> ResponseResult<()> {
    let core_msg = TelegramCallbackWrapper(&query).to_core();
    if let Err(e) = process_callback(&chain, core_bot.as_ref(), &core_msg).await {
        error!(error = %e, user_id = core_msg.user.id, "Handler chain failed for callback");
    }
    Ok(())
}

/// Starts long polling with a message branch and a callback-query branch; returns on Ctrl-C.
///
/// Updates from the same chat are processed in order; different chats run concurrently.
#[instrument(skip(bot, handler_chain, core_bot))]
pub async fn run_dispatcher(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    core_bot: Arc<dyn CoreBot>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(username = ?me.user.username, "Connected to Telegram"),
        Err(e) => warn!(error = %e, "get_me failed; continuing"),
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback_query));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![Arc::new(handler_chain), core_bot])
        .default_handler(|upd| async move {
            debug!(update_id = ?upd.id, "Unhandled update");
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}
