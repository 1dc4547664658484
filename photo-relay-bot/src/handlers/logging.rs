//! Logs each update in before() and the outcome in after(); always continues.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::core::{Handler, HandlerResponse, Message, Result};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            chat_id = message.chat.id,
            message_type = message.message_type(),
            content = %message.content,
            "Received update"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = %message.id,
            response = ?response,
            "Processed update"
        );
        Ok(())
    }
}
