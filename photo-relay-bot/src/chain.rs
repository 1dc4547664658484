//! # Handler chain
//!
//! Every update (message or button press) passes through the same ordered list of handlers in three phases:
//! every `before` in order, any `false` ends the update with Stop; `handle` in order until one returns Stop
//! or Reply; every `after` in reverse order, seeing the final response. `Ignore` and `Continue` pass control on.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::core::{Handler, HandlerResponse, Message, Result};

/// Ordered handlers for one bot. Cloning shares the handlers.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler; handlers run in insertion order.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Type names of the handlers, in run order.
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers
            .iter()
            .map(|h| h.name())
            .collect()
    }

    #[instrument(skip(self, message))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        debug!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            message_type = message.message_type(),
            "step: chain start"
        );

        for handler in &self.handlers {
            if !handler.before(message).await? {
                info!(
                    user_id = message.user.id,
                    handler = handler.name(),
                    "step: update rejected in before()"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut outcome = HandlerResponse::Continue;
        for handler in &self.handlers {
            let handler_name = handler.name();
            let response = handler.handle(message).await?;
            debug!(handler = handler_name, response = ?response, "handler returned");
            if matches!(response, HandlerResponse::Stop | HandlerResponse::Reply(_)) {
                info!(
                    user_id = message.user.id,
                    handler = handler_name,
                    response = ?response,
                    "step: update handled"
                );
                outcome = response;
                break;
            }
        }

        for handler in self.handlers.iter().rev() {
            handler.after(message, &outcome).await?;
        }

        Ok(outcome)
    }
}
