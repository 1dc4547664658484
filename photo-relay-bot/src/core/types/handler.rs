//! The [`Handler`] trait run by the chain, plus conversions from transport types into core types.

use async_trait::async_trait;

use super::{message::Message, response::HandlerResponse, user::User};
use crate::core::error::Result;

pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Implemented by wrappers around transport updates (messages and callback queries).
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// One step of the chain. Every phase has a pass-through default, so a handler implements only what it needs.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Name used in logs; the implementing type's path by default.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// `false` drops the update before any handler sees it.
    async fn before(&self, _message: &Message) -> Result<bool> {
        Ok(true)
    }

    /// Stop or Reply claims the update; Continue or Ignore hands it to the next handler.
    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }

    /// Called in reverse order with the response that ended the handle phase.
    async fn after(&self, _message: &Message, _response: &HandlerResponse) -> Result<()> {
        Ok(())
    }
}
