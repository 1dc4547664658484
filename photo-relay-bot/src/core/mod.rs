//! Core types and traits: Handler, Bot, Message, HandlerResponse, error, logger.
//! Transport-agnostic; the Telegram layer converts into and out of these types.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{RelayError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, ChatTarget, Handler, HandlerResponse, InlineButton, InlineKeyboard, Message,
    MessageKind, ToCoreMessage, ToCoreUser, User,
};
