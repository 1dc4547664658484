//! Bot abstraction for sending and editing messages.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in `crate::telegram::TelegramBotAdapter`.
//! Handlers only talk to `Arc<dyn Bot>`, so tests substitute a recording mock.

use async_trait::async_trait;

use super::error::{RelayError, Result};
use super::types::{Chat, ChatTarget, InlineKeyboard};

/// Outgoing operations the relay needs. Ids returned are transport-specific message ids (Telegram: numeric string).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message.
    async fn send_message(&self, target: &ChatTarget, text: &str) -> Result<()>;

    /// Sends a text message with an inline keyboard and returns its id.
    async fn send_message_with_keyboard(
        &self,
        target: &ChatTarget,
        text: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<String>;

    /// Sends an already-uploaded photo by file id, with optional caption and keyboard; returns the new message id.
    async fn send_photo(
        &self,
        target: &ChatTarget,
        file_id: &str,
        caption: Option<&str>,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<String>;

    /// Sends a regular poll; returns the new message id.
    async fn send_poll(&self, target: &ChatTarget, question: &str, options: &[String]) -> Result<String>;

    /// Replaces the text of a text message.
    async fn edit_message_text(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()>;

    /// Replaces the caption of a media message.
    async fn edit_message_caption(&self, chat: &Chat, message_id: &str, caption: &str) -> Result<()>;

    /// Acknowledges a callback query so the client stops its progress indicator.
    async fn answer_callback(&self, query_id: &str, text: Option<&str>) -> Result<()>;
}

/// Parses a message id string into an i32. Used by the edit operations.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| RelayError::Bot(format!("Invalid message_id for edit: {}", s)))
}
