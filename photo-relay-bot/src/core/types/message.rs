//! Message and kind types for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// What an incoming update carries. Callback queries are modeled as messages so one chain handles both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// Plain text (not starting with `/`).
    Text,
    /// `/name args`; `name` is lowercase without the leading `/` or `@botname` suffix.
    Command { name: String, args: String },
    /// Photo; `file_id` is the largest available size.
    Photo { file_id: String },
    /// File attachment.
    Document { mime_type: Option<String> },
    /// Inline button press. `has_photo` tells whether the message carrying the button is a photo (caption vs text edits).
    Callback {
        query_id: String,
        data: String,
        has_photo: bool,
    },
    /// Anything else (stickers, voice, service messages).
    Other,
}

/// A single incoming update with user, chat, content and kind.
///
/// `id` is the Telegram message id; for callbacks it is the id of the message that carries the keyboard.
/// `content` is text, caption, or callback data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub kind: MessageKind,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Builds a message stamped with the current time.
    pub fn new(
        id: impl Into<String>,
        user: User,
        chat: Chat,
        content: impl Into<String>,
        kind: MessageKind,
    ) -> Self {
        Self {
            id: id.into(),
            user,
            chat,
            content: content.into(),
            kind,
            created_at: Utc::now(),
        }
    }

    /// Short kind label for logs.
    pub fn message_type(&self) -> &'static str {
        match self.kind {
            MessageKind::Text => "text",
            MessageKind::Command { .. } => "command",
            MessageKind::Photo { .. } => "photo",
            MessageKind::Document { .. } => "document",
            MessageKind::Callback { .. } => "callback",
            MessageKind::Other => "other",
        }
    }

    /// Callback data, if this is a button press.
    pub fn callback_data(&self) -> Option<&str> {
        match &self.kind {
            MessageKind::Callback { data, .. } => Some(data),
            _ => None,
        }
    }
}
