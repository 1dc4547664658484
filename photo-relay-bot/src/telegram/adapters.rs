//! Adapters from Telegram (teloxide) types to core types.

use crate::core::{Chat, Message, MessageKind, ToCoreMessage, ToCoreUser, User};

/// Telegram user → core user.
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn core_chat(chat: &teloxide::types::Chat) -> Chat {
    let chat_type = if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    };
    Chat {
        id: chat.id.0,
        chat_type: chat_type.to_string(),
    }
}

/// Splits `/Name@bot args` into (`name`, `args`). `None` when the text is not a command.
pub fn parse_command(text: &str) -> Option<(String, String)> {
    let rest = text.strip_prefix('/')?;
    let (head, args) = match rest.find(char::is_whitespace) {
        Some(i) => (&rest[..i], rest[i..].trim()),
        None => (rest, ""),
    };
    let name = head.split('@').next().unwrap_or_default();
    if name.is_empty() {
        return None;
    }
    Some((name.to_lowercase(), args.to_string()))
}

/// Telegram message → core message.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> TelegramMessageWrapper<'a> {
    fn kind(&self) -> MessageKind {
        let msg = self.0;
        if let Some(text) = msg.text() {
            return match parse_command(text) {
                Some((name, args)) => MessageKind::Command { name, args },
                None => MessageKind::Text,
            };
        }
        if let Some(photos) = msg.photo() {
            if let Some(largest) = photos
                .iter()
                .max_by_key(|p| u64::from(p.width) * u64::from(p.height))
            {
                return MessageKind::Photo {
                    file_id: largest.file.id.to_string(),
                };
            }
        }
        if let Some(doc) = msg.document() {
            return MessageKind::Document {
                mime_type: doc.mime_type.as_ref().map(|m| m.to_string()),
            };
        }
        MessageKind::Other
    }
}

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let msg = self.0;
        Message {
            id: msg.id.to_string(),
            user: msg
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(User::unknown),
            chat: core_chat(&msg.chat),
            content: msg.text().or(msg.caption()).unwrap_or("").to_string(),
            kind: self.kind(),
            created_at: msg.date,
        }
    }
}

/// Telegram callback query → core message of kind [`MessageKind::Callback`].
///
/// Chat and id come from the message carrying the pressed button; if Telegram did not include it,
/// the chat falls back to the user's private chat and the id is empty.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreMessage for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Message {
        let query = self.0;
        let user = TelegramUserWrapper(&query.from).to_core();
        let (chat, id) = match &query.message {
            Some(m) => (core_chat(m.chat()), m.id().to_string()),
            None => (
                Chat {
                    id: user.id,
                    chat_type: "private".to_string(),
                },
                String::new(),
            ),
        };
        let has_photo = query
            .message
            .as_ref()
            .and_then(|m| m.regular_message())
            .and_then(|m| m.photo())
            .is_some();
        let data = query.data.clone().unwrap_or_default();

        Message {
            id,
            user,
            chat,
            content: data.clone(),
            kind: MessageKind::Callback {
                query_id: query.id.to_string(),
                data,
                has_photo,
            },
            created_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("/start"), Some(("start".into(), "".into())));
        assert_eq!(
            parse_command("/Poll@relay_bot Q|A|B"),
            Some(("poll".into(), "Q|A|B".into()))
        );
        assert_eq!(parse_command("/ "), None);
        assert_eq!(parse_command("hello /start"), None);
    }
}
