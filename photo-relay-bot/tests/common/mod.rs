//! Shared helpers for integration tests: message builders, mock bot, tracing setup.

#![allow(dead_code)]

pub mod flaky_store;
pub mod mock_bot;

use std::sync::Once;

use photo_relay_bot::{Chat, Message, MessageKind, User};
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing once per test process; `RUST_LOG` controls the level.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("debug,photo_relay_bot=debug"));
        let _ = fmt().with_env_filter(env_filter).with_test_writer().try_init();
    });
}

pub fn user(id: i64) -> User {
    User {
        id,
        username: Some(format!("user{}", id)),
        first_name: Some("Test".to_string()),
        last_name: None,
    }
}

pub fn private_chat(id: i64) -> Chat {
    Chat {
        id,
        chat_type: "private".to_string(),
    }
}

pub fn group_chat(id: i64) -> Chat {
    Chat {
        id,
        chat_type: "supergroup".to_string(),
    }
}

/// A message the user sends in their private chat with the bot.
pub fn user_message(user_id: i64, content: &str, kind: MessageKind) -> Message {
    Message::new("100", user(user_id), private_chat(user_id), content, kind)
}

pub fn text(user_id: i64, content: &str) -> Message {
    user_message(user_id, content, MessageKind::Text)
}

pub fn command(user_id: i64, content: &str) -> Message {
    let (name, args) = photo_relay_bot::telegram::parse_command(content).expect("not a command");
    user_message(user_id, content, MessageKind::Command { name, args })
}

pub fn photo(user_id: i64, file_id: &str) -> Message {
    user_message(
        user_id,
        "",
        MessageKind::Photo {
            file_id: file_id.to_string(),
        },
    )
}

/// A button press by `user_id` on message `message_id` in `chat_id`.
pub fn callback(user_id: i64, chat_id: i64, message_id: &str, data: &str, has_photo: bool) -> Message {
    Message::new(
        message_id,
        user(user_id),
        private_chat(chat_id),
        data,
        MessageKind::Callback {
            query_id: format!("q-{}", message_id),
            data: data.to_string(),
            has_photo,
        },
    )
}
