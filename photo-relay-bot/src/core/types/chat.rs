//! Chat identity types: [`Chat`] for incoming updates, [`ChatTarget`] for outgoing destinations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::RelayError;

/// Chat (channel, group or private) identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// Destination of an outgoing message: numeric chat id or public `@username` (channels).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChatTarget {
    Id(i64),
    Username(String),
}

impl FromStr for ChatTarget {
    type Err = RelayError;

    /// Accepts `-1001234567890` style ids or `@channel_name`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(name) = s.strip_prefix('@') {
            let valid = !name.is_empty()
                && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            return if valid {
                Ok(ChatTarget::Username(s.to_string()))
            } else {
                Err(RelayError::Config(format!("Invalid chat username: {}", s)))
            };
        }
        s.parse::<i64>()
            .map(ChatTarget::Id)
            .map_err(|_| RelayError::Config(format!("Invalid chat id: {}", s)))
    }
}

impl fmt::Display for ChatTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatTarget::Id(id) => write!(f, "{}", id),
            ChatTarget::Username(name) => f.write_str(name),
        }
    }
}

impl From<&Chat> for ChatTarget {
    fn from(chat: &Chat) -> Self {
        ChatTarget::Id(chat.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_and_username() {
        assert_eq!(
            "-1001234567890".parse::<ChatTarget>().unwrap(),
            ChatTarget::Id(-1001234567890)
        );
        assert_eq!(
            " @my_channel ".parse::<ChatTarget>().unwrap(),
            ChatTarget::Username("@my_channel".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<ChatTarget>().is_err());
        assert!("@".parse::<ChatTarget>().is_err());
        assert!("@bad name".parse::<ChatTarget>().is_err());
        assert!("your_channel_id_here".parse::<ChatTarget>().is_err());
    }

    #[test]
    fn test_display_round_trips_input() {
        assert_eq!(ChatTarget::Id(42).to_string(), "42");
        assert_eq!(ChatTarget::Username("@chan".into()).to_string(), "@chan");
    }
}
