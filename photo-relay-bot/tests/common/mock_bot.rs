//! Mock implementation of [`photo_relay_bot::Bot`] for integration tests.
//!
//! Records every successful call so tests can assert on what would have been sent to Telegram.
//! Individual operations can be switched to fail to exercise fallbacks.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use photo_relay_bot::{Bot, Chat, ChatTarget, InlineKeyboard, RelayError, Result};

/// One recorded outgoing call.
#[derive(Debug, Clone, PartialEq)]
pub enum BotCall {
    SendMessage {
        target: ChatTarget,
        text: String,
    },
    SendKeyboard {
        target: ChatTarget,
        text: String,
        keyboard: InlineKeyboard,
    },
    SendPhoto {
        target: ChatTarget,
        file_id: String,
        caption: Option<String>,
        keyboard: Option<InlineKeyboard>,
    },
    SendPoll {
        target: ChatTarget,
        question: String,
        options: Vec<String>,
    },
    EditText {
        chat_id: i64,
        message_id: String,
        text: String,
    },
    EditCaption {
        chat_id: i64,
        message_id: String,
        caption: String,
    },
    AnswerCallback {
        query_id: String,
        text: Option<String>,
    },
}

#[derive(Default)]
pub struct MockBot {
    calls: Mutex<Vec<BotCall>>,
    next_id: AtomicUsize,
    pub fail_caption_edits: AtomicBool,
    pub fail_text_edits: AtomicBool,
    pub fail_polls: AtomicBool,
    /// send_photo to this target fails.
    pub fail_photos_to: Mutex<Option<ChatTarget>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<BotCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns and clears the recorded calls.
    pub fn take_calls(&self) -> Vec<BotCall> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }

    pub fn fail_photos_to(&self, target: ChatTarget) {
        *self.fail_photos_to.lock().unwrap() = Some(target);
    }

    fn record(&self, call: BotCall) -> String {
        self.calls.lock().unwrap().push(call);
        (self.next_id.fetch_add(1, Ordering::SeqCst) + 1).to_string()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, target: &ChatTarget, text: &str) -> Result<()> {
        self.record(BotCall::SendMessage {
            target: target.clone(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_message_with_keyboard(
        &self,
        target: &ChatTarget,
        text: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<String> {
        Ok(self.record(BotCall::SendKeyboard {
            target: target.clone(),
            text: text.to_string(),
            keyboard: keyboard.clone(),
        }))
    }

    async fn send_photo(
        &self,
        target: &ChatTarget,
        file_id: &str,
        caption: Option<&str>,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<String> {
        if self.fail_photos_to.lock().unwrap().as_ref() == Some(target) {
            return Err(RelayError::Bot("send_photo failed".to_string()));
        }
        Ok(self.record(BotCall::SendPhoto {
            target: target.clone(),
            file_id: file_id.to_string(),
            caption: caption.map(str::to_string),
            keyboard: keyboard.cloned(),
        }))
    }

    async fn send_poll(&self, target: &ChatTarget, question: &str, options: &[String]) -> Result<String> {
        if self.fail_polls.load(Ordering::SeqCst) {
            return Err(RelayError::Bot("send_poll failed".to_string()));
        }
        Ok(self.record(BotCall::SendPoll {
            target: target.clone(),
            question: question.to_string(),
            options: options.to_vec(),
        }))
    }

    async fn edit_message_text(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        if self.fail_text_edits.load(Ordering::SeqCst) {
            return Err(RelayError::Bot("edit_message_text failed".to_string()));
        }
        self.record(BotCall::EditText {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn edit_message_caption(&self, chat: &Chat, message_id: &str, caption: &str) -> Result<()> {
        if self.fail_caption_edits.load(Ordering::SeqCst) {
            return Err(RelayError::Bot("edit_message_caption failed".to_string()));
        }
        self.record(BotCall::EditCaption {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            caption: caption.to_string(),
        });
        Ok(())
    }

    async fn answer_callback(&self, query_id: &str, text: Option<&str>) -> Result<()> {
        self.record(BotCall::AnswerCallback {
            query_id: query_id.to_string(),
            text: text.map(str::to_string),
        });
        Ok(())
    }
}
