//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Production code sends via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{
        CallbackQueryId, ChatId, FileId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile,
        InputPollOption, MessageId, Recipient,
    },
};

use crate::core::{parse_message_id, Bot as CoreBot, Chat, ChatTarget, InlineKeyboard, RelayError, Result};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn bot_error(e: teloxide::RequestError) -> RelayError {
    RelayError::Bot(e.to_string())
}

fn recipient(target: &ChatTarget) -> Recipient {
    match target {
        ChatTarget::Id(id) => Recipient::Id(ChatId(*id)),
        ChatTarget::Username(name) => Recipient::ChannelUsername(name.clone()),
    }
}

fn markup(keyboard: &InlineKeyboard) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(keyboard.rows.iter().map(|row| {
        row.iter()
            .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.data.clone()))
            .collect::<Vec<_>>()
    }))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, target: &ChatTarget, text: &str) -> Result<()> {
        self.bot
            .send_message(recipient(target), text)
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_message_with_keyboard(
        &self,
        target: &ChatTarget,
        text: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<String> {
        let sent = self
            .bot
            .send_message(recipient(target), text)
            .reply_markup(markup(keyboard))
            .await
            .map_err(bot_error)?;
        Ok(sent.id.to_string())
    }

    async fn send_photo(
        &self,
        target: &ChatTarget,
        file_id: &str,
        caption: Option<&str>,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<String> {
        let mut request = self
            .bot
            .send_photo(recipient(target), InputFile::file_id(FileId(file_id.to_string())));
        if let Some(caption) = caption {
            request = request.caption(caption);
        }
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(markup(keyboard));
        }
        let sent = request.await.map_err(bot_error)?;
        Ok(sent.id.to_string())
    }

    async fn send_poll(&self, target: &ChatTarget, question: &str, options: &[String]) -> Result<String> {
        let options = options.iter().map(|o| InputPollOption::new(o.clone()));
        let sent = self
            .bot
            .send_poll(recipient(target), question, options)
            .await
            .map_err(bot_error)?;
        Ok(sent.id.to_string())
    }

    async fn edit_message_text(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .edit_message_text(ChatId(chat.id), MessageId(id), text)
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn edit_message_caption(&self, chat: &Chat, message_id: &str, caption: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .edit_message_caption(ChatId(chat.id), MessageId(id))
            .caption(caption)
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn answer_callback(&self, query_id: &str, text: Option<&str>) -> Result<()> {
        let mut request = self
            .bot
            .answer_callback_query(CallbackQueryId(query_id.to_string()));
        if let Some(text) = text {
            request = request.text(text);
        }
        request.await.map_err(bot_error)?;
        Ok(())
    }
}
