//! Updates the message that carried a pressed button, falling back to a new message.

use tracing::{error, info, warn};

use crate::core::{Bot, ChatTarget, Message, MessageKind};

/// Shows `text` in place of the button message.
///
/// Photo messages get their caption edited; otherwise (or if that fails) the text is edited;
/// if both fail a new message is sent to the chat. Never fails: errors are only logged.
pub async fn edit_or_reply(bot: &dyn Bot, message: &Message, text: &str) {
    let has_photo = matches!(message.kind, MessageKind::Callback { has_photo: true, .. });

    if has_photo {
        info!(chat_id = message.chat.id, message_id = %message.id, "edit_or_reply: editing caption for photo message");
        match bot.edit_message_caption(&message.chat, &message.id, text).await {
            Ok(()) => return,
            Err(e) => warn!(error = %e, "edit_message_caption failed"),
        }
    }

    match bot.edit_message_text(&message.chat, &message.id, text).await {
        Ok(()) => return,
        Err(e) => warn!(error = %e, "edit_message_text failed"),
    }

    if let Err(e) = bot.send_message(&ChatTarget::from(&message.chat), text).await {
        error!(error = %e, chat_id = message.chat.id, "fallback send_message also failed");
    }
}
