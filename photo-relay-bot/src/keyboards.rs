//! Inline keyboards for each step of the flow.

use uuid::Uuid;

use crate::callback::CallbackAction;
use crate::core::{InlineButton, InlineKeyboard};
use crate::texts;

fn button(label: &str, action: CallbackAction) -> InlineButton {
    InlineButton::new(label, action.to_data())
}

/// Yes / No under "do you need a caption or poll?" (one button per row).
pub fn caption_or_poll_prompt() -> InlineKeyboard {
    InlineKeyboard::new()
        .row(vec![button(texts::BUTTON_YES, CallbackAction::AddCaptionPoll)])
        .row(vec![button(texts::BUTTON_NO, CallbackAction::NoCaptionPoll)])
}

/// Confirm / New Input under a preview; `confirm` is ConfirmCaption or ConfirmPoll.
pub fn preview(confirm: CallbackAction) -> InlineKeyboard {
    InlineKeyboard::new().row(vec![
        button(texts::BUTTON_CONFIRM, confirm),
        button(texts::BUTTON_NEW_INPUT, CallbackAction::NewInput),
    ])
}

/// Approve / Disapprove under the owner's copy.
pub fn moderation(approval_id: Uuid) -> InlineKeyboard {
    InlineKeyboard::new().row(vec![
        button(texts::BUTTON_APPROVE, CallbackAction::Approve(approval_id)),
        button(texts::BUTTON_DISAPPROVE, CallbackAction::Disapprove(approval_id)),
    ])
}
