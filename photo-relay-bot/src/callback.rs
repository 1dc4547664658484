//! Inline-button callback data.
//!
//! Telegram limits callback data to 64 bytes; the longest value here is `disapprove:<uuid>` (47 bytes).

use uuid::Uuid;

const ADD_CAPTION_POLL: &str = "add_caption_poll";
const NO_CAPTION_POLL: &str = "no_caption_poll";
const CONFIRM_CAPTION: &str = "confirm_caption";
const CONFIRM_POLL: &str = "confirm_poll";
const NEW_INPUT: &str = "new_input";
const APPROVE_PREFIX: &str = "approve:";
const DISAPPROVE_PREFIX: &str = "disapprove:";

/// Action encoded in a button's callback data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    /// "Yes" on the photo prompt: show the guide.
    AddCaptionPoll,
    /// "No" on the photo prompt: submit the bare photo.
    NoCaptionPoll,
    ConfirmCaption,
    ConfirmPoll,
    /// Discard the preview and show the guide again.
    NewInput,
    Approve(Uuid),
    Disapprove(Uuid),
    /// Anything unrecognized, including `approve` / `disapprove` without an id.
    Unknown,
}

impl CallbackAction {
    pub fn parse(data: &str) -> Self {
        match data {
            ADD_CAPTION_POLL => return CallbackAction::AddCaptionPoll,
            NO_CAPTION_POLL => return CallbackAction::NoCaptionPoll,
            CONFIRM_CAPTION => return CallbackAction::ConfirmCaption,
            CONFIRM_POLL => return CallbackAction::ConfirmPoll,
            NEW_INPUT => return CallbackAction::NewInput,
            _ => {}
        }
        if let Some(id) = data.strip_prefix(APPROVE_PREFIX) {
            return Uuid::parse_str(id)
                .map(CallbackAction::Approve)
                .unwrap_or(CallbackAction::Unknown);
        }
        if let Some(id) = data.strip_prefix(DISAPPROVE_PREFIX) {
            return Uuid::parse_str(id)
                .map(CallbackAction::Disapprove)
                .unwrap_or(CallbackAction::Unknown);
        }
        CallbackAction::Unknown
    }

    /// Callback data for this action. `Unknown` renders as an empty string.
    pub fn to_data(&self) -> String {
        match self {
            CallbackAction::AddCaptionPoll => ADD_CAPTION_POLL.to_string(),
            CallbackAction::NoCaptionPoll => NO_CAPTION_POLL.to_string(),
            CallbackAction::ConfirmCaption => CONFIRM_CAPTION.to_string(),
            CallbackAction::ConfirmPoll => CONFIRM_POLL.to_string(),
            CallbackAction::NewInput => NEW_INPUT.to_string(),
            CallbackAction::Approve(id) => format!("{}{}", APPROVE_PREFIX, id),
            CallbackAction::Disapprove(id) => format!("{}{}", DISAPPROVE_PREFIX, id),
            CallbackAction::Unknown => String::new(),
        }
    }

    /// Owner-side actions, checked against the owner chat.
    pub fn is_moderation(&self) -> bool {
        matches!(self, CallbackAction::Approve(_) | CallbackAction::Disapprove(_))
    }
}
