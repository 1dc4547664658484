//! User side of the relay: photo → optional caption or poll → preview → forward to the owner.
//!
//! **Flow:** photo stores the file id and asks Yes/No; Yes (or New Input) shows the guide; text becomes a caption
//! draft and `/poll` a poll draft, each previewed with Confirm/New Input; No or Confirm files an [`Approval`]
//! and sends the photo to the owner with Approve/Disapprove buttons.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument, warn};

use super::reply::edit_or_reply;
use crate::approval::{Approval, ApprovalStore, Submission};
use crate::callback::CallbackAction;
use crate::core::{Bot, ChatTarget, Handler, HandlerResponse, Message, MessageKind, Result};
use crate::keyboards;
use crate::poll::parse_poll_args;
use crate::session::{Draft, SessionStore};
use crate::texts;

/// Telegram's limit on media captions.
pub const MAX_CAPTION_LEN: usize = 1024;

pub struct SubmissionHandler {
    bot: Arc<dyn Bot>,
    sessions: SessionStore,
    approvals: Arc<dyn ApprovalStore>,
    owner: ChatTarget,
}

impl SubmissionHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        sessions: SessionStore,
        approvals: Arc<dyn ApprovalStore>,
        owner: ChatTarget,
    ) -> Self {
        Self {
            bot,
            sessions,
            approvals,
            owner,
        }
    }

    async fn on_photo(&self, message: &Message, file_id: &str) -> Result<HandlerResponse> {
        self.sessions
            .set_image(message.user.id, file_id.to_string())
            .await;
        info!(user_id = message.user.id, file_id = %file_id, "step: photo stored, asking for caption or poll");
        self.bot
            .send_message_with_keyboard(
                &ChatTarget::from(&message.chat),
                texts::ASK_CAPTION_OR_POLL,
                &keyboards::caption_or_poll_prompt(),
            )
            .await?;
        Ok(HandlerResponse::Stop)
    }

    async fn on_caption(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(file_id) = self.sessions.image(message.user.id).await else {
            return Ok(nudge(message, texts::NO_IMAGE));
        };
        let caption = message.content.trim();
        if caption.is_empty() {
            return Ok(HandlerResponse::Reply(texts::GUIDE.to_string()));
        }
        if caption.chars().count() > MAX_CAPTION_LEN {
            return Ok(HandlerResponse::Reply(texts::CAPTION_TOO_LONG.to_string()));
        }

        self.sessions
            .set_draft(message.user.id, Draft::Caption(caption.to_string()))
            .await;
        info!(user_id = message.user.id, "step: sending photo preview with caption");
        self.bot
            .send_photo(
                &ChatTarget::from(&message.chat),
                &file_id,
                Some(caption),
                Some(&keyboards::preview(CallbackAction::ConfirmCaption)),
            )
            .await?;
        Ok(HandlerResponse::Stop)
    }

    async fn on_poll(&self, message: &Message, args: &str) -> Result<HandlerResponse> {
        let Some(file_id) = self.sessions.image(message.user.id).await else {
            return Ok(HandlerResponse::Reply(texts::NO_IMAGE.to_string()));
        };
        let poll = match parse_poll_args(args) {
            Ok(poll) => poll,
            Err(e) => {
                info!(user_id = message.user.id, error = %e, "step: poll rejected");
                return Ok(HandlerResponse::Reply(format!(
                    "{}\n{}",
                    e,
                    texts::POLL_FORMAT_HINT
                )));
            }
        };

        let question = poll.question.clone();
        self.sessions
            .set_draft(message.user.id, Draft::Poll(poll))
            .await;
        info!(user_id = message.user.id, "step: sending photo preview with poll question");
        self.bot
            .send_photo(
                &ChatTarget::from(&message.chat),
                &file_id,
                Some(&question),
                Some(&keyboards::preview(CallbackAction::ConfirmPoll)),
            )
            .await?;
        Ok(HandlerResponse::Stop)
    }

    /// Files the user's current session as an approval and sends it to the owner.
    #[instrument(skip(self, message))]
    async fn submit(&self, message: &Message, action: CallbackAction) -> Result<HandlerResponse> {
        let user_id = message.user.id;
        let session = self.sessions.get(user_id).await.unwrap_or_default();
        let Some(file_id) = session.image_file_id else {
            warn!(user_id = user_id, "no image in session when creating approval");
            edit_or_reply(self.bot.as_ref(), message, texts::NO_IMAGE_FOR_APPROVAL).await;
            return Ok(HandlerResponse::Stop);
        };

        let (content, done_text) = match (action, session.draft) {
            (CallbackAction::NoCaptionPoll, _) => (Submission::Plain, texts::FORWARDED_PLAIN),
            (CallbackAction::ConfirmCaption, Some(draft @ Draft::Caption(_))) => {
                (Submission::from_draft(Some(draft)), texts::FORWARDED_CAPTION)
            }
            (CallbackAction::ConfirmPoll, Some(draft @ Draft::Poll(_))) => {
                (Submission::from_draft(Some(draft)), texts::FORWARDED_POLL)
            }
            _ => {
                info!(user_id = user_id, action = ?action, "step: confirm without matching draft");
                edit_or_reply(self.bot.as_ref(), message, texts::NOTHING_TO_CONFIRM).await;
                return Ok(HandlerResponse::Stop);
            }
        };

        let approval = Approval::new(user_id, message.chat.id, file_id, content);
        let approval_id = approval.id;
        let caption = owner_caption(&approval.content);
        self.approvals.insert(approval.clone()).await?;

        info!(
            user_id = user_id,
            approval_id = %approval_id,
            kind = approval.content.kind(),
            "step: forwarding submission to owner"
        );
        let sent = self
            .bot
            .send_photo(
                &self.owner,
                &approval.file_id,
                Some(&caption),
                Some(&keyboards::moderation(approval_id)),
            )
            .await;

        if let Err(e) = sent {
            error!(error = %e, approval_id = %approval_id, "Failed to forward submission to owner");
            self.approvals.take(approval_id).await?;
            edit_or_reply(self.bot.as_ref(), message, texts::FORWARD_FAILED).await;
            return Ok(HandlerResponse::Stop);
        }

        self.sessions.take(user_id).await;
        edit_or_reply(self.bot.as_ref(), message, done_text).await;
        Ok(HandlerResponse::Stop)
    }
}

/// Hint for a message the flow cannot use. Only sent in private chats; group chatter and
/// service messages (joins, pins) are left alone.
fn nudge(message: &Message, text: &str) -> HandlerResponse {
    if message.chat.chat_type == "private" {
        HandlerResponse::Reply(text.to_string())
    } else {
        HandlerResponse::Ignore
    }
}

/// Caption on the owner's copy: the caption, or the poll question followed by its options.
/// Cut to [`MAX_CAPTION_LEN`] characters.
pub fn owner_caption(content: &Submission) -> String {
    let caption = match content {
        Submission::Plain => texts::APPROVAL_REQUEST.to_string(),
        Submission::Caption { text } => text.clone(),
        Submission::Poll { poll } => {
            let mut caption = format!("Poll: {}", poll.question);
            for option in &poll.options {
                caption.push_str("\n- ");
                caption.push_str(option);
            }
            caption
        }
    };
    if caption.chars().count() > MAX_CAPTION_LEN {
        let mut cut: String = caption.chars().take(MAX_CAPTION_LEN - 1).collect();
        cut.push('…');
        cut
    } else {
        caption
    }
}

#[async_trait]
impl Handler for SubmissionHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match &message.kind {
            MessageKind::Command { name, args } => match name.as_str() {
                "start" => Ok(HandlerResponse::Reply(texts::START.to_string())),
                "poll" => self.on_poll(message, args).await,
                _ => Ok(HandlerResponse::Ignore),
            },
            MessageKind::Photo { file_id } => self.on_photo(message, file_id).await,
            MessageKind::Text => self.on_caption(message).await,
            MessageKind::Document { mime_type } => {
                let is_image = mime_type
                    .as_deref()
                    .is_some_and(|m| m.starts_with("image/"));
                let text = if is_image {
                    texts::SEND_AS_PHOTO
                } else {
                    texts::SEND_PHOTO
                };
                Ok(nudge(message, text))
            }
            MessageKind::Other => Ok(nudge(message, texts::SEND_PHOTO)),
            MessageKind::Callback { data, .. } => match CallbackAction::parse(data) {
                CallbackAction::AddCaptionPoll | CallbackAction::NewInput => {
                    edit_or_reply(self.bot.as_ref(), message, texts::GUIDE).await;
                    Ok(HandlerResponse::Stop)
                }
                action @ (CallbackAction::NoCaptionPoll
                | CallbackAction::ConfirmCaption
                | CallbackAction::ConfirmPoll) => self.submit(message, action).await,
                _ => Ok(HandlerResponse::Ignore),
            },
        }
    }
}
