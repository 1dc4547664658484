//! Owner side of the relay: Approve publishes a pending submission to the channel, Disapprove drops it.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use super::reply::edit_or_reply;
use crate::approval::{Approval, ApprovalStore, Submission};
use crate::callback::CallbackAction;
use crate::core::{Bot, ChatTarget, Handler, HandlerResponse, Message, Result};
use crate::texts;

pub struct ModerationHandler {
    bot: Arc<dyn Bot>,
    approvals: Arc<dyn ApprovalStore>,
    channel: ChatTarget,
    owner_chat_id: i64,
}

impl ModerationHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        approvals: Arc<dyn ApprovalStore>,
        channel: ChatTarget,
        owner_chat_id: i64,
    ) -> Self {
        Self {
            bot,
            approvals,
            channel,
            owner_chat_id,
        }
    }

    /// Sends the photo (with caption or poll question) to the channel, then the poll if there is one.
    /// A photo already published by an earlier attempt is not sent again.
    async fn publish(&self, approval: &mut Approval) -> Result<()> {
        info!(
            channel = %self.channel,
            approval_id = %approval.id,
            kind = approval.content.kind(),
            photo_published = approval.photo_published,
            "step: publishing to channel"
        );
        if !approval.photo_published {
            self.bot
                .send_photo(
                    &self.channel,
                    &approval.file_id,
                    approval.content.photo_caption(),
                    None,
                )
                .await?;
            approval.photo_published = true;
        }
        if let Submission::Poll { poll } = &approval.content {
            self.bot
                .send_poll(&self.channel, &poll.question, &poll.options)
                .await?;
        }
        Ok(())
    }

    async fn notify_submitter(&self, approval: &Approval, text: &str) {
        let target = ChatTarget::Id(approval.submitter_chat_id);
        if let Err(e) = self.bot.send_message(&target, text).await {
            warn!(
                error = %e,
                approval_id = %approval.id,
                submitter_chat_id = approval.submitter_chat_id,
                "Failed to notify submitter"
            );
        }
    }

    #[instrument(skip(self, message))]
    async fn approve(&self, message: &Message, id: Uuid) -> Result<HandlerResponse> {
        let Some(mut approval) = self.approvals.take(id).await? else {
            info!(approval_id = %id, "step: approve for unknown or processed item");
            edit_or_reply(self.bot.as_ref(), message, texts::APPROVAL_NOT_FOUND).await;
            return Ok(HandlerResponse::Stop);
        };

        if let Err(e) = self.publish(&mut approval).await {
            error!(error = %e, approval_id = %id, "Failed to publish approved item; keeping it pending");
            let owner_chat = ChatTarget::from(&message.chat);
            if let Err(store_err) = self.approvals.insert(approval).await {
                error!(error = %store_err, approval_id = %id, "Failed to put approval back; it is lost");
                self.bot.send_message(&owner_chat, texts::APPROVAL_LOST).await?;
                return Err(store_err);
            }
            // A plain message keeps the Approve/Disapprove buttons usable; an edit would drop them.
            self.bot.send_message(&owner_chat, texts::PUBLISH_FAILED).await?;
            return Ok(HandlerResponse::Stop);
        }

        edit_or_reply(self.bot.as_ref(), message, texts::APPROVED).await;
        self.notify_submitter(&approval, texts::SUBMITTER_APPROVED).await;
        info!(approval_id = %id, "step: approval published");
        Ok(HandlerResponse::Stop)
    }

    #[instrument(skip(self, message))]
    async fn disapprove(&self, message: &Message, id: Uuid) -> Result<HandlerResponse> {
        let Some(approval) = self.approvals.take(id).await? else {
            info!(approval_id = %id, "step: disapprove for unknown or processed item");
            edit_or_reply(self.bot.as_ref(), message, texts::APPROVAL_NOT_FOUND).await;
            return Ok(HandlerResponse::Stop);
        };

        edit_or_reply(self.bot.as_ref(), message, texts::DISAPPROVED).await;
        self.notify_submitter(&approval, texts::SUBMITTER_DISAPPROVED).await;
        info!(approval_id = %id, "step: approval dropped");
        Ok(HandlerResponse::Stop)
    }
}

#[async_trait]
impl Handler for ModerationHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(data) = message.callback_data() else {
            return Ok(HandlerResponse::Ignore);
        };
        let action = CallbackAction::parse(data);
        if !action.is_moderation() {
            return Ok(HandlerResponse::Ignore);
        }

        if message.chat.id != self.owner_chat_id {
            warn!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                "Moderation callback outside the owner chat"
            );
            return Ok(HandlerResponse::Reply(texts::OWNER_ONLY.to_string()));
        }

        match action {
            CallbackAction::Approve(id) => self.approve(message, id).await,
            CallbackAction::Disapprove(id) => self.disapprove(message, id).await,
            _ => Ok(HandlerResponse::Ignore),
        }
    }
}
