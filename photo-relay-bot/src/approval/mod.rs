//! Pending approvals: submissions waiting for the owner's decision.
//!
//! [`ApprovalStore`] has an in-memory implementation (default) and a SQLite one so pending items survive restarts.

mod memory;
mod sqlite;
mod sqlite_pool;

pub use memory::InMemoryApprovalStore;
pub use sqlite::SqliteApprovalStore;
pub use sqlite_pool::SqlitePoolManager;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::Result;
use crate::poll::PollDraft;
use crate::session::Draft;

/// What gets published with the photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Submission {
    /// Photo only.
    Plain,
    Caption { text: String },
    Poll { poll: PollDraft },
}

impl Submission {
    pub fn from_draft(draft: Option<Draft>) -> Self {
        match draft {
            None => Submission::Plain,
            Some(Draft::Caption(text)) => Submission::Caption { text },
            Some(Draft::Poll(poll)) => Submission::Poll { poll },
        }
    }

    /// Caption shown under the photo: the caption itself, or the poll question.
    pub fn photo_caption(&self) -> Option<&str> {
        match self {
            Submission::Plain => None,
            Submission::Caption { text } => Some(text),
            Submission::Poll { poll } => Some(&poll.question),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Submission::Plain => "plain",
            Submission::Caption { .. } => "caption",
            Submission::Poll { .. } => "poll",
        }
    }
}

/// A submission forwarded to the owner and not yet decided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Approval {
    pub id: Uuid,
    pub submitter_user_id: i64,
    pub submitter_chat_id: i64,
    pub file_id: String,
    pub content: Submission,
    pub created_at: DateTime<Utc>,
    /// Set once the photo is in the channel; a retried approval then only sends what is left (the poll).
    #[serde(default)]
    pub photo_published: bool,
}

impl Approval {
    /// Creates an approval with a fresh v4 id.
    pub fn new(
        submitter_user_id: i64,
        submitter_chat_id: i64,
        file_id: String,
        content: Submission,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitter_user_id,
            submitter_chat_id,
            file_id,
            content,
            created_at: Utc::now(),
            photo_published: false,
        }
    }
}

/// Storage for pending approvals.
#[async_trait]
pub trait ApprovalStore: Send + Sync {
    async fn insert(&self, approval: Approval) -> Result<()>;
    /// Removes and returns the approval; `None` when unknown or already decided.
    async fn take(&self, id: Uuid) -> Result<Option<Approval>>;
    /// Number of pending approvals.
    async fn len(&self) -> Result<usize>;
}
