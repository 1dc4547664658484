//! Per-user submission state: the photo being submitted and its pending caption or poll.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crate::poll::PollDraft;

/// What the user wants attached to the photo, awaiting Confirm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Draft {
    Caption(String),
    Poll(PollDraft),
}

/// State for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub image_file_id: Option<String>,
    pub draft: Option<Draft>,
}

type SessionMap = HashMap<i64, Session>;

/// In-memory session store keyed by user id. Cloning shares the same map.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<SessionMap>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new photo; any previous draft belonged to the old photo and is dropped.
    pub async fn set_image(&self, user_id: i64, file_id: String) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(
            user_id,
            Session {
                image_file_id: Some(file_id),
                draft: None,
            },
        );
        debug!(user_id = user_id, "session: image stored");
    }

    pub async fn image(&self, user_id: i64) -> Option<String> {
        let sessions = self.sessions.read().await;
        sessions.get(&user_id).and_then(|s| s.image_file_id.clone())
    }

    /// Replaces the draft. Returns false (and stores nothing) when the user has no image.
    pub async fn set_draft(&self, user_id: i64, draft: Draft) -> bool {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&user_id) {
            Some(session) if session.image_file_id.is_some() => {
                session.draft = Some(draft);
                true
            }
            _ => false,
        }
    }

    pub async fn get(&self, user_id: i64) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions.get(&user_id).cloned()
    }

    /// Removes and returns the session (used when a submission is filed).
    pub async fn take(&self, user_id: i64) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&user_id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
