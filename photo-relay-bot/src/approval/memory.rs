//! In-memory approval store; pending approvals are lost on restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use super::{Approval, ApprovalStore};
use crate::core::Result;

type ApprovalMap = HashMap<Uuid, Approval>;

#[derive(Debug, Clone, Default)]
pub struct InMemoryApprovalStore {
    approvals: Arc<RwLock<ApprovalMap>>,
}

impl InMemoryApprovalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApprovalStore for InMemoryApprovalStore {
    async fn insert(&self, approval: Approval) -> Result<()> {
        info!(
            approval_id = %approval.id,
            submitter_user_id = approval.submitter_user_id,
            kind = approval.content.kind(),
            "Storing approval in memory"
        );
        self.approvals.write().await.insert(approval.id, approval);
        Ok(())
    }

    async fn take(&self, id: Uuid) -> Result<Option<Approval>> {
        Ok(self.approvals.write().await.remove(&id))
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.approvals.read().await.len())
    }
}
