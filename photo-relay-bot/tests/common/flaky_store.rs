//! In-memory approval store whose inserts can be switched to fail.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use photo_relay_bot::{Approval, ApprovalStore, InMemoryApprovalStore, RelayError, Result};
use uuid::Uuid;

#[derive(Default)]
pub struct FlakyApprovalStore {
    inner: InMemoryApprovalStore,
    pub fail_inserts: AtomicBool,
}

impl FlakyApprovalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApprovalStore for FlakyApprovalStore {
    async fn insert(&self, approval: Approval) -> Result<()> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(RelayError::Storage("insert failed".to_string()));
        }
        self.inner.insert(approval).await
    }

    async fn take(&self, id: Uuid) -> Result<Option<Approval>> {
        self.inner.take(id).await
    }

    async fn len(&self) -> Result<usize> {
        self.inner.len().await
    }
}
