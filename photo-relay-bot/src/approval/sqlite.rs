//! SQLite-backed approval store. The submission content is stored as JSON.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use super::sqlite_pool::SqlitePoolManager;
use super::{Approval, ApprovalStore, Submission};
use crate::core::{RelayError, Result};

type ApprovalRow = (String, i64, i64, String, String, DateTime<Utc>, bool);

#[derive(Clone)]
pub struct SqliteApprovalStore {
    pool_manager: SqlitePoolManager,
}

impl SqliteApprovalStore {
    pub async fn new(path: &str) -> Result<Self> {
        let pool_manager = SqlitePoolManager::new(path).await?;
        let store = Self { pool_manager };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS approvals (
                id TEXT PRIMARY KEY,
                submitter_user_id INTEGER NOT NULL,
                submitter_chat_id INTEGER NOT NULL,
                file_id TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL,
                photo_published INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;
        info!("Approvals table ready");
        Ok(())
    }

    fn from_row(row: ApprovalRow) -> Result<Approval> {
        let (id, submitter_user_id, submitter_chat_id, file_id, content, created_at, photo_published) = row;
        let id = Uuid::parse_str(&id)
            .map_err(|e| RelayError::Storage(format!("Invalid approval id {}: {}", id, e)))?;
        let content: Submission = serde_json::from_str(&content)?;
        Ok(Approval {
            id,
            submitter_user_id,
            submitter_chat_id,
            file_id,
            content,
            created_at,
            photo_published,
        })
    }
}

#[async_trait]
impl ApprovalStore for SqliteApprovalStore {
    async fn insert(&self, approval: Approval) -> Result<()> {
        let content = serde_json::to_string(&approval.content)?;
        sqlx::query(
            r#"
            INSERT INTO approvals (id, submitter_user_id, submitter_chat_id, file_id, content, created_at, photo_published)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(approval.id.to_string())
        .bind(approval.submitter_user_id)
        .bind(approval.submitter_chat_id)
        .bind(&approval.file_id)
        .bind(&content)
        .bind(approval.created_at)
        .bind(approval.photo_published)
        .execute(self.pool_manager.pool())
        .await?;

        info!(
            approval_id = %approval.id,
            submitter_user_id = approval.submitter_user_id,
            kind = approval.content.kind(),
            "Saved approval"
        );
        Ok(())
    }

    async fn take(&self, id: Uuid) -> Result<Option<Approval>> {
        // DELETE ... RETURNING keeps the read and the removal in one statement.
        let row: Option<ApprovalRow> = sqlx::query_as(
            r#"
            DELETE FROM approvals WHERE id = ?
            RETURNING id, submitter_user_id, submitter_chat_id, file_id, content, created_at, photo_published
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.pool_manager.pool())
        .await?;

        row.map(Self::from_row).transpose()
    }

    async fn len(&self) -> Result<usize> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM approvals")
            .fetch_one(self.pool_manager.pool())
            .await?;
        Ok(count as usize)
    }
}
