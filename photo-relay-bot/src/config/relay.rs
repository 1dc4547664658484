//! Relay config: where approved posts go, who approves them, and where pending approvals are kept.

use std::env;
use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::core::ChatTarget;

pub const CHANNEL_PLACEHOLDER: &str = "your_channel_id_here";
pub const OWNER_PLACEHOLDER: &str = "owner_chat_id";

/// Backend for pending approvals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalStoreType {
    Memory,
    Sqlite,
}

impl FromStr for ApprovalStoreType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(ApprovalStoreType::Memory),
            "sqlite" => Ok(ApprovalStoreType::Sqlite),
            other => anyhow::bail!("APPROVAL_STORE_TYPE must be memory or sqlite, got: {}", other),
        }
    }
}

impl fmt::Display for ApprovalStoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalStoreType::Memory => f.write_str("memory"),
            ApprovalStoreType::Sqlite => f.write_str("sqlite"),
        }
    }
}

/// Raw relay settings as read from the environment; parsed on access.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// CHANNEL_ID: `@channel` or numeric id
    pub channel_id: String,
    /// OWNER_CHAT_ID: numeric chat id receiving approval requests
    pub owner_chat_id: String,
    /// APPROVAL_STORE_TYPE: memory | sqlite
    pub approval_store_type: String,
    /// APPROVAL_DB_PATH (sqlite only)
    pub approval_db_path: String,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            channel_id: env::var("CHANNEL_ID").unwrap_or_default(),
            owner_chat_id: env::var("OWNER_CHAT_ID").unwrap_or_default(),
            approval_store_type: env::var("APPROVAL_STORE_TYPE")
                .unwrap_or_else(|_| "memory".to_string()),
            approval_db_path: env::var("APPROVAL_DB_PATH")
                .unwrap_or_else(|_| "./data/approvals.db".to_string()),
        })
    }

    pub fn channel_missing(&self) -> bool {
        is_missing(&self.channel_id, CHANNEL_PLACEHOLDER)
    }

    pub fn owner_missing(&self) -> bool {
        is_missing(&self.owner_chat_id, OWNER_PLACEHOLDER)
    }

    pub fn channel(&self) -> Result<ChatTarget> {
        self.channel_id
            .parse::<ChatTarget>()
            .with_context(|| format!("CHANNEL_ID must be @name or a numeric id, got: {}", self.channel_id))
    }

    pub fn owner_chat_id(&self) -> Result<i64> {
        self.owner_chat_id
            .trim()
            .parse::<i64>()
            .with_context(|| format!("OWNER_CHAT_ID must be a numeric chat id, got: {}", self.owner_chat_id))
    }

    pub fn store_type(&self) -> Result<ApprovalStoreType> {
        self.approval_store_type.parse()
    }
}

fn is_missing(value: &str, placeholder: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == placeholder
}
