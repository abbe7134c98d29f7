//! Bulk-import tracking models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::SalesFileStatus;

/// A tracked bulk-import job and its lifecycle status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SalesFile {
    pub id: Uuid,
    pub file_name: String,
    pub status: SalesFileStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
