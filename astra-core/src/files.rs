//! Index of uploads known to the system

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

/// One entry in the file index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: String,
    /// Name the file was uploaded under
    pub original_name: String,
    pub mime_type: String,
    pub created_at: DateTime<Utc>,
}

impl FileRecord {
    pub fn new(original_name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            original_name: original_name.into(),
            mime_type: mime_type.into(),
            created_at: Utc::now(),
        }
    }
}

/// In-memory, newest-first index of known uploads
#[derive(Default)]
pub struct FileIndex {
    records: RwLock<Vec<FileRecord>>,
}

impl FileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file
    pub async fn add(&self, record: FileRecord) {
        self.records.write().await.push(record);
    }

    /// The most recently recorded files, newest first
    pub async fn recent(&self, limit: usize) -> Vec<FileRecord> {
        let records = self.records.read().await;
        records.iter().rev().take(limit).cloned().collect()
    }

    /// Number of records in the index
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the index holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn recent_returns_newest_first() {
        let index = FileIndex::new();
        index.add(FileRecord::new("chassis.pdf", "application/pdf")).await;
        index.add(FileRecord::new("array.jpg", "image/jpeg")).await;
        index.add(FileRecord::new("budget.xlsx", "application/vnd.ms-excel")).await;

        let recent = index.recent(2).await;
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].original_name, "budget.xlsx");
        assert_eq!(recent[1].original_name, "array.jpg");
    }

    #[tokio::test]
    async fn recent_on_empty_index_is_empty() {
        let index = FileIndex::new();
        assert!(index.recent(50).await.is_empty());
        assert!(index.is_empty().await);
    }

    #[tokio::test]
    async fn limit_larger_than_index_returns_everything() {
        let index = FileIndex::new();
        index.add(FileRecord::new("a.png", "image/png")).await;

        assert_eq!(index.recent(50).await.len(), 1);
        assert_eq!(index.len().await, 1);
    }
}
