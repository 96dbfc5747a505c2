use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{NewResume, ResumeRecord, ResumeStore, StoreError};

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryResumeStore {
    records: RwLock<HashMap<Uuid, ResumeRecord>>,
}

impl InMemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeStore for InMemoryResumeStore {
    async fn insert(&self, resume: NewResume) -> Result<ResumeRecord, StoreError> {
        let record = ResumeRecord {
            id: Uuid::new_v4(),
            filename: resume.filename,
            content: resume.content,
            ats_score: resume.ats_score,
            analysis: resume.analysis,
            created_at: Utc::now(),
        };
        self.records
            .write()
            .await
            .insert(record.id, record.clone());
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<Option<ResumeRecord>, StoreError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    fn new_resume(content: &str) -> NewResume {
        let analysis = analyze(content);
        NewResume {
            filename: "cv.txt".to_string(),
            content: content.to_string(),
            ats_score: analysis.ats_score,
            analysis,
        }
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let store = InMemoryResumeStore::new();
        let saved = store.insert(new_resume("docker and kubernetes")).await.unwrap();

        let fetched = store.get(saved.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, saved.id);
        assert_eq!(fetched.content, "docker and kubernetes");
        assert_eq!(fetched.analysis.keyword_matches, 2);
    }

    #[tokio::test]
    async fn test_get_unknown_is_none() {
        let store = InMemoryResumeStore::new();
        assert!(store.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_distinct() {
        let store = InMemoryResumeStore::new();
        let a = store.insert(new_resume("a")).await.unwrap();
        let b = store.insert(new_resume("a")).await.unwrap();
        assert_ne!(a.id, b.id);
    }
}
