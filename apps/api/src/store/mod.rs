//! Resume persistence — pluggable, trait-based store for analyzed resumes.
//!
//! `PgResumeStore` backs production; `InMemoryResumeStore` runs when no
//! database is configured and in tests. `AppState` holds an
//! `Arc<dyn ResumeStore>` chosen once at startup.

mod memory;
mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::analysis::Analysis;
use crate::models::resume::ResumeRow;

pub use memory::InMemoryResumeStore;
pub use postgres::PgResumeStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Stored analysis could not be (de)serialized: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A resume ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewResume {
    pub filename: String,
    pub content: String,
    pub ats_score: u32,
    pub analysis: Analysis,
}

/// A persisted resume with its analysis.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeRecord {
    pub id: Uuid,
    pub filename: String,
    #[serde(skip_serializing)]
    pub content: String,
    pub ats_score: u32,
    pub analysis: Analysis,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ResumeRow> for ResumeRecord {
    type Error = StoreError;

    fn try_from(row: ResumeRow) -> Result<Self, Self::Error> {
        Ok(ResumeRecord {
            id: row.id,
            filename: row.filename,
            content: row.content,
            ats_score: row.ats_score.clamp(0, 100) as u32,
            analysis: serde_json::from_value(row.analysis)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn insert(&self, resume: NewResume) -> Result<ResumeRecord, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<ResumeRecord>, StoreError>;

    /// Short label for logs ("postgres" | "memory").
    fn backend(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn test_row_converts_to_record() {
        let analysis = analyze("python and sql");
        let row = ResumeRow {
            id: Uuid::new_v4(),
            filename: "cv.txt".to_string(),
            content: "python and sql".to_string(),
            ats_score: analysis.ats_score as i32,
            analysis: serde_json::to_value(&analysis).unwrap(),
            created_at: Utc::now(),
        };
        let record = ResumeRecord::try_from(row).unwrap();
        assert_eq!(record.analysis, analysis);
        assert_eq!(record.ats_score, analysis.ats_score);
    }

    #[test]
    fn test_malformed_analysis_is_serde_error() {
        let row = ResumeRow {
            id: Uuid::new_v4(),
            filename: "cv.txt".to_string(),
            content: String::new(),
            ats_score: 0,
            analysis: serde_json::json!({ "ats_score": "high" }),
            created_at: Utc::now(),
        };
        assert!(matches!(
            ResumeRecord::try_from(row),
            Err(StoreError::Serde(_))
        ));
    }

    #[test]
    fn test_record_json_omits_content() {
        let record = ResumeRecord {
            id: Uuid::new_v4(),
            filename: "cv.txt".to_string(),
            content: "secret".to_string(),
            ats_score: 0,
            analysis: analyze(""),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("content").is_none());
        assert_eq!(value["filename"], "cv.txt");
    }
}
