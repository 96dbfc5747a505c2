use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use super::{NewResume, ResumeRecord, ResumeStore, StoreError};
use crate::models::resume::ResumeRow;

pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn insert(&self, resume: NewResume) -> Result<ResumeRecord, StoreError> {
        let analysis = serde_json::to_value(&resume.analysis)?;

        let row: ResumeRow = sqlx::query_as(
            r#"
            INSERT INTO resumes (id, filename, content, ats_score, analysis)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, filename, content, ats_score, analysis, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&resume.filename)
        .bind(&resume.content)
        .bind(resume.ats_score as i32)
        .bind(&analysis)
        .fetch_one(&self.pool)
        .await?;

        debug!("Inserted resume {}", row.id);
        ResumeRecord::try_from(row)
    }

    async fn get(&self, id: Uuid) -> Result<Option<ResumeRecord>, StoreError> {
        let row: Option<ResumeRow> = sqlx::query_as(
            "SELECT id, filename, content, ats_score, analysis, created_at FROM resumes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ResumeRecord::try_from).transpose()
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
