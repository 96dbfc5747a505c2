//! Axum route handlers for the Resume Analysis API.

use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::{JsonRejection, PathRejection},
        Multipart, Path, State,
    },
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::{analyze, Analysis, ScoreBand};
use crate::errors::AppError;
use crate::extraction::extract_text;
use crate::store::NewResume;
use crate::state::AppState;

/// Multipart field carrying the resume document.
const FILE_FIELD: &str = "file";
const FALLBACK_FILENAME: &str = "resume.txt";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeUploadResponse {
    pub success: bool,
    pub resume_id: Uuid,
    pub filename: String,
    pub ats_score: u32,
    pub rating: ScoreBand,
    pub analysis: Analysis,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeTextResponse {
    pub filename: Option<String>,
    pub ats_score: u32,
    pub rating: ScoreBand,
    pub analysis: Analysis,
}

#[derive(Debug, Serialize)]
pub struct ResumeDetailResponse {
    pub id: Uuid,
    pub filename: String,
    pub ats_score: u32,
    pub rating: ScoreBand,
    pub analysis: Analysis,
    pub created_at: DateTime<Utc>,
}

struct UploadedFile {
    filename: String,
    content_type: Option<String>,
    bytes: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/analyze
///
/// Multipart upload with a `file` field. Extracts text, scores it once,
/// persists the result and echoes the filename back.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeUploadResponse>, AppError> {
    let mut multipart = multipart?;
    let upload = read_file_field(&mut multipart)
        .await?
        .ok_or(AppError::NoFile)?;

    let content = extract_upload(&upload).await?;
    info!(
        filename = %upload.filename,
        chars = content.chars().count(),
        "Resume received"
    );

    let analysis = analyze(&content);
    let rating = ScoreBand::from_score(analysis.ats_score);
    info!(
        ats_score = analysis.ats_score,
        keyword_matches = analysis.keyword_matches,
        formatting_score = analysis.formatting_score,
        rating = rating.label(),
        "Resume analyzed"
    );

    let record = state
        .store
        .insert(NewResume {
            filename: upload.filename,
            content,
            ats_score: analysis.ats_score,
            analysis,
        })
        .await
        .map_err(AppError::SaveFailed)?;

    Ok(Json(AnalyzeUploadResponse {
        success: true,
        resume_id: record.id,
        filename: record.filename,
        ats_score: record.ats_score,
        rating,
        analysis: record.analysis,
    }))
}

/// POST /api/v1/analyze
///
/// Scores already-extracted text. Nothing is persisted.
pub async fn handle_analyze_text(
    request: Result<Json<AnalyzeTextRequest>, JsonRejection>,
) -> Result<Json<AnalyzeTextResponse>, AppError> {
    let Json(request) = request?;
    let analysis = analyze(&request.text);
    info!(
        ats_score = analysis.ats_score,
        keyword_matches = analysis.keyword_matches,
        "Text analyzed"
    );

    Ok(Json(AnalyzeTextResponse {
        filename: request.filename,
        ats_score: analysis.ats_score,
        rating: ScoreBand::from_score(analysis.ats_score),
        analysis,
    }))
}

/// GET /api/v1/resumes/:id
///
/// Returns a stored analysis. The document content is not echoed back.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    resume_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ResumeDetailResponse>, AppError> {
    let Path(resume_id) = resume_id?;
    let record = state
        .store
        .get(resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    Ok(Json(ResumeDetailResponse {
        id: record.id,
        filename: record.filename,
        ats_score: record.ats_score,
        rating: ScoreBand::from_score(record.ats_score),
        analysis: record.analysis,
        created_at: record.created_at,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Returns the first `file` field, skipping any others.
async fn read_file_field(multipart: &mut Multipart) -> Result<Option<UploadedFile>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_FILENAME)
            .to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;

        return Ok(Some(UploadedFile {
            filename,
            content_type,
            bytes,
        }));
    }
    Ok(None)
}

/// PDF decoding is CPU-bound, so extraction runs off the async workers.
async fn extract_upload(upload: &UploadedFile) -> Result<String, AppError> {
    let filename = upload.filename.clone();
    let content_type = upload.content_type.clone();
    let bytes = upload.bytes.clone();

    let text = tokio::task::spawn_blocking(move || {
        extract_text(&filename, content_type.as_deref(), &bytes)
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;

    Ok(text)
}
