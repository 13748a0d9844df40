//! Axum route handlers for the Documents API.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::enhancer::EnhancementReport;
use crate::generation::export::{export, Download};
use crate::generation::validation::validate;
use crate::models::profile::{DocumentSet, ProfileInput};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub documents: DocumentSet,
    pub ai: EnhancementReport,
    pub downloads: Vec<Download>,
}

/// The form plus the documents as displayed, posted back to fetch one file.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub profile: ProfileInput,
    pub documents: DocumentSet,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/documents/generate
///
/// Validates the form, renders the three documents, optionally polishes them
/// with AI and returns every download inline.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(input): Json<ProfileInput>,
) -> Result<Json<GenerateResponse>, AppError> {
    let request_id = Uuid::new_v4();
    info!(%request_id, use_ai = input.use_ai, "Generation requested");

    let generation = state.assembler.generate(&input).await.inspect_err(|err| {
        info!(%request_id, "Generation refused: {err}");
    })?;

    Ok(Json(GenerateResponse {
        request_id,
        generated_at: Utc::now(),
        downloads: generation.artifacts.downloads(),
        documents: generation.documents,
        ai: generation.report,
    }))
}

/// POST /api/v1/documents/export/:file_name
///
/// Re-exports previously generated documents and returns one file as an
/// attachment. No remote call is made.
pub async fn handle_export_file(
    Path(file_name): Path<String>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    validate(&request.profile)?;
    let artifacts = export(&request.documents, &request.profile)?;

    let (content_type, body) = artifacts
        .payload(&file_name)
        .ok_or_else(|| AppError::NotFound(format!("No download named '{file_name}'")))?;

    Ok(attachment(&file_name, content_type, body))
}

fn attachment(file_name: &str, content_type: &'static str, body: Bytes) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    )
        .into_response()
}
