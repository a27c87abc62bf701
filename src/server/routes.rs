//! Route handlers for the conversion service.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use uuid::Uuid;

use crate::reader::{extract_text, ReaderPipeline};
use crate::server::error::ApiError;
use crate::server::fetch::PageFetcher;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct ServiceState {
    pub pipeline: Arc<ReaderPipeline>,
    pub fetcher: Arc<PageFetcher>,
}

/// Successful conversion payload.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub bionic_text: String,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

pub fn build_router(state: ServiceState) -> Router {
    Router::new()
        .route("/convert", post(convert_text))
        .route("/summarize", post(convert_text))
        .route("/url", post(convert_url))
        .route("/upload", post(convert_upload))
        .route("/health", get(health))
        .with_state(state)
}

/// POST /convert and POST /summarize: convert pasted text.
async fn convert_text(
    State(state): State<ServiceState>,
    multipart: Multipart,
) -> Result<Json<ConvertResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let text = field_value(multipart, "text").await?;
    if text.trim().is_empty() {
        return Err(ApiError::EmptyText);
    }

    tracing::info!(
        %request_id,
        words = text.split_whitespace().count(),
        "text submission"
    );
    let bionic_text = state.pipeline.convert(&text);
    Ok(Json(ConvertResponse { bionic_text }))
}

/// POST /url: fetch a page, extract its text, convert it.
async fn convert_url(
    State(state): State<ServiceState>,
    multipart: Multipart,
) -> Result<Json<ConvertResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let url = field_value(multipart, "url").await?;

    tracing::info!(%request_id, url = %url, "url submission");
    let page = state.fetcher.fetch(&url).await?;
    let text = extract_text(&page);
    if text.trim().is_empty() {
        return Err(ApiError::EmptyUrlContent);
    }

    let bionic_text = state.pipeline.convert(&text);
    Ok(Json(ConvertResponse { bionic_text }))
}

/// POST /upload: convert the text of an uploaded file.
async fn convert_upload(
    State(state): State<ServiceState>,
    mut multipart: Multipart,
) -> Result<Json<ConvertResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;
        tracing::info!(
            %request_id,
            file = filename.as_deref().unwrap_or("<unnamed>"),
            bytes = data.len(),
            "file submission"
        );

        let text = decode_upload(content_type.as_deref(), &data)?;
        if text.trim().is_empty() {
            return Err(ApiError::EmptyFile);
        }

        let bionic_text = state.pipeline.convert(&text);
        return Ok(Json(ConvertResponse { bionic_text }));
    }
    Err(ApiError::MissingField { field: "file" })
}

async fn health() -> impl IntoResponse {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: "bionic-reader".to_string(),
    })
}

/// Pull one named field out of a multipart form as text.
async fn field_value(mut multipart: Multipart, field: &'static str) -> Result<String, ApiError> {
    while let Some(part) = multipart.next_field().await? {
        if part.name() == Some(field) {
            return Ok(part.text().await?);
        }
    }
    Err(ApiError::MissingField { field })
}

/// Decode an uploaded file body to text. Only plain-text uploads are
/// supported; the media type is matched with its parameters stripped.
fn decode_upload(content_type: Option<&str>, data: &[u8]) -> Result<String, ApiError> {
    let media_type = content_type
        .map(|ct| ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
        .unwrap_or_default();

    match media_type.as_str() {
        "text/plain" => String::from_utf8(data.to_vec())
            .map_err(|_| ApiError::Internal("Uploaded file is not valid UTF-8.".to_string())),
        _ => Err(ApiError::UnsupportedFileType),
    }
}
