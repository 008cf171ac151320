//! File upload handler.
//!
//! Accepts a multipart request with up to `max_upload_files` parts named
//! `file`, writes them under the configured upload directory, and returns
//! the stored references. The references go into a loan's or
//! transaction's `files` list; the files themselves are served back under
//! `/uploads`.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::ApiResponse;

/// Stored references for an upload request
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub files: Vec<String>,
}

/// Keep the original name readable but safe to put on disk.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '-' | '_' => c,
            _ => '_',
        })
        .collect()
}

pub async fn upload_files(
    State(config): State<Arc<Config>>,
    mut multipart: Multipart,
) -> ApiResult<(StatusCode, Json<ApiResponse<UploadResponse>>)> {
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let mut stored = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        if stored.len() >= config.max_upload_files {
            return Err(ApiError::InvalidInput(format!(
                "At most {} files are accepted per upload",
                config.max_upload_files
            )));
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

        let file_name = format!("{}-{}", Uuid::new_v4(), sanitize_file_name(&original_name));
        tokio::fs::write(config.upload_dir.join(&file_name), &data).await?;

        stored.push(format!("/uploads/{}", file_name));
    }

    if stored.is_empty() {
        return Err(ApiError::MissingField("file".to_string()));
    }

    tracing::info!(count = stored.len(), "Files uploaded");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UploadResponse { files: stored })),
    ))
}
