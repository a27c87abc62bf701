//! HTTP client for the conversion service.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use thiserror::Error;

use crate::config::ClientConfig;

/// One user submission, carrying the input for its endpoint.
#[derive(Debug, Clone)]
pub enum Submission {
    Text(String),
    Url(String),
    File(PathBuf),
}

impl Submission {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Submission::Text(_) => "/convert",
            Submission::Url(_) => "/url",
            Submission::File(_) => "/upload",
        }
    }
}

/// Errors on the submission path.
///
/// None of these reach the user interface: callers log them and leave
/// the screen unchanged.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Local file could not be read before upload
    #[error("Failed to read '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Transport-level failure
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not decode as a conversion payload
    #[error("Response decode failed: {0}")]
    Decode(reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ConvertResponse {
    bionic_text: String,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, config: &ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .expect("Failed to build api client");

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Send one submission and return the converted text.
    ///
    /// The status code is deliberately not checked: error responses carry
    /// a different body shape and surface as [`ClientError::Decode`].
    pub async fn submit(&self, submission: Submission) -> Result<String, ClientError> {
        let url = format!("{}{}", self.base_url, submission.endpoint());
        let form = build_form(submission).await?;

        let response = self.http.post(&url).multipart(form).send().await?;
        let payload: ConvertResponse = response.json().await.map_err(ClientError::Decode)?;
        Ok(payload.bionic_text)
    }
}

async fn build_form(submission: Submission) -> Result<Form, ClientError> {
    match submission {
        Submission::Text(text) => Ok(Form::new().text("text", text)),
        Submission::Url(url) => Ok(Form::new().text("url", url)),
        Submission::File(path) => {
            let data = tokio::fs::read(&path)
                .await
                .map_err(|source| ClientError::FileRead {
                    path: path.clone(),
                    source,
                })?;
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload".to_string());
            let part = Part::bytes(data)
                .file_name(filename)
                .mime_str(mime_for(&path))?;
            Ok(Form::new().part("file", part))
        }
    }
}

/// Guess the MIME type for an uploaded file from its extension. The
/// service dispatches on the part's content type, so unknown extensions
/// fall back to the generic octet-stream type.
fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("txt") | Some("md") | Some("log") | Some("text") => "text/plain",
        Some("pdf") => "application/pdf",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}
