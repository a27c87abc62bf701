//! Error types and response handling for the conversion service.
//!
//! Every error renders as a JSON body of the shape `{"detail": "..."}`
//! with a matching HTTP status code, which is the wire contract the
//! client's silent-failure path depends on.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur while handling a conversion request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Text submission with nothing in it
    #[error("Input text is empty.")]
    EmptyText,

    /// Uploaded file with no bytes or no decodable text
    #[error("Uploaded file is empty.")]
    EmptyFile,

    /// Upstream fetch failed (connect, timeout, or error status)
    #[error("Failed to fetch the URL content.")]
    FetchFailed,

    /// Fetched page had no extractable text
    #[error("No meaningful content found at the provided URL.")]
    EmptyUrlContent,

    /// Upload with a content type the converter cannot read
    #[error("Unsupported file type. Only TXT files are supported.")]
    UnsupportedFileType,

    /// Required multipart field missing from the form
    #[error("Field '{field}' is required.")]
    MissingField { field: &'static str },

    /// Malformed multipart body
    #[error("Invalid form data: {0}")]
    InvalidMultipart(String),

    /// Anything unexpected while processing the submission
    #[error("{0}")]
    Internal(String),
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::InvalidMultipart(err.to_string())
    }
}

impl ApiError {
    /// Map error variant to the HTTP status code the client observes.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::EmptyText => StatusCode::BAD_REQUEST,
            ApiError::EmptyFile => StatusCode::BAD_REQUEST,
            ApiError::FetchFailed => StatusCode::BAD_REQUEST,
            ApiError::EmptyUrlContent => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedFileType => StatusCode::BAD_REQUEST,
            ApiError::MissingField { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidMultipart(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_status_and_detail() {
        let err = ApiError::EmptyText;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Input text is empty.");
    }

    #[test]
    fn test_empty_url_content_detail() {
        let err = ApiError::EmptyUrlContent;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "No meaningful content found at the provided URL."
        );
    }

    #[test]
    fn test_missing_field_is_unprocessable() {
        let err = ApiError::MissingField { field: "text" };
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "Field 'text' is required.");
    }

    #[test]
    fn test_internal_maps_to_server_error() {
        let err = ApiError::Internal("decode failure".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "decode failure");
    }

    #[tokio::test]
    async fn test_error_response_wire_shape() {
        let response = ApiError::FetchFailed.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], "Failed to fetch the URL content.");
    }
}
