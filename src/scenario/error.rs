use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use super::metadata::{ConsistencyError, MetadataError};
use crate::store::files::FileStoreError;
use crate::store::records::StoreError;

/// Everything that can go wrong between receiving a multipart upload and
/// returning a persisted scenario.
///
/// Caller-input problems map to 400, missing/invalid credentials to 401 and
/// store failures to 500. `DuplicateName` stays its own variant so clients can
/// prompt for a different name instead of retrying.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Missing or invalid Authorization header")]
    Unauthenticated,
    #[error("Malformed multipart body")]
    MalformedBody,
    #[error("Missing {0}")]
    MissingFile(&'static str),
    #[error("Invalid value for {0}")]
    MissingField(&'static str),
    #[error("Failed to parse info.toml: {0}")]
    InvalidMetadata(#[from] MetadataError),
    #[error("The 'time' form field is not a non-negative number")]
    InvalidTimeField,
    #[error("Supplied metadata and metadata in info.toml do not match")]
    MetadataMismatch,
    #[error("A scenario named '{0}' already exists")]
    DuplicateName(String),
    #[error("Failed to persist scenario record: {0}")]
    Persistence(String),
    #[error("Failed to save bundle files: {0}")]
    FileWrite(String),
}

impl SubmissionError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::MalformedBody
            | Self::MissingFile(_)
            | Self::MissingField(_)
            | Self::InvalidMetadata(_)
            | Self::InvalidTimeField
            | Self::MetadataMismatch
            | Self::DuplicateName(_) => StatusCode::BAD_REQUEST,
            Self::Persistence(_) | Self::FileWrite(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ConsistencyError> for SubmissionError {
    fn from(err: ConsistencyError) -> Self {
        match err {
            ConsistencyError::InvalidTimeField => Self::InvalidTimeField,
            ConsistencyError::Mismatch => Self::MetadataMismatch,
        }
    }
}

impl From<StoreError> for SubmissionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateName(name) => Self::DuplicateName(name),
        }
    }
}

impl From<FileStoreError> for SubmissionError {
    fn from(err: FileStoreError) -> Self {
        Self::FileWrite(err.to_string())
    }
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
