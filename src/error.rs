use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::document::DocumentError;

/// Body sent when the dataset file could not be read
pub const READ_FAILURE_BODY: &str = "Internal server error";

/// Body sent when the dataset could not be decoded or rendered
pub const PROCESSING_FAILURE_BODY: &str = "Invalid JSON format";

const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Failure of a single request, split by the stage that failed
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("failed to read dataset: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to process dataset: {0}")]
    Processing(#[from] ProcessingError),
}

/// Everything that can go wrong after the dataset bytes were read
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("dataset is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("dataset must be a JSON array, found {found}")]
    NotASequence { found: &'static str },

    #[error("dataset record {index} is null")]
    NullRecord { index: usize },

    #[error("document serialization failed: {0}")]
    Serialize(#[from] DocumentError),
}

/// The two failure kinds a client can observe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ReadFailure,
    ProcessingFailure,
}

impl ErrorKind {
    pub fn body(self) -> &'static str {
        match self {
            ErrorKind::ReadFailure => READ_FAILURE_BODY,
            ErrorKind::ProcessingFailure => PROCESSING_FAILURE_BODY,
        }
    }
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Read(_) => ErrorKind::ReadFailure,
            ServiceError::Processing(_) => ErrorKind::ProcessingFailure,
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Processing(ProcessingError::Decode(err))
    }
}

impl From<DocumentError> for ServiceError {
    fn from(err: DocumentError) -> Self {
        ServiceError::Processing(ProcessingError::Serialize(err))
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
            self.kind().body(),
        )
            .into_response()
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ServiceError>;
