use crate::models::Page;
use axum::http::StatusCode;
use thiserror::Error;

/// Rejected entry creation. The collection is left untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be a whole number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("location must not be empty")]
    EmptyLocation,

    #[error("cannot {action} from the {from} page")]
    InvalidTransition { from: Page, action: &'static str },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Entry(#[from] EntryError),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write store file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("store is full")]
    Full,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }
}

impl From<EntryError> for AppError {
    fn from(err: EntryError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::EmptyLocation => Self::bad_request(err.to_string()),
            SessionError::InvalidTransition { .. } => Self::conflict(err.to_string()),
        }
    }
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Session(err) => err.into(),
            SubmitError::Entry(err) => err.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
