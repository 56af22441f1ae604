use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use diesel::r2d2::PoolError;
use diesel::result::Error as DieselError;
use shared::{ContactRejection, ContactResponse};
use thiserror::Error;

const SUBMIT_FAILED: &str = "We could not submit the form right now. Please try again.";

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Invalid JSON payload.")]
    InvalidPayload,
    #[error(transparent)]
    Rejected(#[from] ContactRejection),
    #[error("contact store is not configured (DATABASE_URL unset)")]
    NotConfigured,
    #[error("database error: {0}")]
    Database(#[from] DieselError),
    #[error("failed to get DB connection: {0}")]
    Pool(#[from] PoolError),
    #[error("storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            ContactError::InvalidPayload | ContactError::Rejected(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to the visitor. Server-side failures never leak details.
    pub fn public_message(&self) -> String {
        match self {
            ContactError::InvalidPayload | ContactError::Rejected(_) => self.to_string(),
            _ => SUBMIT_FAILED.to_string(),
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Contact form submission failed: {}", self);
        }
        (status, Json(ContactResponse::new(self.public_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_errors_are_bad_requests_with_their_own_text() {
        let err = ContactError::from(ContactRejection::InvalidEmail);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Please provide a valid work email.");
        assert_eq!(ContactError::InvalidPayload.public_message(), "Invalid JSON payload.");
    }

    #[test]
    fn storage_errors_hide_details() {
        let err = ContactError::Database(DieselError::NotFound);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), SUBMIT_FAILED);
        assert_eq!(ContactError::NotConfigured.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
