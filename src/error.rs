// error.rs
// Typed failures for seed unwrapping plus the HTTP mapping for every route.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures while recovering the seed from an encrypted blob.
///
/// Every OAEP/key problem collapses into the single `Decryption` variant so
/// callers never learn which part of the padding check failed.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("encrypted seed is not valid base64")]
    Decode(#[source] base64::DecodeError),

    #[error("seed decryption failed")]
    Decryption,

    #[error("decrypted seed is not valid utf-8")]
    Encoding(#[source] std::string::FromUtf8Error),

    #[error("{0}")]
    Format(FormatIssue),
}

/// Why the decrypted plaintext failed the 64-char lowercase-hex check.
/// Both cases are the same error kind; the split exists for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    WrongLength(usize),
    InvalidCharacter,
}

impl std::fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatIssue::WrongLength(n) => write!(f, "seed must be 64 characters, got {n}"),
            FormatIssue::InvalidCharacter => write!(f, "seed must be lowercase hex"),
        }
    }
}

/// Route-level failures; `IntoResponse` maps each kind to a distinct status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error("seed not provisioned")]
    NotProvisioned,

    #[error("missing code")]
    MissingCode,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // Malformed input the caller can fix.
            ApiError::Seed(SeedError::Decode(_)) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            // Cryptographic or format failure; uniform body, re-obtain the blob.
            ApiError::Seed(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            ApiError::NotProvisioned => (StatusCode::CONFLICT, self.to_string()),
            ApiError::MissingCode => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
