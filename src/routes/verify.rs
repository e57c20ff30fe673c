// routes/verify.rs
// POST /verify-2fa { "code": "123456" } -> { "valid": true|false }

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::SeedStore;
use crate::totp;

#[derive(Deserialize)]
pub struct VerifyRequest {
    pub code: String,
}

#[derive(Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

/// Check a candidate code against the tolerance window. A wrong code is a
/// `valid: false` response, not an error.
pub async fn verify_2fa(
    State(st): State<Arc<AppState>>,
    Json(body): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, ApiError> {
    if body.code.is_empty() {
        return Err(ApiError::MissingCode);
    }

    let seed = st.store.load()?.ok_or(ApiError::NotProvisioned)?;
    let totp = totp::build_totp(&st.issuer, &st.account, &seed)?;
    let now = totp::unix_now()?;

    Ok(Json(VerifyResponse {
        valid: totp::verify_code(&totp, &body.code, st.valid_window, now),
    }))
}
