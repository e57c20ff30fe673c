// routes/generate.rs
// GET /generate-2fa -> { "code": "123456", "valid_for": 17 }

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::SeedStore;
use crate::totp::{self, PERIOD_SECONDS};

#[derive(Serialize)]
pub struct GenerateResponse {
    pub code: String,
    pub valid_for: u64,
}

/// Current code for the provisioned seed plus the seconds left in its step.
pub async fn generate_2fa(
    State(st): State<Arc<AppState>>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let seed = st.store.load()?.ok_or(ApiError::NotProvisioned)?;
    let totp = totp::build_totp(&st.issuer, &st.account, &seed)?;
    let now = totp::unix_now()?;

    Ok(Json(GenerateResponse {
        code: totp::generate_code(&totp, now),
        valid_for: totp::seconds_remaining(PERIOD_SECONDS, now),
    }))
}
