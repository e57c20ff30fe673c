// routes/setup.rs
// GET /setup -> returns the otpauth:// URL for enrolling the seed.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::SeedStore;
use crate::totp::build_totp;

/// Returns { issuer, account, otpauth_url } to enroll in authenticator apps.
pub async fn setup(State(st): State<Arc<AppState>>) -> Result<Json<serde_json::Value>, ApiError> {
    let seed = st.store.load()?.ok_or(ApiError::NotProvisioned)?;
    let totp = build_totp(&st.issuer, &st.account, &seed)?;
    let url = totp.get_url(); // v5: no args, already contains issuer/account

    Ok(Json(serde_json::json!({
        "issuer": st.issuer,
        "account": st.account,
        "otpauth_url": url
    })))
}
