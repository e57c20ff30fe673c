// routes/decrypt.rs
// POST /decrypt-seed { "encrypted_seed": "<base64>" } -> { "status": "ok" }

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
};
use serde::Deserialize;

use crate::crypto;
use crate::error::ApiError;
use crate::state::AppState;
use crate::store::SeedStore;

#[derive(Deserialize)]
pub struct DecryptRequest {
    pub encrypted_seed: String,
}

/// Unwrap the encrypted blob with our private key and persist the seed.
/// Re-provisioning overwrites the slot; there is no versioning.
pub async fn decrypt_seed(
    State(st): State<Arc<AppState>>,
    Json(body): Json<DecryptRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let key = crypto::load_private_key(&st.keys_dir)?;
    let seed = crypto::decrypt_seed(&body.encrypted_seed, &key)?;
    st.store.store(&seed)?;
    tracing::info!("seed provisioned");
    Ok(Json(serde_json::json!({ "status": "ok" })))
}
