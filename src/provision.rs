// provision.rs
// Client for the remote provisioning API: send our public key, receive the
// encrypted seed blob back.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
pub struct ProvisionRequest {
    pub student_id: String,
    pub github_repo_url: String,
    pub public_key: String,
}

#[derive(Deserialize)]
pub struct ProvisionResponse {
    pub status: String,
    #[serde(default)]
    pub encrypted_seed: Option<String>,
}

/// Exchange the public key for an encrypted seed blob. The blob stays opaque
/// here; decryption happens in `crypto::decrypt_seed`.
pub async fn request_encrypted_seed(api_url: &str, request: &ProvisionRequest) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let response = client
        .post(api_url)
        .json(request)
        .send()
        .await
        .context("provisioning API request failed")?
        .error_for_status()?;

    let body: ProvisionResponse = response
        .json()
        .await
        .context("provisioning API returned malformed JSON")?;

    if body.status != "success" {
        bail!("provisioning API error: status {:?}", body.status);
    }
    body.encrypted_seed
        .context("provisioning API response missing encrypted_seed")
}
