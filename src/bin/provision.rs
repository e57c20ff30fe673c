// bin/provision.rs
// One-shot bootstrap: generate keys if absent, exchange the public key for an
// encrypted seed at the provisioning API, unwrap it, and persist the seed.

use std::env;

use anyhow::{Context, Result};
use dotenvy::dotenv;

use semilla::crypto::{self, DEFAULT_KEY_BITS, PRIVATE_KEY_FILE};
use semilla::provision::{ProvisionRequest, request_encrypted_seed};
use semilla::state;
use semilla::store::SeedStore;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let st = state::init_state()?;
    let api_url = env::var("PROVISION_API_URL").context("PROVISION_API_URL is not set")?;
    let student_id = env::var("STUDENT_ID").context("STUDENT_ID is not set")?;
    let github_repo_url = env::var("GITHUB_REPO_URL").context("GITHUB_REPO_URL is not set")?;

    if !st.keys_dir.join(PRIVATE_KEY_FILE).exists() {
        println!("Generating {}-bit RSA keypair in {}", DEFAULT_KEY_BITS, st.keys_dir.display());
        crypto::generate_keypair(&st.keys_dir, DEFAULT_KEY_BITS)?;
    }

    let request = ProvisionRequest {
        student_id,
        github_repo_url,
        public_key: crypto::read_public_key_pem(&st.keys_dir)?,
    };
    let encrypted_seed = request_encrypted_seed(&api_url, &request).await?;

    let key = crypto::load_private_key(&st.keys_dir)?;
    let seed = crypto::decrypt_seed(&encrypted_seed, &key)?;
    st.store.store(&seed)?;

    println!("Seed provisioned");
    Ok(())
}
