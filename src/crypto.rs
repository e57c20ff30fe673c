// crypto.rs
// RSA keypair management (PEM on disk) and OAEP-SHA256 seed decryption.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use openssl::{
    encrypt::Decrypter,
    hash::MessageDigest,
    pkey::{PKey, Private},
    rsa::{Padding, Rsa},
};

use crate::error::SeedError;
use crate::seed::Seed;

pub const DEFAULT_KEY_BITS: u32 = 4096;
pub const PRIVATE_KEY_FILE: &str = "student_private.pem";
pub const PUBLIC_KEY_FILE: &str = "student_public.pem";

/// Generate an RSA keypair and write both halves as PEM under `keys_dir`.
/// The private half stays local; only the public half is ever sent out.
pub fn generate_keypair(keys_dir: &Path, bits: u32) -> Result<()> {
    let rsa = Rsa::generate(bits)?;
    fs::create_dir_all(keys_dir)
        .with_context(|| format!("failed to create {}", keys_dir.display()))?;
    fs::write(keys_dir.join(PRIVATE_KEY_FILE), rsa.private_key_to_pem()?)?;
    fs::write(keys_dir.join(PUBLIC_KEY_FILE), rsa.public_key_to_pem()?)?;
    Ok(())
}

pub fn load_private_key(keys_dir: &Path) -> Result<PKey<Private>> {
    let path = keys_dir.join(PRIVATE_KEY_FILE);
    let pem =
        fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
    let rsa = Rsa::private_key_from_pem(&pem)?;
    Ok(PKey::from_rsa(rsa)?)
}

pub fn read_public_key_pem(keys_dir: &Path) -> Result<String> {
    let path = keys_dir.join(PUBLIC_KEY_FILE);
    fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))
}

/// Recover the seed from a base64-encoded OAEP-SHA256 blob.
///
/// Pure decrypt-and-validate: persistence belongs to the caller. Every
/// OAEP failure maps to the same `Decryption` variant, wrong key included.
pub fn decrypt_seed(encrypted_b64: &str, key: &PKey<Private>) -> Result<Seed, SeedError> {
    let cipher = BASE64
        .decode(encrypted_b64.trim())
        .map_err(SeedError::Decode)?;

    let plain = oaep_decrypt(key, &cipher).map_err(|_| SeedError::Decryption)?;

    let text = String::from_utf8(plain).map_err(SeedError::Encoding)?;
    Seed::parse(&text)
}

fn oaep_decrypt(
    key: &PKey<Private>,
    cipher: &[u8],
) -> Result<Vec<u8>, openssl::error::ErrorStack> {
    let mut decrypter = Decrypter::new(key)?;
    decrypter.set_rsa_padding(Padding::PKCS1_OAEP)?;
    decrypter.set_rsa_oaep_md(MessageDigest::sha256())?;
    decrypter.set_rsa_mgf1_md(MessageDigest::sha256())?;

    let mut plain = vec![0u8; decrypter.decrypt_len(cipher)?];
    let written = decrypter.decrypt(cipher, &mut plain)?;
    plain.truncate(written);
    Ok(plain)
}
