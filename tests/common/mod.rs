// Shared test scaffolding: a temp-dir-backed AppState plus an OAEP encrypt
// helper standing in for the provisioning server's side of the handshake.

use std::{fs, path::Path, path::PathBuf, sync::Arc};

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use openssl::{
    encrypt::Encrypter,
    hash::MessageDigest,
    pkey::PKey,
    rsa::{Padding, Rsa},
};
use tempfile::TempDir;

use semilla::crypto::PUBLIC_KEY_FILE;
use semilla::state::AppState;
use semilla::store::FileSeedStore;

/// 2048 bits keeps key generation fast; the server default stays 4096.
pub const TEST_KEY_BITS: u32 = 2048;

pub struct TestContext {
    pub state: Arc<AppState>,
    pub keys_dir: PathBuf,
    pub seed_path: PathBuf,
    _tmp: TempDir,
}

pub fn setup_state() -> TestContext {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let seed_path = tmp.path().join("seed.txt");
    let keys_dir = tmp.path().join("keys");

    let state = AppState {
        store: Box::new(FileSeedStore::new(seed_path.clone())),
        keys_dir: keys_dir.clone(),
        issuer: "semilla-test".to_string(),
        account: "student@example.com".to_string(),
        valid_window: 1,
    };

    TestContext {
        state: Arc::new(state),
        keys_dir,
        seed_path,
        _tmp: tmp,
    }
}

/// OAEP-SHA256 encrypt `plaintext` with the public key under `keys_dir`,
/// base64-encoded like the wire blob.
pub fn encrypt_blob(keys_dir: &Path, plaintext: &[u8]) -> String {
    BASE64.encode(oaep_encrypt(keys_dir, plaintext))
}

pub fn oaep_encrypt(keys_dir: &Path, plaintext: &[u8]) -> Vec<u8> {
    let pem = fs::read(keys_dir.join(PUBLIC_KEY_FILE)).expect("public key missing");
    let rsa = Rsa::public_key_from_pem(&pem).expect("invalid public key pem");
    let key = PKey::from_rsa(rsa).expect("invalid public key");

    let mut encrypter = Encrypter::new(&key).expect("encrypter init failed");
    encrypter.set_rsa_padding(Padding::PKCS1_OAEP).unwrap();
    encrypter.set_rsa_oaep_md(MessageDigest::sha256()).unwrap();
    encrypter.set_rsa_mgf1_md(MessageDigest::sha256()).unwrap();

    let mut out = vec![0u8; encrypter.encrypt_len(plaintext).unwrap()];
    let written = encrypter.encrypt(plaintext, &mut out).unwrap();
    out.truncate(written);
    out
}
