// state.rs
// AppState: the seed slot, key location, and TOTP labels, all env-driven.

use std::{env, path::PathBuf};

use anyhow::Result;

use crate::store::{FileSeedStore, SeedStore};
use crate::totp::DEFAULT_VALID_WINDOW;

pub const DEFAULT_SEED_PATH: &str = "./data/seed.txt";
pub const DEFAULT_KEYS_DIR: &str = "./keys";

pub struct AppState {
    pub store: Box<dyn SeedStore>,
    pub keys_dir: PathBuf,
    pub issuer: String,
    pub account: String,
    pub valid_window: u32,
}

pub fn init_state() -> Result<AppState> {
    let seed_path = env::var("SEED_PATH").unwrap_or_else(|_| DEFAULT_SEED_PATH.to_string());
    let keys_dir = env::var("KEYS_DIR").unwrap_or_else(|_| DEFAULT_KEYS_DIR.to_string());
    let issuer = env::var("TOTP_ISSUER").unwrap_or_else(|_| "semilla".to_string());
    let account = env::var("TOTP_ACCOUNT").unwrap_or_else(|_| "student".to_string());
    let valid_window = match env::var("TOTP_VALID_WINDOW") {
        Ok(raw) => raw.parse()?,
        Err(_) => DEFAULT_VALID_WINDOW,
    };

    Ok(AppState {
        store: Box::new(FileSeedStore::new(PathBuf::from(seed_path))),
        keys_dir: PathBuf::from(keys_dir),
        issuer,
        account,
        valid_window,
    })
}
