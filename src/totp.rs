// totp.rs
// TOTP engine: build an instance from the seed, derive time-stepped codes,
// and verify candidates against a tolerance window.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use constant_time_eq::constant_time_eq;
use totp_rs::{Algorithm, Secret, TOTP};

use crate::seed::Seed;

pub const PERIOD_SECONDS: u64 = 30;
pub const DIGITS: usize = 6;
pub const DEFAULT_VALID_WINDOW: u32 = 1;

/// Build a TOTP instance for the provisioned seed.
/// issuer/account only matter for the otpauth enrollment URL.
pub fn build_totp(issuer: &str, account: &str, seed: &Seed) -> Result<TOTP> {
    let secret = Secret::Encoded(seed.to_base32()).to_bytes()?;
    let totp = TOTP::new(
        Algorithm::SHA1,          // compatible with standard authenticator apps
        DIGITS,                   // digits
        1,                        // skew, unused: verification runs its own window
        PERIOD_SECONDS,           // period in seconds
        secret,                   // secret bytes
        Some(issuer.to_string()), // issuer
        account.to_string(),      // account name
    )?;
    Ok(totp)
}

/// Seconds since the Unix epoch.
pub fn unix_now() -> Result<u64> {
    Ok(SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock before unix epoch")?
        .as_secs())
}

/// Current 6-digit code at `at`. Deterministic per (seed, 30s step).
pub fn generate_code(totp: &TOTP, at: u64) -> String {
    totp.generate(at)
}

/// Seconds left in the current step. At an exact boundary this is the full
/// interval, never 0: the new step has just begun.
pub fn seconds_remaining(interval: u64, at: u64) -> u64 {
    interval - at % interval
}

/// Check `candidate` against the codes for steps `at + k*period`,
/// `k in [-valid_window, +valid_window]`.
///
/// Malformed candidates (wrong length, non-digits) are a plain mismatch, not
/// an error: an external caller controls this input and gets one signal.
/// Comparison is constant-time and the loop never exits early.
pub fn verify_code(totp: &TOTP, candidate: &str, valid_window: u32, at: u64) -> bool {
    if candidate.len() != totp.digits || !candidate.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let mut valid = false;
    for k in -(valid_window as i64)..=(valid_window as i64) {
        let Some(t) = at.checked_add_signed(k * totp.step as i64) else {
            continue;
        };
        let expected = totp.generate(t);
        if constant_time_eq(expected.as_bytes(), candidate.as_bytes()) {
            valid = true;
        }
    }
    valid
}
