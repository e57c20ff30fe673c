// seed.rs
// The canonical shared secret: exactly 64 lowercase hex chars (32 bytes).

use data_encoding::{BASE32_NOPAD, HEXLOWER};

use crate::error::{FormatIssue, SeedError};

pub const SEED_HEX_LEN: usize = 64;

/// A validated seed. Construction is the only place the format is checked;
/// everything downstream (base32 re-encoding, TOTP) relies on the invariant.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed {
    hex: String,
    raw: Vec<u8>,
}

impl Seed {
    /// Parse and validate a seed, trimming surrounding whitespace first.
    pub fn parse(input: &str) -> Result<Self, SeedError> {
        let hex = input.trim();
        if hex.len() != SEED_HEX_LEN {
            return Err(SeedError::Format(FormatIssue::WrongLength(hex.len())));
        }
        // HEXLOWER rejects uppercase digits and non-hex characters.
        let raw = HEXLOWER
            .decode(hex.as_bytes())
            .map_err(|_| SeedError::Format(FormatIssue::InvalidCharacter))?;
        Ok(Seed {
            hex: hex.to_string(),
            raw,
        })
    }

    pub fn as_hex(&self) -> &str {
        &self.hex
    }

    /// RFC 4648 Base32 (NOPAD) re-encoding of the raw seed bytes, the form
    /// the TOTP construction consumes.
    pub fn to_base32(&self) -> String {
        BASE32_NOPAD.encode(&self.raw)
    }
}

// Never print the secret itself.
impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Seed(..)")
    }
}
