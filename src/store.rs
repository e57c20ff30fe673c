// store.rs
// Single-slot seed persistence behind a trait so the core stays testable
// without a filesystem.

use std::{
    fs,
    io::ErrorKind,
    path::PathBuf,
    sync::Mutex,
};

use anyhow::{Context, Result};

use crate::seed::Seed;

/// The seed slot: one secret per installation, overwritten on re-provisioning.
pub trait SeedStore: Send + Sync {
    fn load(&self) -> Result<Option<Seed>>;
    fn store(&self, seed: &Seed) -> Result<()>;
}

/// File-backed slot. Writes go to a temp file in the same directory and are
/// renamed into place, so a concurrent reader sees the old seed or the new
/// one, never a partial write. The mutex serializes overlapping writers.
pub struct FileSeedStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSeedStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }
}

impl SeedStore for FileSeedStore {
    fn load(&self) -> Result<Option<Seed>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read {}", self.path.display()));
            }
        };
        // Re-validate on every load; Seed::parse trims the trailing newline.
        let seed = Seed::parse(&contents)
            .with_context(|| format!("stored seed at {} is corrupt", self.path.display()))?;
        Ok(Some(seed))
    }

    fn store(&self, seed: &Seed) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, format!("{}\n", seed.as_hex()))
            .with_context(|| format!("failed to write {}", tmp_path.display()))?;

        if let Err(err) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(err)
                .with_context(|| format!("failed to replace {}", self.path.display()));
        }
        Ok(())
    }
}
