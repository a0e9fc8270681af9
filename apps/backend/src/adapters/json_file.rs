//! Locked, atomic access to a JSON array stored in a single file.
//!
//! Every access takes an OS-level lock on a sidecar `<file>.lock`: shared for
//! reads, exclusive for read-modify-write. Writes go to `<file>.tmp` and are
//! renamed over the original, so a crash never leaves a torn file behind.
//! All file work runs on the blocking pool.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs4::fs_std::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::domain::DomainError;

#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
    lock_path: PathBuf,
    tmp_path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lock_path = sibling(&path, "lock");
        let tmp_path = sibling(&path, "tmp");
        Self {
            path,
            lock_path,
            tmp_path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record. A missing or empty file reads as no records.
    pub async fn read_all<T>(&self) -> Result<Vec<T>, DomainError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let this = self.clone();
        tokio::task::spawn_blocking(move || {
            let _guard = this.lock(false)?;
            this.load()
        })
        .await?
    }

    /// Load, let `f` mutate the records, and write them back, all under one
    /// exclusive lock. Nothing is written when `f` returns an error.
    pub async fn modify<T, R, F>(&self, f: F) -> Result<R, DomainError>
    where
        T: Serialize + DeserializeOwned + Send + 'static,
        R: Send + 'static,
        F: FnOnce(&mut Vec<T>) -> Result<R, DomainError> + Send + 'static,
    {
        let this = self.clone();
        tokio::task::spawn_blocking(move || {
            let _guard = this.lock(true)?;
            let mut records = this.load()?;
            let out = f(&mut records)?;
            this.store(&records)?;
            Ok(out)
        })
        .await?
    }

    // The lock is released when the returned handle is dropped.
    fn lock(&self, exclusive: bool) -> Result<File, DomainError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&self.lock_path)?;

        if exclusive {
            FileExt::lock_exclusive(&file)?;
        } else {
            FileExt::lock_shared(&file)?;
        }
        Ok(file)
    }

    fn load<T: DeserializeOwned>(&self) -> Result<Vec<T>, DomainError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "data file does not parse");
            DomainError::from(e)
        })
    }

    fn store<T: Serialize>(&self, records: &[T]) -> Result<(), DomainError> {
        let bytes = serde_json::to_vec_pretty(records)?;

        let mut tmp = File::create(&self.tmp_path)?;
        tmp.write_all(&bytes)?;
        tmp.sync_all()?;
        drop(tmp);

        fs::rename(&self.tmp_path, &self.path)?;
        debug!(path = %self.path.display(), records = records.len(), "data file written");
        Ok(())
    }
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}
