//! Single-slot on-disk cache of the last good subscription document.
//!
//! No lock guards the slot. Writes go through a temporary file and a rename, so
//! readers always see a complete document. Concurrent writers race and the last
//! rename wins.

use std::{
    io,
    path::{Path, PathBuf},
};

use actix_web::web::Bytes;
use rand::{distributions::Alphanumeric, Rng};
use tokio::fs;

#[derive(Debug, Clone)]
pub struct CacheSlot {
    path: PathBuf,
}

impl CacheSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read cached document. Any read error yields an empty body.
    pub async fn load(&self) -> Bytes {
        match fs::read(&self.path).await {
            Ok(data) => Bytes::from(data),
            Err(e) => {
                debug!("Cache slot {} is unreadable: {e}", self.path.display());
                Bytes::new()
            }
        }
    }

    /// Replace cached document with `data`.
    pub async fn store(&self, data: &[u8]) -> io::Result<()> {
        let tmp_path = self.tmp_path();
        if let Err(e) = fs::write(&tmp_path, data).await {
            fs::remove_file(&tmp_path).await.ok();
            return Err(e);
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path).await {
            fs::remove_file(&tmp_path).await.ok();
            return Err(e);
        }
        Ok(())
    }

    // Unique per write, so concurrent writers never share a temporary file.
    fn tmp_path(&self) -> PathBuf {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(12)
            .map(char::from)
            .collect();
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "cache".into());
        name.push(format!(".{suffix}.tmp"));
        self.path.with_file_name(name)
    }
}
