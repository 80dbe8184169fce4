use std::path::{Path, PathBuf};

use guestbook_core::WishList;

use crate::error::SyncError;

/// Local mirror of the displayed wishes: one JSON array on disk.
#[derive(Debug, Clone)]
pub struct WishCache {
    path: PathBuf,
}

impl WishCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when nothing has been cached yet.
    pub fn read(&self) -> Result<Option<WishList>, SyncError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = std::fs::read(&self.path)?;
        let wishes: WishList = serde_json::from_slice(&json)?;
        tracing::debug!(path = %self.path.display(), count = wishes.len(), "read local cache");
        Ok(Some(wishes))
    }

    /// Overwrite the cache atomically (tmp + rename).
    pub fn write(&self, wishes: &WishList) -> Result<(), SyncError> {
        let json = serde_json::to_vec_pretty(wishes)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &json)?;
        std::fs::rename(&tmp_path, &self.path)?;

        tracing::debug!(path = %self.path.display(), count = wishes.len(), "local cache written");
        Ok(())
    }

    pub fn clear(&self) -> Result<(), SyncError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            tracing::info!(path = %self.path.display(), "local cache cleared");
        }
        Ok(())
    }
}
