use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use spool_types::Thread;

use crate::error::Result;

/// Default history location, relative to the working directory.
pub const DEFAULT_HISTORY_PATH: &str = "data/thread_history.json";

/// File-backed thread history.
///
/// The whole history lives in one JSON array. Saving upserts by thread id:
/// a re-saved thread (typically a draft that has just been published)
/// replaces its earlier entry instead of duplicating it.
#[derive(Debug, Clone)]
pub struct ThreadStore {
    path: PathBuf,
}

impl ThreadStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default relative location.
    pub fn default_location() -> Self {
        Self::new(DEFAULT_HISTORY_PATH)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saves a thread, replacing an existing entry with the same id.
    ///
    /// Missing or corrupt existing history counts as empty. The file is
    /// written to a temporary sibling and renamed into place, so a failed
    /// write leaves the previous contents intact.
    pub fn save(&self, thread: &Thread) -> Result<()> {
        let mut threads = self.load()?;

        match threads.iter_mut().find(|t| t.id == thread.id) {
            Some(existing) => *existing = thread.clone(),
            None => threads.push(thread.clone()),
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&threads)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(
            path = %self.path.display(),
            threads = threads.len(),
            "thread history written"
        );
        Ok(())
    }

    /// Loads the full history.
    ///
    /// An absent file or unparseable contents yield an empty list: storage
    /// corruption is treated as nothing saved yet. Only other I/O failures
    /// (permissions, hardware) surface as errors.
    pub fn load(&self) -> Result<Vec<Thread>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&json) {
            Ok(threads) => Ok(threads),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "unreadable thread history treated as empty"
                );
                Ok(Vec::new())
            }
        }
    }
}
