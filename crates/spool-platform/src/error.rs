use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlatformError {
    /// Non-success response from the platform API; the body is retained.
    #[error("platform API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request never produced a usable response.
    #[error("platform request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A media file could not be read for upload.
    #[error("failed to read media file {path}: {source}")]
    Media {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Publishing aborted mid-chain.
///
/// The ids assigned before the failure are retained for the caller; the
/// chain is not resumable from the middle because each reply link depends
/// on a specific prior id. Retry from scratch or discard.
#[derive(Error, Debug)]
#[error("publishing aborted at post {} ({} posts already published): {}", .failed_index, .completed_ids.len(), .source)]
pub struct PartialFailure {
    pub completed_ids: Vec<String>,
    pub failed_index: usize,
    #[source]
    pub source: PlatformError,
}

pub type Result<T> = std::result::Result<T, PlatformError>;
