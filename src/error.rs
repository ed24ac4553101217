use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum YtMp3Error {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to resolve {url}: {reason}")]
    Resolution { url: String, reason: String },

    #[error("Download failed for {url}: {reason}")]
    Download { url: String, reason: String },

    #[error("Transcode failed for {path}: {reason}")]
    Transcode { path: PathBuf, reason: String },

    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timeout for URL: {0}")]
    RequestTimeout(String),

    #[error("HTTP error {status} for URL: {url}")]
    Http { status: u16, url: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Audio stream not found")]
    AudioNotFound,

    #[error("Video not found or unavailable: {0}")]
    VideoUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl YtMp3Error {
    /// Fold any resolution-phase failure into the `Resolution` variant,
    /// keeping the URL the caller asked for.
    pub(crate) fn into_resolution(self, url: &str) -> Self {
        match self {
            e @ YtMp3Error::Resolution { .. } => e,
            e => YtMp3Error::Resolution {
                url: url.to_string(),
                reason: e.to_string(),
            },
        }
    }

    /// Fold any fetch-phase failure into the `Download` variant.
    pub(crate) fn into_download(self, url: &str) -> Self {
        match self {
            e @ YtMp3Error::Download { .. } => e,
            e => YtMp3Error::Download {
                url: url.to_string(),
                reason: e.to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, YtMp3Error>;
