use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// An audio-only stream offered by the source for one video
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioStream {
    pub itag: i64,
    pub mime_type: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_length: Option<String>,
}

/// A resolved video: identifier, title and the selected audio stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub stream: AudioStream,
}

impl Video {
    pub fn new(id: String, title: String, stream: AudioStream) -> Self {
        Self { id, title, stream }
    }
}

/// One enumerated playlist member. The member's own stream is resolved
/// lazily, when the pipeline gets to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistEntry {
    pub title: String,
    pub watch_url: String,
}

/// Playlist representation: title plus ordered member entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub title: String,
    pub entries: Vec<PlaylistEntry>,
}

/// Trait for resolving and fetching media from a provider.
///
/// All provider-specific knowledge lives behind this seam; the pipeline
/// only sees titles, stream handles and bytes on disk.
#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Resolve a single video's title and audio stream
    async fn resolve_video(&self, url: &str) -> Result<Video>;

    /// Download the stream's bytes to `dest`
    async fn fetch_audio(&self, stream: &AudioStream, dest: &Path) -> Result<()>;

    /// Enumerate a playlist's title and member videos without resolving
    /// any member's stream
    async fn resolve_playlist(&self, url: &str) -> Result<Playlist>;
}
