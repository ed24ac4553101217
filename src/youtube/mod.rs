use std::path::Path;

use async_trait::async_trait;

use crate::core::{AudioStream, MediaSource, Playlist, Video};
use crate::error::Result;

pub mod core;
pub mod types;
pub mod utils;

pub use utils::{UrlKind, canonicalize, classify, parse_id};

/// YouTube media source implementing the MediaSource trait
#[derive(Debug, Clone, Default)]
pub struct YoutubeSource;

#[async_trait]
impl MediaSource for YoutubeSource {
    async fn resolve_video(&self, url: &str) -> Result<Video> {
        core::resolve_video(url)
            .await
            .map_err(|e| e.into_resolution(url))
    }

    async fn fetch_audio(&self, stream: &AudioStream, dest: &Path) -> Result<()> {
        core::fetch_audio(stream, dest)
            .await
            .map_err(|e| e.into_download(&stream.url))
    }

    async fn resolve_playlist(&self, url: &str) -> Result<Playlist> {
        core::resolve_playlist(url)
            .await
            .map_err(|e| e.into_resolution(url))
    }
}
