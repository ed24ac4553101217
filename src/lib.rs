pub mod config;
pub mod core;
mod download;
pub mod error;
pub mod pipeline;
pub mod progress;
pub mod transcode;
pub mod utils;
pub mod youtube;

pub use config::{CONFIG_FILE, SavePathStore};
pub use self::core::{AudioStream, MediaSource, Playlist, PlaylistEntry, Video};
pub use error::{Result, YtMp3Error};
pub use pipeline::{BatchSummary, download_playlist, download_video};
pub use transcode::{FfmpegTranscoder, Transcoder};
pub use utils::sanitize_title;
pub use youtube::{UrlKind, YoutubeSource, canonicalize, classify};
