use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use console::style;

use crate::core::{MediaSource, PlaylistEntry, Video};
use crate::error::{Result, YtMp3Error};
use crate::progress::{create_counter, create_spinner};
use crate::transcode::Transcoder;
use crate::utils::sanitize_title;
use crate::youtube::canonicalize;

/// Outcome of one playlist batch
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub completed: usize,
    pub failed: usize,
}

static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Scratch file for one download attempt's raw audio.
///
/// The path is unique per attempt, so in-flight downloads can never
/// collide. The file is removed when the guard drops, on every exit
/// path; removal failure prints a Warning and never escalates.
struct TempAudio {
    path: PathBuf,
}

impl TempAudio {
    fn new() -> Self {
        let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!("ytmp3-{}-{}.audio", std::process::id(), seq));
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempAudio {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            eprintln!(
                "{} could not remove temporary file {}: {}",
                style("Warning:").yellow().bold(),
                self.path.display(),
                e
            );
        }
    }
}

/// Download a single video as MP3 under `save_path`.
///
/// Every failure is caught and reported here; the function always
/// returns normally so a batch caller keeps going.
pub async fn download_video(
    source: &dyn MediaSource,
    transcoder: &dyn Transcoder,
    url: &str,
    save_path: &Path,
) -> Option<PathBuf> {
    match download_one(source, transcoder, url, save_path).await {
        Ok(mp3_path) => {
            report_saved(&mp3_path);
            Some(mp3_path)
        }
        Err(e) => {
            report_error(&e);
            None
        }
    }
}

async fn download_one(
    source: &dyn MediaSource,
    transcoder: &dyn Transcoder,
    url: &str,
    save_path: &Path,
) -> Result<PathBuf> {
    // Canonicalization applies to the single-video flow only
    let canonical = canonicalize(url)?;
    let video = source.resolve_video(&canonical).await?;

    println!(
        "\n{} {}...",
        style("Downloading:").cyan(),
        style(&video.title).yellow()
    );

    fetch_and_convert(source, transcoder, &video, save_path).await
}

/// Fetch a resolved video's audio to a scratch file and transcode it
/// into the save directory.
///
/// The scratch file outlives the transcode step and nothing else; its
/// guard removes it whether either step succeeded or failed.
async fn fetch_and_convert(
    source: &dyn MediaSource,
    transcoder: &dyn Transcoder,
    video: &Video,
    save_path: &Path,
) -> Result<PathBuf> {
    let temp = TempAudio::new();

    let spinner = create_spinner(&format!("Downloading {}", video.title));
    let fetched = source.fetch_audio(&video.stream, temp.path()).await;
    spinner.finish_and_clear();
    fetched?;

    let mp3_path = save_path.join(format!("{}.mp3", sanitize_title(&video.title)));

    println!("{}", style("Converting to MP3...").blue());
    let spinner = create_spinner(&format!("Converting {}", video.title));
    let encoded = transcoder.encode_to_mp3(temp.path(), &mp3_path).await;
    spinner.finish_and_clear();
    encoded?;

    Ok(mp3_path)
}

/// Download every member of a playlist.
///
/// Entries are isolated from each other: a failing entry is reported and
/// counted while the batch continues, and an end-of-batch summary is
/// printed and returned. Only a failed playlist resolution aborts the
/// whole batch, since without it there is nothing to iterate.
pub async fn download_playlist(
    source: &dyn MediaSource,
    transcoder: &dyn Transcoder,
    url: &str,
    save_path: &Path,
) -> BatchSummary {
    let playlist = match source.resolve_playlist(url).await {
        Ok(playlist) => playlist,
        Err(e) => {
            report_error(&e);
            return BatchSummary::default();
        }
    };

    println!(
        "\n{} {}",
        style("Downloading Playlist:").cyan(),
        style(&playlist.title).yellow()
    );

    let bar = create_counter(playlist.entries.len() as u64, "Downloading Playlist");
    let mut summary = BatchSummary::default();

    for entry in &playlist.entries {
        match download_entry(source, transcoder, entry, save_path).await {
            Ok(mp3_path) => {
                summary.completed += 1;
                report_saved(&mp3_path);
            }
            Err(e) => {
                summary.failed += 1;
                report_error(&e);
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    println!(
        "{} {} converted, {} failed ({} total)",
        style("Playlist done:").green().bold(),
        summary.completed,
        summary.failed,
        playlist.entries.len()
    );

    summary
}

/// One playlist member: resolved from the URL the enumeration yielded,
/// never re-canonicalized.
async fn download_entry(
    source: &dyn MediaSource,
    transcoder: &dyn Transcoder,
    entry: &PlaylistEntry,
    save_path: &Path,
) -> Result<PathBuf> {
    println!(
        "\n{} {}...",
        style("Downloading:").cyan(),
        style(&entry.title).yellow()
    );

    let video = source.resolve_video(&entry.watch_url).await?;
    fetch_and_convert(source, transcoder, &video, save_path).await
}

fn report_saved(mp3_path: &Path) {
    println!(
        "{} {}\n",
        style("✓ MP3 saved to:").green().bold(),
        mp3_path.display()
    );
}

fn report_error(e: &YtMp3Error) {
    eprintln!("{} {}", style("✗ Error:").red().bold(), e);
}
