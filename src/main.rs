use std::path::PathBuf;

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};

use ytmp3::{
    CONFIG_FILE, FfmpegTranscoder, SavePathStore, UrlKind, YoutubeSource, classify,
    download_playlist, download_video,
};

#[tokio::main]
async fn main() {
    // This tool defines no failure exit code: setup errors are reported
    // and the process still exits 0.
    if let Err(e) = run().await {
        eprintln!("{} {}", style("✗ Error:").red().bold(), e);
    }
}

async fn run() -> Result<()> {
    let store = SavePathStore::new(CONFIG_FILE);
    let save_path = get_save_path(&store)?;

    let source = YoutubeSource;
    let transcoder = FfmpegTranscoder::default();

    loop {
        let url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter YouTube video or playlist URL")
            .allow_empty(true)
            .interact_text()?;
        let url = url.trim().to_string();

        match classify(&url) {
            UrlKind::Invalid => {
                eprintln!("{}", style("✗ Invalid URL").red().bold());
                continue;
            }
            UrlKind::Playlist => {
                download_playlist(&source, &transcoder, &url, &save_path).await;
            }
            UrlKind::Single => {
                download_video(&source, &transcoder, &url, &save_path).await;
            }
        }

        let again = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Do you want to convert another video/playlist?")
            .default(false)
            .interact()?;
        if !again {
            println!("{}", style("Goodbye!").green());
            break;
        }
    }

    Ok(())
}

/// Load the persisted save path, or prompt for one and persist it.
/// Runs once per process invocation.
fn get_save_path(store: &SavePathStore) -> Result<PathBuf> {
    if let Some(path) = store.load() {
        return Ok(path);
    }

    if store.is_stale() {
        eprintln!(
            "{}",
            style("✗ The saved path does not exist. Please provide a new path.").red()
        );
    }

    let dir: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter the path where you want to save MP3 files")
        .interact_text()?;

    Ok(store.save(dir.trim())?)
}
