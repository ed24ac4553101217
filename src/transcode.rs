use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Result, YtMp3Error};

pub const DEFAULT_BITRATE_KBPS: u32 = 192;
pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 44100;

/// Trait for converting a raw downloaded audio file into an MP3
#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn encode_to_mp3(&self, input: &Path, output: &Path) -> Result<()>;
}

/// MP3 encoder backed by an external ffmpeg process
#[derive(Debug, Clone)]
pub struct FfmpegTranscoder {
    program: String,
    bitrate_kbps: u32,
    sample_rate_hz: u32,
}

impl Default for FfmpegTranscoder {
    fn default() -> Self {
        Self {
            program: "ffmpeg".to_string(),
            bitrate_kbps: DEFAULT_BITRATE_KBPS,
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
        }
    }
}

impl FfmpegTranscoder {
    /// Override the encoder executable name
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    /// Run the encoder as a child process and wait for it. Encoder output
    /// is discarded; the error carries the exit status only.
    async fn encode_to_mp3(&self, input: &Path, output: &Path) -> Result<()> {
        let status = Command::new(&self.program)
            .arg("-y")
            .arg("-i")
            .arg(input)
            .arg("-vn")
            .arg("-b:a")
            .arg(format!("{}k", self.bitrate_kbps))
            .arg("-ar")
            .arg(self.sample_rate_hz.to_string())
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| YtMp3Error::Transcode {
                path: input.to_path_buf(),
                reason: format!("failed to launch {}: {}", self.program, e),
            })?;

        if !status.success() {
            return Err(YtMp3Error::Transcode {
                path: input.to_path_buf(),
                reason: format!(
                    "{} exited with status {}",
                    self.program,
                    status.code().unwrap_or(-1)
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_encoder_is_a_transcode_error() {
        let transcoder = FfmpegTranscoder::with_program("ytmp3-no-such-encoder");
        let err = transcoder
            .encode_to_mp3(Path::new("in.audio"), Path::new("out.mp3"))
            .await
            .unwrap_err();

        match err {
            YtMp3Error::Transcode { reason, .. } => {
                assert!(reason.contains("failed to launch"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn non_zero_exit_is_a_transcode_error() {
        let transcoder = FfmpegTranscoder::with_program("false");
        let err = transcoder
            .encode_to_mp3(Path::new("in.audio"), Path::new("out.mp3"))
            .await
            .unwrap_err();

        match err {
            YtMp3Error::Transcode { reason, .. } => {
                assert!(reason.contains("exited with status"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
