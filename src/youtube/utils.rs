use url::Url;

use crate::error::{Result, YtMp3Error};

/// How a user-supplied URL should be dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    Single,
    Playlist,
    Invalid,
}

/// Classify a URL as a playlist, a single video, or unusable input.
/// A URL carrying the playlist marker token is a playlist; any other
/// non-empty input is treated as a single video.
pub fn classify(url: &str) -> UrlKind {
    let url = url.trim();
    if url.is_empty() {
        UrlKind::Invalid
    } else if url.contains("playlist") {
        UrlKind::Playlist
    } else {
        UrlKind::Single
    }
}

/// Canonicalize a single-video URL down to its video identifier.
///
/// Requires a non-empty `v` query parameter; every other parameter,
/// fragment and playlist index is discarded. Playlist member URLs are
/// never passed through here.
pub fn canonicalize(url: &str) -> Result<String> {
    let parsed = Url::parse(url.trim())
        .map_err(|_| YtMp3Error::InvalidUrl(format!("Cannot parse URL: {}", url)))?;

    let video_id = parsed
        .query_pairs()
        .find(|(k, _)| k == "v")
        .map(|(_, v)| v.into_owned())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| YtMp3Error::InvalidUrl("No video ID found (missing v parameter)".to_string()))?;

    Ok(format!("https://www.youtube.com/watch?v={}", video_id))
}

/// Parse video ID from a YouTube URL or a direct video ID string
pub fn parse_id(url: &str) -> Result<String> {
    // Direct video ID (11 characters)
    if is_valid_video_id(url) {
        return Ok(url.to_string());
    }

    // youtube.com/watch?v=VIDEO_ID
    if let Some(pos) = url.find("v=") {
        let id: String = url[pos + 2..]
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
            .take(11)
            .collect();
        if is_valid_video_id(&id) {
            return Ok(id);
        }
    }

    // youtu.be/VIDEO_ID
    if url.contains("youtu.be/")
        && let Some(pos) = url.find("youtu.be/")
    {
        let id: String = url[pos + 9..]
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
            .take(11)
            .collect();
        if is_valid_video_id(&id) {
            return Ok(id);
        }
    }

    Err(YtMp3Error::InvalidUrl(format!(
        "Cannot extract video ID from: {}",
        url
    )))
}

/// Validate if a string is a valid YouTube video ID (11 characters, alphanumeric + - and _)
pub fn is_valid_video_id(id: &str) -> bool {
    id.len() == 11 && id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Construct YouTube watch URL from video ID
pub fn build_watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_playlist_marker() {
        assert_eq!(
            classify("https://www.youtube.com/playlist?list=PLx"),
            UrlKind::Playlist
        );
        assert_eq!(
            classify("https://www.youtube.com/watch?v=abc123&list=xyz"),
            UrlKind::Single
        );
        assert_eq!(classify(""), UrlKind::Invalid);
        assert_eq!(classify("   "), UrlKind::Invalid);
    }

    #[test]
    fn canonicalize_discards_extra_parameters() {
        let url = "https://www.youtube.com/watch?v=abc123&list=xyz&t=42s#frag";
        assert_eq!(
            canonicalize(url).unwrap(),
            "https://www.youtube.com/watch?v=abc123"
        );
    }

    #[test]
    fn canonicalize_is_idempotent() {
        let canonical = canonicalize("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(canonicalize(&canonical).unwrap(), canonical);
    }

    #[test]
    fn canonicalize_requires_video_id() {
        assert!(matches!(
            canonicalize("https://www.youtube.com/watch"),
            Err(YtMp3Error::InvalidUrl(_))
        ));
        assert!(matches!(
            canonicalize("https://www.youtube.com/watch?v="),
            Err(YtMp3Error::InvalidUrl(_))
        ));
        assert!(matches!(
            canonicalize("not a url"),
            Err(YtMp3Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn parse_id_accepts_watch_and_short_urls() {
        assert_eq!(
            parse_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            parse_id("https://youtu.be/dQw4w9WgXcQ").unwrap(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(parse_id("dQw4w9WgXcQ").unwrap(), "dQw4w9WgXcQ");
        assert!(parse_id("https://www.youtube.com/").is_err());
    }
}
