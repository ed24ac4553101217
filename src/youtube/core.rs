use std::path::Path;

use regex::Regex;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, ORIGIN, USER_AGENT};
use serde_json::Value;

use crate::core::{AudioStream, Playlist, PlaylistEntry, Video};
use crate::download::{download_text_with_headers, download_to_file, post_json_with_headers};
use crate::error::{Result, YtMp3Error};
use crate::youtube::types::{
    ClientInfo, ContentPlaybackContext, InnertubeContext, InnertubeRequest, PlaybackContext,
    PlaylistContent, Title, YtInitialData,
};
use crate::youtube::utils::{build_watch_url, parse_id};

pub const WEB_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const ANDROID_USER_AGENT: &str =
    "com.google.android.youtube/20.10.38 (Linux; U; Android 11) gzip";
pub const INNERTUBE_CLIENT_VERSION: &str = "20.10.38";

/// YouTube configuration extracted from the watch page
#[derive(Debug, Clone)]
pub struct YtConfig {
    pub api_key: String,
    pub visitor_data: Option<String>,
}

/// Fetch a watch page's HTML
pub async fn fetch_watch_page(url: &str) -> Result<String> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(WEB_USER_AGENT));
    headers.insert(
        "Cookie",
        HeaderValue::from_static("CONSENT=YES+cb; SOCS=CAI"),
    );

    download_text_with_headers(url, headers).await
}

/// Extract ytcfg configuration from HTML
pub fn extract_ytcfg_from_html(html: &str) -> Result<YtConfig> {
    let api_key_re = Regex::new(r#""INNERTUBE_API_KEY"\s*:\s*"([^"]+)""#).unwrap();
    let api_key = api_key_re
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| YtMp3Error::Parse("Cannot find INNERTUBE_API_KEY".to_string()))?;

    let visitor_re = Regex::new(r#""VISITOR_DATA"\s*:\s*"([^"]+)""#).unwrap();
    let visitor_data = visitor_re
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());

    Ok(YtConfig {
        api_key,
        visitor_data,
    })
}

/// Fetch player response from the YouTube Android API
async fn fetch_player_response(
    video_id: &str,
    api_key: &str,
    visitor_data: Option<&str>,
) -> Result<Value> {
    let api_url = format!(
        "https://www.youtube.com/youtubei/v1/player?key={}&prettyPrint=false",
        api_key
    );

    let request_body = InnertubeRequest {
        video_id: video_id.to_string(),
        context: InnertubeContext {
            client: ClientInfo {
                client_name: "ANDROID".to_string(),
                client_version: INNERTUBE_CLIENT_VERSION.to_string(),
                user_agent: ANDROID_USER_AGENT.to_string(),
                os_name: "Android".to_string(),
                os_version: "11".to_string(),
                hl: "en".to_string(),
                time_zone: "UTC".to_string(),
                utc_offset_minutes: 0,
            },
        },
        playback_context: PlaybackContext {
            content_playback_context: ContentPlaybackContext {
                html5_preference: "HTML5_PREF_WANTS".to_string(),
            },
        },
        content_check_ok: true,
        racy_check_ok: true,
    };

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(ANDROID_USER_AGENT));
    headers.insert("X-YouTube-Client-Name", HeaderValue::from_static("3"));
    headers.insert(
        "X-YouTube-Client-Version",
        HeaderValue::from_static(INNERTUBE_CLIENT_VERSION),
    );
    headers.insert(ORIGIN, HeaderValue::from_static("https://www.youtube.com"));

    if let Some(vd) = visitor_data
        && let Ok(val) = HeaderValue::from_str(vd)
    {
        headers.insert("X-Goog-Visitor-Id", val);
    }

    let player_response: Value = post_json_with_headers(&api_url, &request_body, headers).await?;

    // Check playability status
    if let Some(status) = player_response.get("playabilityStatus") {
        let status_str = status["status"].as_str().unwrap_or("");
        if status_str != "OK" {
            let reason = status["reason"].as_str().unwrap_or("Unknown error");
            return Err(YtMp3Error::VideoUnavailable(reason.to_string()));
        }
    }

    Ok(player_response)
}

/// Get video title from player response
fn get_video_title(player_response: &Value) -> String {
    player_response["videoDetails"]["title"]
        .as_str()
        .unwrap_or("audio")
        .to_string()
}

/// Extract audio-only streams with direct URLs, in the order the source
/// offers them
pub fn extract_audio_streams(player_response: &Value) -> Result<Vec<AudioStream>> {
    let streaming_data = player_response
        .get("streamingData")
        .ok_or(YtMp3Error::AudioNotFound)?;

    let mut streams = Vec::new();

    if let Some(adaptive_formats) = streaming_data
        .get("adaptiveFormats")
        .and_then(|f| f.as_array())
    {
        for format in adaptive_formats {
            let mime_type = format["mimeType"].as_str().unwrap_or("");

            if !mime_type.starts_with("audio/") {
                continue;
            }

            // The Android API provides direct URLs
            let url = match format.get("url").and_then(|u| u.as_str()) {
                Some(u) => u.to_string(),
                None => continue,
            };

            streams.push(AudioStream {
                itag: format["itag"].as_i64().unwrap_or(0),
                mime_type: mime_type.to_string(),
                url,
                bitrate: format["bitrate"].as_i64(),
                content_length: format["contentLength"].as_str().map(|s| s.to_string()),
            });
        }
    }

    if streams.is_empty() {
        return Err(YtMp3Error::AudioNotFound);
    }

    Ok(streams)
}

/// Resolve a single video: title plus the first audio-only stream offered
pub async fn resolve_video(url: &str) -> Result<Video> {
    let video_id = parse_id(url)?;
    let html = fetch_watch_page(&build_watch_url(&video_id)).await?;
    let ytcfg = extract_ytcfg_from_html(&html)?;

    let player_response =
        fetch_player_response(&video_id, &ytcfg.api_key, ytcfg.visitor_data.as_deref()).await?;

    let title = get_video_title(&player_response);
    let stream = extract_audio_streams(&player_response)?
        .into_iter()
        .next()
        .ok_or(YtMp3Error::AudioNotFound)?;

    Ok(Video::new(video_id, title, stream))
}

/// Download a stream's bytes to `dest`
pub async fn fetch_audio(stream: &AudioStream, dest: &Path) -> Result<()> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(ANDROID_USER_AGENT));
    headers.insert("Range", HeaderValue::from_static("bytes=0-"));

    download_to_file(&stream.url, headers, dest).await
}

/// Enumerate a playlist's title and members from the watch page's
/// playlist panel. Member streams are not resolved here.
pub async fn resolve_playlist(url: &str) -> Result<Playlist> {
    let html = fetch_watch_page(url).await?;
    let yt_data = parse_yt_initial_data(&html)?;

    Ok(Playlist {
        title: extract_playlist_title(&yt_data),
        entries: extract_playlist_entries(&yt_data),
    })
}

/// Extract ytInitialData from HTML
pub fn parse_yt_initial_data(html: &str) -> Result<YtInitialData> {
    let st = "var ytInitialData = ";
    let ed = "};";

    let st_index = html
        .find(st)
        .ok_or_else(|| YtMp3Error::Parse("ytInitialData not found".to_string()))?
        + st.len();

    let remaining_html = &html[st_index..];
    let ed_offset = remaining_html
        .find(ed)
        .ok_or_else(|| YtMp3Error::Parse("ytInitialData end not found".to_string()))?
        + 1; // +1 to include "}"
    let ed_index = st_index + ed_offset;

    let json = &html[st_index..ed_index];

    serde_json::from_str(json)
        .map_err(|e| YtMp3Error::Parse(format!("Failed to parse ytInitialData JSON: {}", e)))
}

/// Extract playlist member entries from ytInitialData, enumeration order
pub fn extract_playlist_entries(yt_data: &YtInitialData) -> Vec<PlaylistEntry> {
    let contents = &yt_data
        .contents
        .two_column_watch_next_results
        .playlist
        .playlist
        .contents;

    let mut entries = Vec::new();
    for content in contents {
        if let PlaylistContent::Video(video_content) = content {
            let renderer = &video_content.playlist_panel_video_renderer;

            let title = match &renderer.title {
                Title::SimpleText { simple_text } => simple_text.clone(),
                Title::Runs { runs } => runs.iter().map(|r| r.text.as_str()).collect::<String>(),
            };

            let url = &renderer
                .navigation_endpoint
                .command_metadata
                .web_command_metadata
                .url;

            entries.push(PlaylistEntry {
                title,
                watch_url: format!("https://www.youtube.com{}", url),
            });
        }
    }

    entries
}

/// Extract playlist title from ytInitialData
pub fn extract_playlist_title(yt_data: &YtInitialData) -> String {
    yt_data
        .contents
        .two_column_watch_next_results
        .playlist
        .playlist
        .title
        .clone()
        .unwrap_or_else(|| "YouTube Playlist".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_ytcfg_from_page_html() {
        let html = r#"<script>ytcfg.set({"INNERTUBE_API_KEY":"AIzaTest123","VISITOR_DATA":"CgtWaXNpdG9y"});</script>"#;
        let ytcfg = extract_ytcfg_from_html(html).unwrap();
        assert_eq!(ytcfg.api_key, "AIzaTest123");
        assert_eq!(ytcfg.visitor_data.as_deref(), Some("CgtWaXNpdG9y"));

        assert!(extract_ytcfg_from_html("<html></html>").is_err());
    }

    #[test]
    fn audio_streams_keep_source_order_and_skip_video() {
        let player_response = json!({
            "streamingData": {
                "adaptiveFormats": [
                    {"itag": 137, "mimeType": "video/mp4; codecs=\"avc1\"", "url": "https://v/1"},
                    {"itag": 251, "mimeType": "audio/webm; codecs=\"opus\"", "url": "https://a/1", "bitrate": 130000},
                    {"itag": 140, "mimeType": "audio/mp4; codecs=\"mp4a\"", "url": "https://a/2", "bitrate": 129000},
                    {"itag": 139, "mimeType": "audio/mp4; codecs=\"mp4a\""}
                ]
            }
        });

        let streams = extract_audio_streams(&player_response).unwrap();
        assert_eq!(streams.len(), 2);
        // First stream offered by the source wins; no bitrate preference
        assert_eq!(streams[0].itag, 251);
        assert_eq!(streams[1].itag, 140);
    }

    #[test]
    fn no_audio_streams_is_an_error() {
        let player_response = json!({"streamingData": {"adaptiveFormats": []}});
        assert!(matches!(
            extract_audio_streams(&player_response),
            Err(YtMp3Error::AudioNotFound)
        ));
    }

    fn playlist_html() -> String {
        let data = json!({
            "contents": {
                "twoColumnWatchNextResults": {
                    "playlist": {
                        "playlist": {
                            "title": "Test Mix",
                            "contents": [
                                {
                                    "playlistPanelVideoRenderer": {
                                        "title": {"simpleText": "First Song"},
                                        "navigationEndpoint": {
                                            "commandMetadata": {"webCommandMetadata": {"url": "/watch?v=aaaaaaaaaaa&list=PLx&index=1"}},
                                            "watchEndpoint": {"videoId": "aaaaaaaaaaa"}
                                        }
                                    }
                                },
                                {"automixPreviewVideoRenderer": {}},
                                {
                                    "playlistPanelVideoRenderer": {
                                        "title": {"runs": [{"text": "Second "}, {"text": "Song"}]},
                                        "navigationEndpoint": {
                                            "commandMetadata": {"webCommandMetadata": {"url": "/watch?v=bbbbbbbbbbb&list=PLx&index=2"}},
                                            "watchEndpoint": {"videoId": "bbbbbbbbbbb"}
                                        }
                                    }
                                }
                            ]
                        }
                    }
                }
            }
        });
        format!("<script>var ytInitialData = {};</script>", data)
    }

    #[test]
    fn parses_playlist_panel_from_watch_page() {
        let yt_data = parse_yt_initial_data(&playlist_html()).unwrap();
        assert_eq!(extract_playlist_title(&yt_data), "Test Mix");

        let entries = extract_playlist_entries(&yt_data);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "First Song");
        assert_eq!(
            entries[0].watch_url,
            "https://www.youtube.com/watch?v=aaaaaaaaaaa&list=PLx&index=1"
        );
        assert_eq!(entries[1].title, "Second Song");
    }

    #[test]
    fn missing_initial_data_is_an_error() {
        assert!(parse_yt_initial_data("<html></html>").is_err());
    }
}
