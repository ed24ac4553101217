use serde::{Deserialize, Serialize};

/// Innertube player request body (Android client)
#[derive(Debug, Serialize)]
pub struct InnertubeRequest {
    #[serde(rename = "videoId")]
    pub video_id: String,
    pub context: InnertubeContext,
    #[serde(rename = "playbackContext")]
    pub playback_context: PlaybackContext,
    #[serde(rename = "contentCheckOk")]
    pub content_check_ok: bool,
    #[serde(rename = "racyCheckOk")]
    pub racy_check_ok: bool,
}

#[derive(Debug, Serialize)]
pub struct InnertubeContext {
    pub client: ClientInfo,
}

#[derive(Debug, Serialize)]
pub struct ClientInfo {
    #[serde(rename = "clientName")]
    pub client_name: String,
    #[serde(rename = "clientVersion")]
    pub client_version: String,
    #[serde(rename = "userAgent")]
    pub user_agent: String,
    #[serde(rename = "osName")]
    pub os_name: String,
    #[serde(rename = "osVersion")]
    pub os_version: String,
    pub hl: String,
    #[serde(rename = "timeZone")]
    pub time_zone: String,
    #[serde(rename = "utcOffsetMinutes")]
    pub utc_offset_minutes: i32,
}

#[derive(Debug, Serialize)]
pub struct PlaybackContext {
    #[serde(rename = "contentPlaybackContext")]
    pub content_playback_context: ContentPlaybackContext,
}

#[derive(Debug, Serialize)]
pub struct ContentPlaybackContext {
    #[serde(rename = "html5Preference")]
    pub html5_preference: String,
}

/// ytInitialData subtree carrying the watch-page playlist panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YtInitialData {
    pub contents: Contents,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contents {
    #[serde(rename = "twoColumnWatchNextResults")]
    pub two_column_watch_next_results: TwoColumnWatchNextResults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwoColumnWatchNextResults {
    #[serde(rename = "playlist")]
    pub playlist: PlaylistPanel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistPanel {
    #[serde(rename = "playlist")]
    pub playlist: PlaylistData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistData {
    pub title: Option<String>,
    pub contents: Vec<PlaylistContent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaylistContent {
    Video(PlaylistVideoContent),
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistVideoContent {
    #[serde(rename = "playlistPanelVideoRenderer")]
    pub playlist_panel_video_renderer: PlaylistPanelVideoRenderer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistPanelVideoRenderer {
    pub title: Title,
    #[serde(rename = "navigationEndpoint")]
    pub navigation_endpoint: NavigationEndpoint,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Title {
    SimpleText {
        #[serde(rename = "simpleText")]
        simple_text: String,
    },
    Runs {
        runs: Vec<Run>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationEndpoint {
    #[serde(rename = "commandMetadata")]
    pub command_metadata: CommandMetadata,
    #[serde(rename = "watchEndpoint")]
    pub watch_endpoint: WatchEndpoint,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandMetadata {
    #[serde(rename = "webCommandMetadata")]
    pub web_command_metadata: WebCommandMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebCommandMetadata {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchEndpoint {
    #[serde(rename = "videoId")]
    pub video_id: String,
}
