use serde::{Deserialize, Serialize};

/// A track as the server reports it. Favorites responses use `album_title`
/// where search uses `album`, hence the alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default, alias = "album_title")]
    pub album: Option<String>,
    #[serde(default)]
    pub album_id: Option<i64>,
    #[serde(default)]
    pub has_cover: bool,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub added_at: Option<String>,
}

impl Track {
    pub fn artist_or_unknown(&self) -> &str {
        if self.artist.is_empty() {
            "Unknown Artist"
        } else {
            &self.artist
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub track_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

/// Lyrics lookup result, LRCLIB-shaped (the server proxies lrclib.net).
#[derive(Debug, Clone, Deserialize)]
pub struct LyricsResponse {
    #[serde(rename = "syncedLyrics")]
    pub synced_lyrics: Option<String>,
    #[serde(rename = "plainLyrics")]
    pub plain_lyrics: Option<String>,
}
