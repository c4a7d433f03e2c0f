//! HTTP client for the music server's REST API.
//!
//! The server exposes the catalog under `/api/v1/music/*`: full-text search,
//! byte-range streaming, cover art, favorites, playlists, and a lyrics proxy
//! (LRCLIB-shaped). All calls are plain JSON over reqwest.

use crate::api::models::{LyricsResponse, Playlist, PlaylistSummary, Track};
use anyhow::Context;

#[derive(Debug, Clone)]
pub struct ServerClient {
    http: reqwest::Client,
    base_url: String,
}

impl ServerClient {
    const USER_AGENT: &'static str = "Nocturne/0.1.0 (terminal client)";

    /// Create a client for `server_url` (e.g. `http://localhost:8000`).
    pub fn new(server_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(Self::USER_AGENT)
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("build http client")?;

        Ok(Self {
            http,
            base_url: format!("{}/api/v1", server_url.trim_end_matches('/')),
        })
    }

    /// Stream endpoint for a track, handed to the audio sink as-is.
    pub fn stream_url(&self, track_id: i64) -> String {
        format!("{}/music/stream/{}", self.base_url, track_id)
    }

    pub async fn search(&self, query: &str, limit: u32) -> anyhow::Result<Vec<Track>> {
        let url = format!(
            "{}/music/search?q={}&limit={}",
            self.base_url,
            urlencoding::encode(query),
            limit
        );
        self.get_json(&url).await.context("search tracks")
    }

    pub async fn favorites(&self) -> anyhow::Result<Vec<Track>> {
        let url = format!("{}/music/favorites", self.base_url);
        self.get_json(&url).await.context("fetch favorites")
    }

    pub async fn add_favorite(&self, track_id: i64) -> anyhow::Result<()> {
        let url = format!("{}/music/favorites/{}", self.base_url, track_id);
        self.expect_success(self.http.post(&url)).await
    }

    pub async fn remove_favorite(&self, track_id: i64) -> anyhow::Result<()> {
        let url = format!("{}/music/favorites/{}", self.base_url, track_id);
        self.expect_success(self.http.delete(&url)).await
    }

    pub async fn playlists(&self) -> anyhow::Result<Vec<PlaylistSummary>> {
        let url = format!("{}/music/playlists", self.base_url);
        self.get_json(&url).await.context("fetch playlists")
    }

    pub async fn playlist(&self, playlist_id: i64) -> anyhow::Result<Playlist> {
        let url = format!("{}/music/playlists/{}", self.base_url, playlist_id);
        self.get_json(&url).await.context("fetch playlist")
    }

    pub async fn create_playlist(&self, name: &str) -> anyhow::Result<()> {
        let url = format!(
            "{}/music/playlists?name={}",
            self.base_url,
            urlencoding::encode(name)
        );
        self.expect_success(self.http.post(&url)).await
    }

    pub async fn delete_playlist(&self, playlist_id: i64) -> anyhow::Result<()> {
        let url = format!("{}/music/playlists/{}", self.base_url, playlist_id);
        self.expect_success(self.http.delete(&url)).await
    }

    pub async fn add_playlist_track(&self, playlist_id: i64, track_id: i64) -> anyhow::Result<()> {
        let url = format!(
            "{}/music/playlists/{}/tracks/{}",
            self.base_url, playlist_id, track_id
        );
        self.expect_success(self.http.post(&url)).await
    }

    pub async fn remove_playlist_track(
        &self,
        playlist_id: i64,
        track_id: i64,
    ) -> anyhow::Result<()> {
        let url = format!(
            "{}/music/playlists/{}/tracks/{}",
            self.base_url, playlist_id, track_id
        );
        self.expect_success(self.http.delete(&url)).await
    }

    /// Look up lyrics for a track. `Ok(None)` when the server has none.
    pub async fn lyrics(
        &self,
        artist: &str,
        title: &str,
        duration: Option<f64>,
        album: Option<&str>,
    ) -> anyhow::Result<Option<LyricsResponse>> {
        let mut url = format!(
            "{}/music/lyrics?artist_name={}&track_name={}",
            self.base_url,
            urlencoding::encode(artist),
            urlencoding::encode(title)
        );
        if let Some(d) = duration {
            url.push_str(&format!("&duration={d}"));
        }
        if let Some(a) = album {
            url.push_str(&format!("&album_name={}", urlencoding::encode(a)));
        }

        let response = self.http.get(&url).send().await.context("lyrics request")?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            anyhow::bail!("lyrics lookup failed: {}", response.status());
        }
        let lyrics: LyricsResponse = response.json().await.context("parse lyrics json")?;
        Ok(Some(lyrics))
    }

    /// Ask the server to rescan its music directory.
    pub async fn scan(&self) -> anyhow::Result<()> {
        let url = format!("{}/music/scan", self.base_url);
        self.expect_success(self.http.post(&url)).await
    }

    /// Point the server at a different music directory.
    pub async fn set_music_directory(&self, directory: &str) -> anyhow::Result<()> {
        let url = format!("{}/settings", self.base_url);
        let body = serde_json::json!({ "music_directory": directory });
        self.expect_success(self.http.put(&url).json(&body)).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> anyhow::Result<T> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .context("send request")?
            .error_for_status()
            .context("http status")?;
        response.json().await.context("parse json")
    }

    async fn expect_success(&self, req: reqwest::RequestBuilder) -> anyhow::Result<()> {
        req.send()
            .await
            .context("send request")?
            .error_for_status()
            .context("http status")?;
        Ok(())
    }
}
