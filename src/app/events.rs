use crate::api::models::{Playlist, PlaylistSummary, Track};
use crate::lyrics::Lyrics;

#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Player(PlayerEvent),
    Network(NetworkEvent),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

/// What the audio sink reports back. This channel is the only way sink
/// state reaches the playback controller.
#[derive(Debug, Clone)]
pub enum PlayerEvent {
    Started,
    Paused,
    Position { seconds: f64 },
    Duration { seconds: f64 },
    Ended,
    Error(String),
}

/// Results of async server calls. Responses carry the key they were fetched
/// for, so stale answers can be dropped instead of clobbering newer state.
#[derive(Debug, Clone)]
pub enum NetworkEvent {
    Error(String),
    Notice(String),
    CatalogLoaded { query: String, tracks: Vec<Track> },
    FavoritesLoaded { tracks: Vec<Track> },
    PlaylistsLoaded { playlists: Vec<PlaylistSummary> },
    PlaylistOpened { playlist: Playlist },
    LyricsLoaded { track_id: i64, lyrics: Lyrics },
    LyricsNotFound { track_id: i64 },
}
