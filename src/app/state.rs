use crate::api::models::{Playlist, PlaylistSummary, Track};
use crate::catalog::Catalog;
use crate::lyrics::Lyrics;
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Library,
    Favorites,
    Playlists,
    Lyrics,
    Settings,
    Help,
}

impl Screen {
    pub fn next(self) -> Self {
        match self {
            Screen::Home => Screen::Library,
            Screen::Library => Screen::Favorites,
            Screen::Favorites => Screen::Playlists,
            Screen::Playlists => Screen::Lyrics,
            Screen::Lyrics => Screen::Settings,
            Screen::Settings => Screen::Help,
            Screen::Help => Screen::Home,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Screen::Home => Screen::Help,
            Screen::Library => Screen::Home,
            Screen::Favorites => Screen::Library,
            Screen::Playlists => Screen::Favorites,
            Screen::Lyrics => Screen::Playlists,
            Screen::Settings => Screen::Lyrics,
            Screen::Help => Screen::Settings,
        }
    }

    pub fn to_index(self) -> usize {
        match self {
            Screen::Home => 0,
            Screen::Library => 1,
            Screen::Favorites => 2,
            Screen::Playlists => 3,
            Screen::Lyrics => 4,
            Screen::Settings => 5,
            Screen::Help => 6,
        }
    }

    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Screen::Home,
            1 => Screen::Library,
            2 => Screen::Favorites,
            3 => Screen::Playlists,
            4 => Screen::Lyrics,
            5 => Screen::Settings,
            _ => Screen::Help,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Library => "library",
            Screen::Favorites => "favorites",
            Screen::Playlists => "playlists",
            Screen::Lyrics => "lyrics",
            Screen::Settings => "settings",
            Screen::Help => "help",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "library" => Screen::Library,
            "favorites" => Screen::Favorites,
            "playlists" => Screen::Playlists,
            "lyrics" => Screen::Lyrics,
            "settings" => Screen::Settings,
            "help" => Screen::Help,
            _ => Screen::Home,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    Input,
    Results,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

/// Selection + scroll for one list. The list data lives elsewhere; the
/// cursor only needs its length.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCursor {
    pub selected: usize,
    pub scroll_offset: usize,
}

impl ListCursor {
    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self, len: usize) {
        if len != 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(10);
    }

    pub fn page_down(&mut self, len: usize) {
        if len != 0 {
            self.selected = (self.selected + 10).min(len - 1);
        }
    }

    pub fn top(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn bottom(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn update_scroll(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected - visible_height + 1;
        }
    }

    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }
}

/// What a Home row points at: an album (opens) or a single (plays).
#[derive(Debug, Clone, Copy)]
pub enum HomeEntry {
    Album(usize),
    Single(usize),
}

/// Widget rectangles recorded during draw so mouse events can be resolved
/// against what is actually on screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutRects {
    pub progress_bar: Rect,
    pub volume_bar: Rect,
    pub lyrics_area: Rect,
    /// Cue index rendered on the first row of `lyrics_area`.
    pub lyrics_first_cue: usize,
}

pub struct AppState {
    pub should_quit: bool,
    pub tick: u64,

    pub screen: Screen,
    pub sidebar_selected: usize,

    // Catalog (driven by search)
    pub search_query: String,
    pub last_search: Option<String>,
    pub search_focus: SearchFocus,
    pub catalog_tracks: Vec<Track>,
    pub catalog: Catalog,
    pub play_order: Vec<Track>,
    pub catalog_loading: bool,

    // Home: album grid + singles; an opened album overlays the list
    pub home_cursor: ListCursor,
    pub open_album: Option<usize>,
    pub album_cursor: ListCursor,

    // Library (flat track list over the catalog)
    pub library_cursor: ListCursor,

    // Favorites
    pub favorites: Vec<Track>,
    pub favorites_cursor: ListCursor,
    pub favorites_loading: bool,

    // Playlists
    pub playlists: Vec<PlaylistSummary>,
    pub playlists_cursor: ListCursor,
    pub playlists_loading: bool,
    pub open_playlist: Option<Playlist>,
    pub playlist_cursor: ListCursor,
    pub playlist_loading: bool,
    /// Playlist id a detail fetch is in flight for; stale responses for
    /// anything else are dropped.
    pub opening_playlist: Option<i64>,
    /// In-progress name for a new playlist; `Some` routes typing here.
    pub playlist_name_entry: Option<String>,
    /// Armed playlist delete: pressing delete again on this id confirms.
    pub pending_delete: Option<i64>,

    // Lyrics for the current track
    pub lyrics: Option<Lyrics>,
    pub lyrics_track_id: Option<i64>,
    pub lyrics_loading: bool,

    pub layout: LayoutRects,
    pub cache_size_bytes: u64,
    pub toast: Option<Toast>,
    pub status: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            tick: 0,
            screen: Screen::Home,
            sidebar_selected: 0,
            search_query: String::new(),
            last_search: None,
            search_focus: SearchFocus::Results,
            catalog_tracks: Vec::new(),
            catalog: Catalog::default(),
            play_order: Vec::new(),
            catalog_loading: false,
            home_cursor: ListCursor::default(),
            open_album: None,
            album_cursor: ListCursor::default(),
            library_cursor: ListCursor::default(),
            favorites: Vec::new(),
            favorites_cursor: ListCursor::default(),
            favorites_loading: false,
            playlists: Vec::new(),
            playlists_cursor: ListCursor::default(),
            playlists_loading: false,
            open_playlist: None,
            playlist_cursor: ListCursor::default(),
            playlist_loading: false,
            opening_playlist: None,
            playlist_name_entry: None,
            pending_delete: None,
            lyrics: None,
            lyrics_track_id: None,
            lyrics_loading: false,
            layout: LayoutRects::default(),
            cache_size_bytes: 0,
            toast: None,
            status: String::new(),
        }
    }

    /// Rebuild the derived album/singles view and play order from a fresh
    /// track list.
    pub fn set_catalog(&mut self, tracks: Vec<Track>) {
        self.catalog = Catalog::group(&tracks);
        self.play_order = self.catalog.play_order();
        self.catalog_tracks = tracks;
        self.catalog_loading = false;
        self.open_album = None;
        self.home_cursor.clamp(self.home_len());
        self.library_cursor.clamp(self.catalog_tracks.len());
    }

    pub fn home_len(&self) -> usize {
        self.catalog.albums.len() + self.catalog.singles.len()
    }

    pub fn home_entry(&self, index: usize) -> Option<HomeEntry> {
        let albums = self.catalog.albums.len();
        if index < albums {
            Some(HomeEntry::Album(index))
        } else if index - albums < self.catalog.singles.len() {
            Some(HomeEntry::Single(index - albums))
        } else {
            None
        }
    }

    pub fn is_favorite(&self, track_id: i64) -> bool {
        self.favorites.iter().any(|t| t.id == track_id)
    }

    /// The cursor and list length the navigation keys act on right now.
    pub fn active_cursor(&mut self) -> Option<(&mut ListCursor, usize)> {
        match self.screen {
            Screen::Home => {
                if let Some(album_idx) = self.open_album {
                    let len = self
                        .catalog
                        .albums
                        .get(album_idx)
                        .map(|a| a.tracks.len())
                        .unwrap_or(0);
                    Some((&mut self.album_cursor, len))
                } else {
                    let len = self.catalog.albums.len() + self.catalog.singles.len();
                    Some((&mut self.home_cursor, len))
                }
            }
            Screen::Library => {
                let len = self.catalog_tracks.len();
                Some((&mut self.library_cursor, len))
            }
            Screen::Favorites => {
                let len = self.favorites.len();
                Some((&mut self.favorites_cursor, len))
            }
            Screen::Playlists => {
                if let Some(playlist) = &self.open_playlist {
                    let len = playlist.tracks.len();
                    Some((&mut self.playlist_cursor, len))
                } else {
                    let len = self.playlists.len();
                    Some((&mut self.playlists_cursor, len))
                }
            }
            Screen::Lyrics | Screen::Settings | Screen::Help => None,
        }
    }

    /// The track the cursor points at on the current screen, if any.
    pub fn selected_track(&self) -> Option<&Track> {
        match self.screen {
            Screen::Home => {
                if let Some(album_idx) = self.open_album {
                    self.catalog
                        .albums
                        .get(album_idx)?
                        .tracks
                        .get(self.album_cursor.selected)
                } else {
                    match self.home_entry(self.home_cursor.selected)? {
                        HomeEntry::Album(_) => None,
                        HomeEntry::Single(idx) => self.catalog.singles.get(idx),
                    }
                }
            }
            Screen::Library => self.catalog_tracks.get(self.library_cursor.selected),
            Screen::Favorites => self.favorites.get(self.favorites_cursor.selected),
            Screen::Playlists => self
                .open_playlist
                .as_ref()?
                .tracks
                .get(self.playlist_cursor.selected),
            Screen::Lyrics | Screen::Settings | Screen::Help => None,
        }
    }
}
