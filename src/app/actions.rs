use super::state::{Screen, SearchFocus};

#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    NextScreen,
    PrevScreen,
    SetScreen(Screen),
    SidebarUp,
    SidebarDown,

    ListUp,
    ListDown,
    GoTop,
    GoBottom,
    PageUp,
    PageDown,
    /// Enter: play the selected track, or open the selected album/playlist.
    Activate,
    /// Esc/Backspace: close an opened album or playlist.
    Back,
    Refresh,

    // Search (Home screen)
    SetSearchFocus(SearchFocus),
    InputChar(char),
    Backspace,
    ClearInput,
    StartSearch,

    // Favorites / playlists
    ToggleFavorite,
    NewPlaylist,
    SubmitPlaylistName,
    CancelPlaylistName,
    DeleteSelected,
    AddSelectedToPlaylist,

    // Playback
    TogglePause,
    PlayNext,
    PlayPrev,
    ToggleShuffle,
    ToggleRepeat,
    ToggleMute,
    VolumeUp,
    VolumeDown,
    SeekForward,
    SeekBack,

    // Pointer (scrubbing, lyric click-to-seek)
    PointerDown { column: u16, row: u16 },
    PointerDrag { column: u16, row: u16 },
    PointerUp { column: u16, row: u16 },

    // Settings screen
    ClearLyricsCache,
    RescanServer,

    Resize,
}
