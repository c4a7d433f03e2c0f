//! Root layout widget - orchestrates main layout structure
//!
//! ┌──────────┬─────────────────────────────────────────┐
//! │  Menu    │           Main Content                  │
//! │  Home    │   (Home/Library/Favorites/Playlists/    │
//! │  Library │    Lyrics/Settings/Help)                │
//! │  ...     │                                         │
//! ├──────────┴─────────────────────────────────────────┤
//! │                 Player bar                         │
//! └────────────────────────────────────────────────────┘

use crate::app::state::{AppState, Screen};
use crate::config::Config;
use crate::player::PlaybackState;
use crate::tui::theme::get_theme;
use crate::tui::widgets::{TrackListView, help, home, lyrics, player_bar, playlists, settings, sidebar, track_list};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
};

pub fn render(frame: &mut Frame, cfg: &Config, ps: &PlaybackState, state: &mut AppState) {
    let root = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Sidebar + content
            Constraint::Length(6), // Player bar
        ])
        .split(root);

    let top_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Sidebar menu
            Constraint::Min(40),    // Main content
        ])
        .split(rows[0]);

    sidebar::render(frame, state, top_cols[0]);
    render_main_content(frame, cfg, ps, state, top_cols[1]);
    player_bar::render(frame, ps, state, rows[1]);
}

fn render_main_content(
    frame: &mut Frame,
    cfg: &Config,
    ps: &PlaybackState,
    state: &mut AppState,
    area: Rect,
) {
    let theme = get_theme();
    let icons = &theme.icons;

    let title = match state.screen {
        Screen::Home => format!(" {} Home ", icons.home),
        Screen::Library => format!(" {} Library ", icons.library),
        Screen::Favorites => format!(" {} Favorites ", icons.favorite),
        Screen::Playlists => format!(" {} Playlists ", icons.playlist),
        Screen::Lyrics => format!(" {} Lyrics ", icons.lyrics),
        Screen::Settings => format!(" {} Settings ", icons.settings),
        Screen::Help => format!(" {} Keybinds ", icons.help),
    };

    let main = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(title)
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = main.inner(area);
    frame.render_widget(main, area);

    match state.screen {
        Screen::Home => home::render(frame, ps, state, inner),
        Screen::Library => {
            let view = TrackListView {
                tracks: &state.catalog_tracks,
                cursor: &state.library_cursor,
                playing_id: ps.current_track.as_ref().map(|t| t.id),
                favorites: &state.favorites,
                loading: state.catalog_loading,
                tick: state.tick,
                empty: "No tracks. Try a different search, or rescan the server.",
            };
            track_list::render(frame, inner, view);
        }
        Screen::Favorites => {
            let view = TrackListView {
                tracks: &state.favorites,
                cursor: &state.favorites_cursor,
                playing_id: ps.current_track.as_ref().map(|t| t.id),
                favorites: &state.favorites,
                loading: state.favorites_loading,
                tick: state.tick,
                empty: "No favorites yet. Press f on a track to add one.",
            };
            track_list::render(frame, inner, view);
        }
        Screen::Playlists => playlists::render(frame, ps, state, inner),
        Screen::Lyrics => lyrics::render(frame, ps, state, inner),
        Screen::Settings => settings::render(frame, cfg, state, inner),
        Screen::Help => help::render(frame, inner),
    }
}
