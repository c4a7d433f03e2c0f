use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, Screen, SearchFocus};
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                match event::read() {
                    Ok(CtEvent::Key(k)) => {
                        if k.kind == KeyEventKind::Press
                            && tx.blocking_send(Event::Input(InputEvent::Key(k))).is_err()
                        {
                            break;
                        }
                    }
                    Ok(CtEvent::Mouse(m)) => {
                        if mouse_enabled
                            && tx.blocking_send(Event::Input(InputEvent::Mouse(m))).is_err()
                        {
                            break;
                        }
                    }
                    Ok(CtEvent::Resize(_, _)) => {
                        if tx.blocking_send(Event::Input(InputEvent::Resize)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(_) => {}
                }
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Action::PointerDown {
                column: m.column,
                row: m.row,
            }),
            MouseEventKind::Drag(MouseButton::Left) => Some(Action::PointerDrag {
                column: m.column,
                row: m.row,
            }),
            MouseEventKind::Up(MouseButton::Left) => Some(Action::PointerUp {
                column: m.column,
                row: m.row,
            }),
            MouseEventKind::ScrollUp => Some(Action::ListUp),
            MouseEventKind::ScrollDown => Some(Action::ListDown),
            _ => None,
        },
        InputEvent::Key(k) => map_key(state, k),
    }
}

fn map_key(state: &AppState, k: crossterm::event::KeyEvent) -> Option<Action> {
    // A playlist name being typed captures everything first.
    if state.playlist_name_entry.is_some() {
        return handle_name_entry(k);
    }

    if state.screen == Screen::Home && state.search_focus == SearchFocus::Input {
        return handle_search_input(k);
    }

    match state.screen {
        Screen::Home => handle_home(state, k),
        Screen::Playlists => handle_playlists(state, k),
        Screen::Settings => handle_settings(k),
        Screen::Library | Screen::Favorites => {
            if k.code == KeyCode::Char('a') {
                return Some(Action::AddSelectedToPlaylist);
            }
            handle_common(state, k)
        }
        _ => handle_common(state, k),
    }
}

fn handle_name_entry(k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Enter => Some(Action::SubmitPlaylistName),
        KeyCode::Esc => Some(Action::CancelPlaylistName),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::ClearInput)
        }
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        _ => None,
    }
}

fn handle_search_input(k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc | KeyCode::Down => Some(Action::SetSearchFocus(SearchFocus::Results)),
        KeyCode::Enter => Some(Action::StartSearch),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Tab => Some(Action::NextScreen),
        KeyCode::BackTab => Some(Action::PrevScreen),
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::ClearInput)
        }
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        _ => None,
    }
}

fn handle_home(state: &AppState, k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('/') | KeyCode::Char('i') => Some(Action::SetSearchFocus(SearchFocus::Input)),
        KeyCode::Char('a') => Some(Action::AddSelectedToPlaylist),
        _ => handle_common(state, k),
    }
}

fn handle_playlists(state: &AppState, k: crossterm::event::KeyEvent) -> Option<Action> {
    let in_playlist = state.open_playlist.is_some();
    match k.code {
        KeyCode::Char('n') if !in_playlist => Some(Action::NewPlaylist),
        KeyCode::Char('d') if !k.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::DeleteSelected)
        }
        KeyCode::Delete => Some(Action::DeleteSelected),
        _ => handle_common(state, k),
    }
}

fn handle_settings(k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') => Some(Action::ClearLyricsCache),
        KeyCode::Char('S') => Some(Action::RescanServer),
        KeyCode::Tab => Some(Action::NextScreen),
        KeyCode::BackTab => Some(Action::PrevScreen),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::SidebarUp),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::SidebarDown),
        KeyCode::Char(' ') => Some(Action::TogglePause),
        KeyCode::Char('=') | KeyCode::Char('+') => Some(Action::VolumeUp),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(Action::VolumeDown),
        KeyCode::Char('r') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Refresh),
        KeyCode::F(5) => Some(Action::Refresh),
        KeyCode::Char(c @ '1'..='7') => Some(Action::SetScreen(screen_digit(c))),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::SetScreen(Screen::Help)),
        _ => None,
    }
}

fn handle_common(state: &AppState, k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Backspace => {
            let detail_open = (state.screen == Screen::Home && state.open_album.is_some())
                || (state.screen == Screen::Playlists && state.open_playlist.is_some());
            if detail_open {
                Some(Action::Back)
            } else if k.code == KeyCode::Esc {
                Some(Action::Quit)
            } else {
                None
            }
        }

        // Navigation - vim style
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ListUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ListDown),
        KeyCode::Char('g') => Some(Action::GoTop),
        KeyCode::Char('G') => Some(Action::GoBottom),
        KeyCode::Char('d') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::PageDown),
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::PageUp),

        // Sidebar navigation
        KeyCode::Left | KeyCode::Char('h') => Some(Action::SidebarUp),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::SidebarDown),

        // Screen switching
        KeyCode::Tab => Some(Action::NextScreen),
        KeyCode::BackTab => Some(Action::PrevScreen),
        KeyCode::Char(c @ '1'..='7') => Some(Action::SetScreen(screen_digit(c))),
        KeyCode::Char('L') => Some(Action::SetScreen(Screen::Lyrics)),

        // Playback
        KeyCode::Char(' ') => Some(Action::TogglePause),
        KeyCode::Char('n') => Some(Action::PlayNext),
        KeyCode::Char('p') => Some(Action::PlayPrev),
        KeyCode::Char('s') => Some(Action::ToggleShuffle),
        KeyCode::Char('R') => Some(Action::ToggleRepeat),
        KeyCode::Char('m') => Some(Action::ToggleMute),
        KeyCode::Char('=') | KeyCode::Char('+') => Some(Action::VolumeUp),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(Action::VolumeDown),
        KeyCode::Char(']') => Some(Action::SeekForward),
        KeyCode::Char('[') => Some(Action::SeekBack),
        KeyCode::Char('f') => Some(Action::ToggleFavorite),

        // Actions
        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Char('r') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Refresh),
        KeyCode::F(5) => Some(Action::Refresh),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::SetScreen(Screen::Help)),

        _ => None,
    }
}

fn screen_digit(c: char) -> Screen {
    match c {
        '1' => Screen::Home,
        '2' => Screen::Library,
        '3' => Screen::Favorites,
        '4' => Screen::Playlists,
        '5' => Screen::Lyrics,
        '6' => Screen::Settings,
        _ => Screen::Help,
    }
}
