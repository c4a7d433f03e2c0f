pub mod actions;
pub mod events;
pub mod state;

use crate::api::ServerClient;
use crate::api::models::Track;
use crate::config::Config;
use crate::input;
use crate::lyrics::Lyrics;
use crate::player::mpv::MpvHandle;
use crate::player::{PlaybackController, ScrubSession, ScrubTarget, SinkCommand};
use crate::storage::Storage;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{Event, NetworkEvent, PlayerEvent};
use state::{AppState, Screen, SearchFocus, Toast};
use tokio::sync::mpsc;

pub struct App {
    cfg: Config,
    config_path: std::path::PathBuf,
    state: AppState,
    client: ServerClient,
    controller: PlaybackController,
    mpv: Option<MpvHandle>,
    /// Live drag over the progress or volume bar. `Some` captures every
    /// pointer move/up until the release consumes it.
    scrub: Option<ScrubSession>,
}

impl App {
    pub fn new(cfg: Config, config_path: std::path::PathBuf) -> anyhow::Result<Self> {
        let client = ServerClient::new(&cfg.server.url)?;
        let controller = PlaybackController::new(cfg.player.volume);
        let _ = Storage::open(&cfg.paths.data_dir.join("cache.sqlite3"))?;

        let mut state = AppState::new();
        if let Some(screen_name) = &cfg.ui.last_screen {
            state.screen = Screen::from_name(screen_name);
            state.sidebar_selected = state.screen.to_index();
        }

        Ok(Self {
            cfg,
            config_path,
            state,
            client,
            controller,
            mpv: None,
            scrub: None,
        })
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone(), self.cfg.input.mouse);
        // No render ticker: we redraw on input, network, and player events.

        let mpv_log = self.cfg.paths.data_dir.join("mpv.log");
        match MpvHandle::spawn(tx.clone(), Some(&mpv_log)).await {
            Ok(h) => {
                self.mpv = Some(h);
            }
            Err(e) => {
                self.state.toast = Some(Toast::error(format!("mpv disabled: {e:#}")));
                self.mpv = None;
            }
        }

        tui::draw(terminal, &self.cfg, &self.controller, &mut self.state)?;

        // Initial data
        self.spawn_load_catalog(&tx);
        self.spawn_load_favorites(&tx);
        self.spawn_load_playlists(&tx);

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx).await;
                    }
                }
                Event::Player(pe) => {
                    self.handle_player(pe, &tx).await;
                }
                Event::Network(ne) => {
                    self.handle_network(ne);
                }
            }

            if self.state.should_quit {
                break;
            }

            self.state.tick = self.state.tick.wrapping_add(1);
            tui::draw(terminal, &self.cfg, &self.controller, &mut self.state)?;
        }

        self.save_state_on_quit();
        Ok(())
    }

    fn save_state_on_quit(&mut self) {
        self.cfg.player.volume = self.controller.state().volume;
        self.cfg.ui.last_screen = Some(self.state.screen.name().to_string());
        let _ = crate::config::save(&self.cfg, Some(&self.config_path));
    }

    async fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::Resize => {}

            Action::NextScreen => {
                self.set_screen(self.state.screen.next(), tx);
            }
            Action::PrevScreen => {
                self.set_screen(self.state.screen.prev(), tx);
            }
            Action::SetScreen(screen) => {
                self.set_screen(screen, tx);
            }
            Action::SidebarUp => {
                let idx = self.state.sidebar_selected.saturating_sub(1);
                self.set_screen(Screen::from_index(idx), tx);
            }
            Action::SidebarDown => {
                let idx = (self.state.sidebar_selected + 1).min(6);
                self.set_screen(Screen::from_index(idx), tx);
            }

            Action::ListUp => {
                if let Some((cursor, _len)) = self.state.active_cursor() {
                    cursor.up();
                    cursor.update_scroll(20);
                }
            }
            Action::ListDown => {
                if let Some((cursor, len)) = self.state.active_cursor() {
                    cursor.down(len);
                    cursor.update_scroll(20);
                }
            }
            Action::GoTop => {
                if let Some((cursor, _len)) = self.state.active_cursor() {
                    cursor.top();
                }
            }
            Action::GoBottom => {
                if let Some((cursor, len)) = self.state.active_cursor() {
                    cursor.bottom(len);
                    cursor.update_scroll(20);
                }
            }
            Action::PageUp => {
                if let Some((cursor, _len)) = self.state.active_cursor() {
                    cursor.page_up();
                    cursor.update_scroll(20);
                }
            }
            Action::PageDown => {
                if let Some((cursor, len)) = self.state.active_cursor() {
                    cursor.page_down(len);
                    cursor.update_scroll(20);
                }
            }

            Action::Activate => self.activate(tx).await,
            Action::Back => {
                self.state.pending_delete = None;
                match self.state.screen {
                    Screen::Home if self.state.open_album.is_some() => {
                        self.state.open_album = None;
                    }
                    Screen::Playlists if self.state.open_playlist.is_some() => {
                        self.state.open_playlist = None;
                        self.state.opening_playlist = None;
                    }
                    _ => {}
                }
            }
            Action::Refresh => self.refresh_current_screen(tx),

            Action::SetSearchFocus(focus) => self.state.search_focus = focus,
            Action::InputChar(c) => {
                if let Some(entry) = &mut self.state.playlist_name_entry {
                    entry.push(c);
                } else {
                    self.state.search_query.push(c);
                }
            }
            Action::Backspace => {
                if let Some(entry) = &mut self.state.playlist_name_entry {
                    entry.pop();
                } else {
                    self.state.search_query.pop();
                }
            }
            Action::ClearInput => {
                if let Some(entry) = &mut self.state.playlist_name_entry {
                    entry.clear();
                } else {
                    self.state.search_query.clear();
                }
            }
            Action::StartSearch => {
                self.state.search_focus = SearchFocus::Results;
                self.spawn_load_catalog(tx);
            }

            Action::ToggleFavorite => {
                let track = self
                    .state
                    .selected_track()
                    .or_else(|| self.controller.current_track())
                    .cloned();
                match track {
                    Some(track) => self.spawn_toggle_favorite(track, tx),
                    None => self.state.status = "Nothing selected".into(),
                }
            }
            Action::NewPlaylist => {
                self.state.playlist_name_entry = Some(String::new());
            }
            Action::SubmitPlaylistName => {
                if let Some(name) = self.state.playlist_name_entry.take() {
                    let name = name.trim().to_string();
                    if !name.is_empty() {
                        self.spawn_create_playlist(name, tx);
                    }
                }
            }
            Action::CancelPlaylistName => {
                self.state.playlist_name_entry = None;
            }
            Action::DeleteSelected => self.delete_selected(tx),
            Action::AddSelectedToPlaylist => {
                let track = self.state.selected_track().cloned();
                let playlist_id = self.state.open_playlist.as_ref().map(|p| p.id);
                match (track, playlist_id) {
                    (Some(track), Some(playlist_id)) => {
                        self.spawn_playlist_add(playlist_id, track.id, tx);
                    }
                    (_, None) => {
                        self.state.status = "Open a playlist first".into();
                    }
                    (None, _) => {
                        self.state.status = "Nothing selected".into();
                    }
                }
            }

            Action::TogglePause => {
                let cmds = self.controller.toggle_play().into_iter().collect();
                self.run_commands(cmds, tx).await;
            }
            Action::PlayNext => {
                let order = self.state.play_order.clone();
                let cmds = self.controller.next(&order);
                self.run_commands(cmds, tx).await;
            }
            Action::PlayPrev => {
                let order = self.state.play_order.clone();
                let cmds = self.controller.prev(&order);
                self.run_commands(cmds, tx).await;
            }
            Action::ToggleShuffle => {
                self.controller.toggle_shuffle();
                self.state.status = if self.controller.state().shuffle {
                    "Shuffle: on".into()
                } else {
                    "Shuffle: off".into()
                };
            }
            Action::ToggleRepeat => {
                self.controller.toggle_repeat();
                self.state.status = if self.controller.state().repeat {
                    "Repeat: on".into()
                } else {
                    "Repeat: off".into()
                };
            }
            Action::ToggleMute => {
                let cmd = self.controller.toggle_mute();
                self.run_commands(vec![cmd], tx).await;
            }
            Action::VolumeUp => {
                let v = self.controller.state().volume + 0.05;
                let cmd = self.controller.set_volume(v);
                self.run_commands(vec![cmd], tx).await;
            }
            Action::VolumeDown => {
                let v = self.controller.state().volume - 0.05;
                let cmd = self.controller.set_volume(v);
                self.run_commands(vec![cmd], tx).await;
            }
            Action::SeekForward => {
                let pos = self.controller.state().current_time + 10.0;
                let cmds = self.controller.seek_to(pos).into_iter().collect();
                self.run_commands(cmds, tx).await;
            }
            Action::SeekBack => {
                let pos = self.controller.state().current_time - 10.0;
                let cmds = self.controller.seek_to(pos).into_iter().collect();
                self.run_commands(cmds, tx).await;
            }

            Action::PointerDown { column, row } => self.pointer_down(column, row, tx).await,
            Action::PointerDrag { column, .. } => {
                let hit = self
                    .scrub
                    .as_ref()
                    .map(|s| (s.target(), s.update(column)));
                if let Some((target, fraction)) = hit {
                    self.apply_fraction(target, fraction, tx).await;
                }
            }
            Action::PointerUp { column, .. } => {
                // Taking the session out releases it; it cannot fire again.
                if let Some(session) = self.scrub.take() {
                    let target = session.target();
                    let fraction = session.finish(column);
                    self.apply_fraction(target, fraction, tx).await;
                }
            }

            Action::ClearLyricsCache => {
                let storage = self.storage_handle();
                match tokio::task::spawn_blocking(move || storage.clear_lyrics()).await {
                    Ok(Ok(())) => {
                        self.state.lyrics = None;
                        self.state.lyrics_track_id = None;
                        self.update_cache_size();
                        self.state.toast = Some(Toast::success("Lyrics cache cleared"));
                    }
                    Ok(Err(e)) => {
                        self.state.toast = Some(Toast::error(format!("Clear failed: {e:#}")));
                    }
                    Err(e) => {
                        self.state.toast = Some(Toast::error(format!("Clear failed: {e}")));
                    }
                }
            }
            Action::RescanServer => {
                let client = self.client.clone();
                let tx = tx.clone();
                self.state.status = "Rescanning library...".into();
                tokio::spawn(async move {
                    let ev = match client.scan().await {
                        Ok(()) => NetworkEvent::Notice("Library rescan started".into()),
                        Err(e) => NetworkEvent::Error(format!("Rescan failed: {e:#}")),
                    };
                    let _ = tx.send(Event::Network(ev)).await;
                });
            }
        }
    }

    fn set_screen(&mut self, screen: Screen, tx: &mpsc::Sender<Event>) {
        self.state.screen = screen;
        self.state.sidebar_selected = screen.to_index();
        self.state.pending_delete = None;
        match screen {
            Screen::Lyrics => self.refresh_lyrics(tx),
            Screen::Settings => self.update_cache_size(),
            Screen::Playlists if self.state.playlists.is_empty() => {
                self.spawn_load_playlists(tx);
            }
            _ => {}
        }
    }

    fn refresh_current_screen(&mut self, tx: &mpsc::Sender<Event>) {
        match self.state.screen {
            Screen::Home | Screen::Library => self.spawn_load_catalog(tx),
            Screen::Favorites => self.spawn_load_favorites(tx),
            Screen::Playlists => match self.state.open_playlist.as_ref().map(|p| p.id) {
                Some(id) => self.spawn_open_playlist(id, tx),
                None => self.spawn_load_playlists(tx),
            },
            Screen::Lyrics => {
                self.state.lyrics_track_id = None;
                self.refresh_lyrics(tx);
            }
            Screen::Settings => self.update_cache_size(),
            Screen::Help => {}
        }
    }

    /// Enter: open the selected album/playlist, or play the selected track.
    async fn activate(&mut self, tx: &mpsc::Sender<Event>) {
        match self.state.screen {
            Screen::Home if self.state.open_album.is_none() => {
                match self.state.home_entry(self.state.home_cursor.selected) {
                    Some(state::HomeEntry::Album(idx)) => {
                        self.state.open_album = Some(idx);
                        self.state.album_cursor.reset();
                    }
                    Some(state::HomeEntry::Single(_)) => self.play_selected(tx).await,
                    None => {}
                }
            }
            Screen::Playlists if self.state.open_playlist.is_none() => {
                let selected = self
                    .state
                    .playlists
                    .get(self.state.playlists_cursor.selected)
                    .map(|p| p.id);
                if let Some(id) = selected {
                    self.spawn_open_playlist(id, tx);
                }
            }
            Screen::Home | Screen::Library | Screen::Favorites | Screen::Playlists => {
                self.play_selected(tx).await;
            }
            Screen::Lyrics | Screen::Settings | Screen::Help => {}
        }
    }

    async fn play_selected(&mut self, tx: &mpsc::Sender<Event>) {
        if let Some(track) = self.state.selected_track().cloned() {
            let cmds = self.controller.play(track);
            self.run_commands(cmds, tx).await;
        }
    }

    fn delete_selected(&mut self, tx: &mpsc::Sender<Event>) {
        if self.state.screen != Screen::Playlists {
            return;
        }
        if let Some(playlist) = &self.state.open_playlist {
            let playlist_id = playlist.id;
            if let Some(track) = playlist.tracks.get(self.state.playlist_cursor.selected) {
                self.spawn_playlist_remove(playlist_id, track.id, tx);
            }
            return;
        }
        let Some(selected) = self
            .state
            .playlists
            .get(self.state.playlists_cursor.selected)
            .map(|p| (p.id, p.name.clone()))
        else {
            return;
        };
        // Deleting a playlist takes a second press on the same entry.
        if self.state.pending_delete == Some(selected.0) {
            self.state.pending_delete = None;
            self.spawn_delete_playlist(selected.0, tx);
        } else {
            self.state.pending_delete = Some(selected.0);
            self.state.status = format!("Press d again to delete \"{}\"", selected.1);
        }
    }

    async fn pointer_down(&mut self, column: u16, row: u16, tx: &mpsc::Sender<Event>) {
        let layout = self.state.layout;
        if rect_contains(layout.progress_bar, column, row) {
            let (session, fraction) =
                ScrubSession::begin(ScrubTarget::Progress, layout.progress_bar, column);
            self.scrub = Some(session);
            self.apply_fraction(ScrubTarget::Progress, fraction, tx).await;
        } else if rect_contains(layout.volume_bar, column, row) {
            let (session, fraction) =
                ScrubSession::begin(ScrubTarget::Volume, layout.volume_bar, column);
            self.scrub = Some(session);
            self.apply_fraction(ScrubTarget::Volume, fraction, tx).await;
        } else if self.state.screen == Screen::Lyrics
            && rect_contains(layout.lyrics_area, column, row)
        {
            // Click a lyric line to jump there.
            let idx = layout.lyrics_first_cue + usize::from(row - layout.lyrics_area.y);
            let time = self
                .state
                .lyrics
                .as_ref()
                .and_then(|l| l.cues.get(idx))
                .map(|cue| cue.time);
            if let Some(time) = time {
                let cmds = self.controller.seek_to(time).into_iter().collect();
                self.run_commands(cmds, tx).await;
            }
        }
    }

    async fn apply_fraction(&mut self, target: ScrubTarget, fraction: f64, tx: &mpsc::Sender<Event>) {
        let cmd = match target {
            ScrubTarget::Progress => self.controller.seek_fraction(fraction),
            ScrubTarget::Volume => Some(self.controller.set_volume(fraction)),
        };
        if let Some(cmd) = cmd {
            self.run_commands(vec![cmd], tx).await;
        }
    }

    /// Dispatch controller output to the sink; a track load also kicks off
    /// the lyrics fetch for the new track.
    async fn run_commands(&mut self, cmds: Vec<SinkCommand>, tx: &mpsc::Sender<Event>) {
        let track_changed = cmds.iter().any(|c| matches!(c, SinkCommand::Load(_)));
        for cmd in cmds {
            self.dispatch(cmd).await;
        }
        if track_changed {
            self.refresh_lyrics(tx);
        }
    }

    async fn dispatch(&mut self, cmd: SinkCommand) {
        let result = match (&self.mpv, cmd) {
            (None, _) => {
                self.state.status = "Audio sink unavailable".into();
                return;
            }
            (Some(mpv), SinkCommand::Load(track)) => {
                let url = self.client.stream_url(track.id);
                mpv.load_url(&url).await
            }
            (Some(mpv), SinkCommand::SetPause(paused)) => mpv.set_pause(paused).await,
            (Some(mpv), SinkCommand::SeekAbsolute(secs)) => mpv.seek_absolute(secs).await,
            (Some(mpv), SinkCommand::SetVolume(volume)) => mpv.set_volume(volume).await,
        };
        if let Err(e) = result {
            // A sink that rejected the command is not playing anything.
            let order = self.state.play_order.clone();
            self.controller
                .apply_sink_event(&PlayerEvent::Error(format!("{e:#}")), &order);
            self.state.toast = Some(Toast::error(format!("Playback failed: {e:#}")));
        }
    }

    async fn handle_player(&mut self, pe: PlayerEvent, tx: &mpsc::Sender<Event>) {
        if let PlayerEvent::Error(msg) = &pe {
            self.state.toast = Some(Toast::error(msg.clone()));
        }
        let order = self.state.play_order.clone();
        let cmds = self.controller.apply_sink_event(&pe, &order);
        self.run_commands(cmds, tx).await;
    }

    fn handle_network(&mut self, ne: NetworkEvent) {
        match ne {
            NetworkEvent::Error(e) => {
                self.state.catalog_loading = false;
                self.state.favorites_loading = false;
                self.state.playlists_loading = false;
                self.state.playlist_loading = false;
                self.state.toast = Some(Toast::error(e.clone()));
                self.state.status = format!("Error: {e} (Ctrl+r to retry)");
            }
            NetworkEvent::Notice(message) => {
                self.state.toast = Some(Toast::success(message));
            }
            NetworkEvent::CatalogLoaded { query, tracks } => {
                if query != self.effective_query() {
                    return; // a newer search is in flight
                }
                self.state.last_search = Some(query);
                self.state.set_catalog(tracks);
                self.state.status = format!(
                    "{} albums, {} singles",
                    self.state.catalog.albums.len(),
                    self.state.catalog.singles.len()
                );
            }
            NetworkEvent::FavoritesLoaded { tracks } => {
                self.state.favorites_loading = false;
                self.state.favorites_cursor.clamp(tracks.len());
                self.state.favorites = tracks;
            }
            NetworkEvent::PlaylistsLoaded { playlists } => {
                self.state.playlists_loading = false;
                self.state.playlists_cursor.clamp(playlists.len());
                self.state.playlists = playlists;
            }
            NetworkEvent::PlaylistOpened { playlist } => {
                let expected = self
                    .state
                    .opening_playlist
                    .or(self.state.open_playlist.as_ref().map(|p| p.id));
                if expected != Some(playlist.id) {
                    return; // user already moved on
                }
                self.state.playlist_loading = false;
                self.state.opening_playlist = None;
                self.state.playlist_cursor.clamp(playlist.tracks.len());
                self.state.open_playlist = Some(playlist);
            }
            NetworkEvent::LyricsLoaded { track_id, lyrics } => {
                if self.state.lyrics_track_id == Some(track_id) {
                    self.state.lyrics = Some(lyrics);
                    self.state.lyrics_loading = false;
                }
            }
            NetworkEvent::LyricsNotFound { track_id } => {
                if self.state.lyrics_track_id == Some(track_id) {
                    self.state.lyrics = None;
                    self.state.lyrics_loading = false;
                }
            }
        }
    }

    fn effective_query(&self) -> String {
        let trimmed = self.state.search_query.trim();
        // The server requires a query; "a" matches nearly everything.
        if trimmed.is_empty() { "a".to_string() } else { trimmed.to_string() }
    }

    fn spawn_load_catalog(&mut self, tx: &mpsc::Sender<Event>) {
        if self.state.catalog_loading {
            return;
        }
        self.state.catalog_loading = true;
        let query = self.effective_query();
        self.state.status = format!("Loading catalog: {query}");

        let client = self.client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let ev = match client.search(&query, 1000).await {
                Ok(tracks) => NetworkEvent::CatalogLoaded { query, tracks },
                Err(e) => NetworkEvent::Error(format!("{e:#}")),
            };
            let _ = tx.send(Event::Network(ev)).await;
        });
    }

    fn spawn_load_favorites(&mut self, tx: &mpsc::Sender<Event>) {
        if self.state.favorites_loading {
            return;
        }
        self.state.favorites_loading = true;

        let client = self.client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let ev = match client.favorites().await {
                Ok(tracks) => NetworkEvent::FavoritesLoaded { tracks },
                Err(e) => NetworkEvent::Error(format!("Favorites: {e:#}")),
            };
            let _ = tx.send(Event::Network(ev)).await;
        });
    }

    fn spawn_load_playlists(&mut self, tx: &mpsc::Sender<Event>) {
        if self.state.playlists_loading {
            return;
        }
        self.state.playlists_loading = true;

        let client = self.client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let ev = match client.playlists().await {
                Ok(playlists) => NetworkEvent::PlaylistsLoaded { playlists },
                Err(e) => NetworkEvent::Error(format!("Playlists: {e:#}")),
            };
            let _ = tx.send(Event::Network(ev)).await;
        });
    }

    fn spawn_open_playlist(&mut self, playlist_id: i64, tx: &mpsc::Sender<Event>) {
        self.state.playlist_loading = true;
        self.state.opening_playlist = Some(playlist_id);

        let client = self.client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let ev = match client.playlist(playlist_id).await {
                Ok(playlist) => NetworkEvent::PlaylistOpened { playlist },
                Err(e) => NetworkEvent::Error(format!("Playlist: {e:#}")),
            };
            let _ = tx.send(Event::Network(ev)).await;
        });
    }

    fn spawn_toggle_favorite(&mut self, track: Track, tx: &mpsc::Sender<Event>) {
        let is_favorite = self.state.is_favorite(track.id);
        let client = self.client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = if is_favorite {
                client.remove_favorite(track.id).await
            } else {
                client.add_favorite(track.id).await
            };
            match result {
                Ok(()) => {
                    let notice = if is_favorite {
                        format!("Removed from favorites: {}", track.title)
                    } else {
                        format!("Added to favorites: {}", track.title)
                    };
                    let _ = tx.send(Event::Network(NetworkEvent::Notice(notice))).await;
                    // Refresh so the hearts match the server.
                    let ev = match client.favorites().await {
                        Ok(tracks) => NetworkEvent::FavoritesLoaded { tracks },
                        Err(e) => NetworkEvent::Error(format!("Favorites: {e:#}")),
                    };
                    let _ = tx.send(Event::Network(ev)).await;
                }
                Err(e) => {
                    let _ = tx
                        .send(Event::Network(NetworkEvent::Error(format!(
                            "Favorite: {e:#}"
                        ))))
                        .await;
                }
            }
        });
    }

    fn spawn_create_playlist(&mut self, name: String, tx: &mpsc::Sender<Event>) {
        let client = self.client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            match client.create_playlist(&name).await {
                Ok(()) => {
                    let _ = tx
                        .send(Event::Network(NetworkEvent::Notice(format!(
                            "Created playlist \"{name}\""
                        ))))
                        .await;
                    let ev = match client.playlists().await {
                        Ok(playlists) => NetworkEvent::PlaylistsLoaded { playlists },
                        Err(e) => NetworkEvent::Error(format!("Playlists: {e:#}")),
                    };
                    let _ = tx.send(Event::Network(ev)).await;
                }
                Err(e) => {
                    let _ = tx
                        .send(Event::Network(NetworkEvent::Error(format!(
                            "Create playlist: {e:#}"
                        ))))
                        .await;
                }
            }
        });
    }

    fn spawn_delete_playlist(&mut self, playlist_id: i64, tx: &mpsc::Sender<Event>) {
        let client = self.client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            match client.delete_playlist(playlist_id).await {
                Ok(()) => {
                    let _ = tx
                        .send(Event::Network(NetworkEvent::Notice("Playlist deleted".into())))
                        .await;
                    let ev = match client.playlists().await {
                        Ok(playlists) => NetworkEvent::PlaylistsLoaded { playlists },
                        Err(e) => NetworkEvent::Error(format!("Playlists: {e:#}")),
                    };
                    let _ = tx.send(Event::Network(ev)).await;
                }
                Err(e) => {
                    let _ = tx
                        .send(Event::Network(NetworkEvent::Error(format!(
                            "Delete playlist: {e:#}"
                        ))))
                        .await;
                }
            }
        });
    }

    fn spawn_playlist_add(&mut self, playlist_id: i64, track_id: i64, tx: &mpsc::Sender<Event>) {
        let client = self.client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = client.add_playlist_track(playlist_id, track_id).await;
            Self::finish_playlist_mutation(client, playlist_id, result, "Track added", tx).await;
        });
    }

    fn spawn_playlist_remove(&mut self, playlist_id: i64, track_id: i64, tx: &mpsc::Sender<Event>) {
        let client = self.client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = client.remove_playlist_track(playlist_id, track_id).await;
            Self::finish_playlist_mutation(client, playlist_id, result, "Track removed", tx).await;
        });
    }

    async fn finish_playlist_mutation(
        client: ServerClient,
        playlist_id: i64,
        result: anyhow::Result<()>,
        notice: &str,
        tx: mpsc::Sender<Event>,
    ) {
        match result {
            Ok(()) => {
                let _ = tx
                    .send(Event::Network(NetworkEvent::Notice(notice.to_string())))
                    .await;
                let ev = match client.playlist(playlist_id).await {
                    Ok(playlist) => NetworkEvent::PlaylistOpened { playlist },
                    Err(e) => NetworkEvent::Error(format!("Playlist: {e:#}")),
                };
                let _ = tx.send(Event::Network(ev)).await;
            }
            Err(e) => {
                let _ = tx
                    .send(Event::Network(NetworkEvent::Error(format!(
                        "Playlist update: {e:#}"
                    ))))
                    .await;
            }
        }
    }

    /// Fetch lyrics for the current track when the lyrics screen is up.
    /// Cache first, then the server; the result is keyed by track id so a
    /// response for a track we already left is ignored.
    fn refresh_lyrics(&mut self, tx: &mpsc::Sender<Event>) {
        if self.state.screen != Screen::Lyrics {
            return;
        }
        let Some(track) = self.controller.current_track().cloned() else {
            return;
        };
        if self.state.lyrics_track_id == Some(track.id) {
            return;
        }

        self.state.lyrics = None;
        self.state.lyrics_loading = true;
        self.state.lyrics_track_id = Some(track.id);

        let client = self.client.clone();
        let storage = self.storage_handle();
        let tx = tx.clone();

        tokio::spawn(async move {
            let track_id = track.id;

            if let Ok(Ok(Some((synced, plain)))) = tokio::task::spawn_blocking({
                let storage = storage.clone();
                move || storage.get_lyrics(track_id)
            })
            .await
            {
                let lyrics = Lyrics::from_parts(synced.as_deref(), plain.as_deref());
                let ev = if lyrics.is_empty() {
                    NetworkEvent::LyricsNotFound { track_id }
                } else {
                    NetworkEvent::LyricsLoaded { track_id, lyrics }
                };
                let _ = tx.send(Event::Network(ev)).await;
                return;
            }

            let fetched = client
                .lyrics(
                    &track.artist,
                    &track.title,
                    track.duration,
                    track.album.as_deref(),
                )
                .await;

            let ev = match fetched {
                Ok(Some(res)) => {
                    let now = unix_now();
                    let synced = res.synced_lyrics.clone();
                    let plain = res.plain_lyrics.clone();
                    let _ = tokio::task::spawn_blocking({
                        let storage = storage.clone();
                        move || {
                            storage.cache_lyrics(track_id, synced.as_deref(), plain.as_deref(), now)
                        }
                    })
                    .await;

                    let lyrics = Lyrics::from_parts(
                        res.synced_lyrics.as_deref(),
                        res.plain_lyrics.as_deref(),
                    );
                    if lyrics.is_empty() {
                        NetworkEvent::LyricsNotFound { track_id }
                    } else {
                        NetworkEvent::LyricsLoaded { track_id, lyrics }
                    }
                }
                Ok(None) => {
                    let now = unix_now();
                    let _ = tokio::task::spawn_blocking({
                        let storage = storage.clone();
                        move || storage.cache_lyrics(track_id, None, None, now)
                    })
                    .await;
                    NetworkEvent::LyricsNotFound { track_id }
                }
                // Lyrics are decoration; a failed lookup is just "none".
                Err(_) => NetworkEvent::LyricsNotFound { track_id },
            };
            let _ = tx.send(Event::Network(ev)).await;
        });
    }

    fn update_cache_size(&mut self) {
        let cache_db = self.cfg.paths.data_dir.join("cache.sqlite3");
        self.state.cache_size_bytes = std::fs::metadata(&cache_db).map(|m| m.len()).unwrap_or(0);
    }

    fn storage_handle(&self) -> StorageHandle {
        StorageHandle {
            path: self.cfg.paths.data_dir.join("cache.sqlite3"),
        }
    }
}

fn rect_contains(rect: ratatui::layout::Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

// rusqlite connections don't cross awaits; open per operation inside
// spawn_blocking instead of pooling.
#[derive(Clone)]
struct StorageHandle {
    path: std::path::PathBuf,
}

impl StorageHandle {
    fn open(&self) -> anyhow::Result<Storage> {
        Storage::open(&self.path)
    }

    fn get_lyrics(&self, track_id: i64) -> anyhow::Result<Option<(Option<String>, Option<String>)>> {
        self.open()?.get_lyrics(track_id)
    }

    fn cache_lyrics(
        &self,
        track_id: i64,
        synced: Option<&str>,
        plain: Option<&str>,
        now_unix: i64,
    ) -> anyhow::Result<()> {
        self.open()?.cache_lyrics(track_id, synced, plain, now_unix)
    }

    fn clear_lyrics(&self) -> anyhow::Result<()> {
        self.open()?.clear_lyrics()
    }
}
