//! Playlists screen: the playlist list, an opened playlist's tracks, and
//! the inline new-playlist name prompt.

use crate::app::state::AppState;
use crate::player::PlaybackState;
use crate::tui::theme::{LoadingSpinner, get_theme};
use crate::tui::widgets::{TrackListView, track_list, truncate_str};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

pub fn render(frame: &mut Frame, ps: &PlaybackState, state: &mut AppState, area: Rect) {
    let theme = get_theme();

    if let Some(entry) = &state.playlist_name_entry {
        let sub = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(theme.border_set())
            .border_style(Style::default().fg(theme.palette.accent))
            .title(" New playlist name (Enter to create, Esc to cancel) ");
        let inner = block.inner(sub[0]);
        frame.render_widget(block, sub[0]);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(entry.clone(), Style::default().fg(theme.palette.fg_primary)),
                Span::styled("█", Style::default().fg(theme.palette.accent)),
            ])),
            inner,
        );

        render_body(frame, ps, state, sub[1]);
        return;
    }

    render_body(frame, ps, state, area);
}

fn render_body(frame: &mut Frame, ps: &PlaybackState, state: &AppState, area: Rect) {
    if state.open_playlist.is_some() {
        render_open_playlist(frame, ps, state, area);
    } else {
        render_playlist_list(frame, state, area);
    }
}

fn render_playlist_list(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    if state.playlists_loading {
        let spinner = LoadingSpinner::frame(state.tick);
        let loading = Paragraph::new(Line::from(format!("{spinner} Loading playlists...")))
            .style(Style::default().fg(theme.palette.fg_secondary));
        frame.render_widget(loading, area);
        return;
    }

    if state.playlists.is_empty() {
        let empty = Paragraph::new(Line::from("No playlists. Press n to create one."))
            .style(Style::default().fg(theme.palette.fg_secondary));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    let scroll_offset = state.playlists_cursor.scroll_offset;
    let max_width = area.width.saturating_sub(6) as usize;

    let items: Vec<ListItem> = state
        .playlists
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|(i, playlist)| {
            let is_selected = i == state.playlists_cursor.selected;
            let armed = state.pending_delete == Some(playlist.id);

            let style = if armed {
                Style::default()
                    .fg(theme.palette.error)
                    .add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default()
                    .fg(theme.palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_primary)
            };

            let count = playlist
                .track_count
                .map(|c| format!(" ({c} tracks)"))
                .unwrap_or_default();
            let label = format!("{}{}", playlist.name, count);

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", icons.playlist), style),
                Span::styled(truncate_str(&label, max_width), style),
            ]))
        })
        .collect();

    let adjusted_selected = state.playlists_cursor.selected.saturating_sub(scroll_offset);
    let mut list_state = ListState::default();
    list_state.select(Some(adjusted_selected));

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(theme.palette.bg_primary)
                .bg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("\u{f054} ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_open_playlist(frame: &mut Frame, ps: &PlaybackState, state: &AppState, area: Rect) {
    let theme = get_theme();
    let Some(playlist) = &state.open_playlist else {
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    let header = Line::from(vec![
        Span::styled("← ", Style::default().fg(theme.palette.fg_secondary)),
        Span::styled("Esc", Style::default().fg(theme.palette.accent)),
        Span::raw("  "),
        Span::styled(
            format!("\"{}\" ({} tracks)", playlist.name, playlist.tracks.len()),
            Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  d removes the selected track",
            Style::default().fg(theme.palette.fg_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), layout[0]);

    if state.playlist_loading {
        let spinner = LoadingSpinner::frame(state.tick);
        let loading = Paragraph::new(Line::from(format!("{spinner} Loading tracks...")))
            .style(Style::default().fg(theme.palette.fg_secondary));
        frame.render_widget(loading, layout[1]);
        return;
    }

    let view = TrackListView {
        tracks: &playlist.tracks,
        cursor: &state.playlist_cursor,
        playing_id: ps.current_track.as_ref().map(|t| t.id),
        favorites: &state.favorites,
        loading: false,
        tick: state.tick,
        empty: "This playlist is empty. Press a on a Library track to add it here.",
    };
    track_list::render(frame, layout[1], view);
}
