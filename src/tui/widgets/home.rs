//! Home screen: search box over the album grid + singles, with an opened
//! album overlaying the list.

use crate::app::state::{AppState, HomeEntry, SearchFocus};
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
    let sub = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_search_box(frame, state, sub[0]);

    if let Some(album_idx) = state.open_album {
        render_album_detail(frame, ps, state, album_idx, sub[1]);
    } else {
        render_entries(frame, ps, state, sub[1]);
    }
}

fn render_search_box(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let focused = state.search_focus == SearchFocus::Input;

    let border_color = if focused {
        theme.palette.accent
    } else {
        theme.palette.border
    };
    let title = match &state.last_search {
        Some(q) if !q.is_empty() && q != "a" => format!(" Search (/) — showing \"{q}\" "),
        _ => " Search (/) ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(border_color))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![Span::styled(
        state.search_query.clone(),
        Style::default().fg(theme.palette.fg_primary),
    )];
    if focused {
        spans.push(Span::styled(
            "█",
            Style::default().fg(theme.palette.accent),
        ));
    } else if state.search_query.is_empty() {
        spans = vec![Span::styled(
            "type to filter the catalog",
            Style::default().fg(theme.palette.fg_secondary),
        )];
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn render_entries(frame: &mut Frame, ps: &PlaybackState, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    if state.catalog_loading {
        let spinner = LoadingSpinner::frame(state.tick);
        let loading = Paragraph::new(Line::from(format!("{spinner} Loading catalog...")))
            .style(Style::default().fg(theme.palette.fg_secondary));
        frame.render_widget(loading, area);
        return;
    }

    let len = state.home_len();
    if len == 0 {
        let empty = Paragraph::new(Line::from("Nothing here. Is the server reachable?"))
            .style(Style::default().fg(theme.palette.fg_secondary));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    let scroll_offset = state.home_cursor.scroll_offset;
    let max_width = area.width.saturating_sub(6) as usize;
    let playing_id = ps.current_track.as_ref().map(|t| t.id);

    let items: Vec<ListItem> = (0..len)
        .skip(scroll_offset)
        .take(visible_height)
        .map(|i| {
            let is_selected = i == state.home_cursor.selected;
            let base = if is_selected {
                Style::default()
                    .fg(theme.palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_primary)
            };

            let line = match state.home_entry(i) {
                Some(HomeEntry::Album(idx)) => {
                    let album = &state.catalog.albums[idx];
                    let label = format!(
                        "{} — {}  [{} tracks]",
                        album.title,
                        album.artist,
                        album.tracks.len()
                    );
                    Line::from(vec![
                        Span::styled(format!("{} ", icons.album), base),
                        Span::styled(truncate_str(&label, max_width), base),
                    ])
                }
                Some(HomeEntry::Single(idx)) => {
                    let track = &state.catalog.singles[idx];
                    let is_playing = playing_id == Some(track.id);
                    let style = if is_playing {
                        Style::default()
                            .fg(theme.palette.playing)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        base
                    };
                    let icon = if is_playing { icons.play } else { icons.music };
                    let label = format!("{} — {}", track.title, track.artist_or_unknown());
                    Line::from(vec![
                        Span::styled(format!("{icon} "), style),
                        Span::styled(truncate_str(&label, max_width), style),
                    ])
                }
                None => Line::default(),
            };
            ListItem::new(line)
        })
        .collect();

    let adjusted_selected = state.home_cursor.selected.saturating_sub(scroll_offset);
    let mut list_state = ListState::default();
    list_state.select(Some(adjusted_selected));

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(theme.palette.bg_primary)
                .bg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_album_detail(
    frame: &mut Frame,
    ps: &PlaybackState,
    state: &AppState,
    album_idx: usize,
    area: Rect,
) {
    let theme = get_theme();
    let Some(album) = state.catalog.albums.get(album_idx) else {
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
            format!("{} — {} ({} tracks)", album.title, album.artist, album.tracks.len()),
            Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), layout[0]);

    let view = TrackListView {
        tracks: &album.tracks,
        cursor: &state.album_cursor,
        playing_id: ps.current_track.as_ref().map(|t| t.id),
        favorites: &state.favorites,
        loading: false,
        tick: state.tick,
        empty: "This album is empty",
    };
    track_list::render(frame, layout[1], view);
}
