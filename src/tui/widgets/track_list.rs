//! Generic track list used by Library, Favorites, album and playlist views.

use crate::api::models::Track;
use crate::app::state::ListCursor;
use crate::tui::theme::{LoadingSpinner, get_theme};
use crate::tui::widgets::{fmt_time, truncate_str};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

pub struct TrackListView<'a> {
    pub tracks: &'a [Track],
    pub cursor: &'a ListCursor,
    pub playing_id: Option<i64>,
    pub favorites: &'a [Track],
    pub loading: bool,
    pub tick: u64,
    pub empty: &'a str,
}

pub fn render(frame: &mut Frame, area: Rect, view: TrackListView) {
    let theme = get_theme();
    let icons = &theme.icons;

    if view.loading {
        let spinner = LoadingSpinner::frame(view.tick);
        let loading = Paragraph::new(Line::from(format!("{spinner} Loading...")))
            .style(Style::default().fg(theme.palette.fg_secondary));
        frame.render_widget(loading, area);
        return;
    }

    if view.tracks.is_empty() {
        let empty = Paragraph::new(Line::from(view.empty))
            .style(Style::default().fg(theme.palette.fg_secondary));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    let scroll_offset = view.cursor.scroll_offset;
    let max_width = area.width.saturating_sub(12) as usize;

    let items: Vec<ListItem> = view
        .tracks
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|(i, track)| {
            let is_selected = i == view.cursor.selected;
            let is_playing = view.playing_id == Some(track.id);
            let is_favorite = view.favorites.iter().any(|f| f.id == track.id);

            let style = if is_playing {
                Style::default()
                    .fg(theme.palette.playing)
                    .add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default()
                    .fg(theme.palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_primary)
            };

            let icon = if is_playing { icons.play } else { icons.music };
            let label = format!("{} — {}", track.title, track.artist_or_unknown());

            let mut spans = vec![
                Span::styled(format!("{icon} "), style),
                Span::styled(truncate_str(&label, max_width), style),
            ];
            if is_favorite {
                spans.push(Span::styled(
                    format!(" {}", icons.favorite),
                    Style::default().fg(theme.palette.accent),
                ));
            }
            spans.push(Span::styled(
                format!("  {}", fmt_time(track.duration.unwrap_or(0.0))),
                Style::default().fg(theme.palette.fg_secondary),
            ));

            ListItem::new(Line::from(spans))
        })
        .collect();

    let adjusted_selected = view.cursor.selected.saturating_sub(scroll_offset);
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

    // Scroll position indicator
    if view.tracks.len() > visible_height {
        let pos_text = format!("{}/{}", view.cursor.selected + 1, view.tracks.len());
        let pos_len = pos_text.len() as u16;
        let pos_x = area.x + area.width.saturating_sub(pos_len);
        if pos_x > area.x {
            frame.render_widget(
                Paragraph::new(pos_text).style(Style::default().fg(theme.palette.fg_secondary)),
                Rect::new(pos_x, area.y, pos_len, 1),
            );
        }
    }
}
