//! Full-screen lyrics view. Synced lyrics stay centered on the active line;
//! each rendered line is clickable to seek. Plain lyrics fall back to a
//! scroll-less paragraph.

use crate::app::state::AppState;
use crate::lyrics::active_cue;
use crate::player::PlaybackState;
use crate::tui::theme::{LoadingSpinner, get_theme};
use crate::tui::widgets::truncate_str;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, ps: &PlaybackState, state: &mut AppState, area: Rect) {
    let theme = get_theme();

    // Clicks only mean something over a rendered synced cue list.
    state.layout.lyrics_area = Rect::default();
    state.layout.lyrics_first_cue = 0;

    let Some(track) = &ps.current_track else {
        let msg = Paragraph::new(Line::from("Nothing playing"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.palette.fg_secondary));
        frame.render_widget(msg, area);
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Track header
            Constraint::Min(3),    // Lyrics body
        ])
        .split(area);

    let header = vec![
        Line::from(Span::styled(
            truncate_str(&track.title, area.width.saturating_sub(2) as usize),
            Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            track.artist_or_unknown().to_string(),
            Style::default().fg(theme.palette.fg_secondary),
        )),
    ];
    frame.render_widget(Paragraph::new(header).alignment(Alignment::Center), layout[0]);

    let body = layout[1];

    if state.lyrics_loading {
        let spinner = LoadingSpinner::frame(state.tick);
        let loading = Paragraph::new(Line::from(format!("{spinner} Searching for lyrics...")))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.palette.fg_secondary));
        frame.render_widget(loading, body);
        return;
    }

    if state.lyrics.as_ref().is_some_and(|l| l.is_synced()) {
        render_synced(frame, ps, state, body);
        return;
    }

    match state.lyrics.as_ref().and_then(|l| l.plain.clone()) {
        Some(text) => {
            let para = Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: false })
                .style(Style::default().fg(theme.palette.fg_secondary));
            frame.render_widget(para, body);
        }
        None => {
            let msg = Paragraph::new(vec![
                Line::from(Span::styled(
                    "No lyrics found",
                    Style::default()
                        .fg(theme.palette.fg_secondary)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Nobody has added lyrics for this track yet.",
                    Style::default().fg(theme.palette.fg_secondary),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(msg, body);
        }
    }
}

fn render_synced(frame: &mut Frame, ps: &PlaybackState, state: &mut AppState, area: Rect) {
    let theme = get_theme();
    let Some(lyrics) = &state.lyrics else {
        return;
    };
    let cues = &lyrics.cues;

    let active = active_cue(cues, ps.current_time);
    // Before the first cue, show the top of the sheet unhighlighted.
    let anchor = active.unwrap_or(0);

    let visible = area.height as usize;
    let half = visible / 2;
    let first = anchor.saturating_sub(half);

    let max_width = area.width.saturating_sub(4) as usize;

    let lines: Vec<Line> = cues
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .map(|(i, cue)| {
            let is_active = active == Some(i);
            let style = if is_active {
                Style::default()
                    .fg(theme.palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_secondary)
            };
            let prefix = if is_active { "♪ " } else { "  " };
            Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(truncate_str(&cue.text, max_width), style),
            ])
            .alignment(Alignment::Center)
        })
        .collect();

    // One cue per row, so pointer rows map straight back to cue indices.
    state.layout.lyrics_area = Rect::new(area.x, area.y, area.width, lines.len() as u16);
    state.layout.lyrics_first_cue = first;

    frame.render_widget(Paragraph::new(lines), area);
}
