//! Bottom player bar: transport state, scrubbable progress and volume bars.
//! The bar rectangles are written into `state.layout` every frame so mouse
//! events can be resolved against what is actually on screen.

use crate::app::state::{AppState, ToastKind};
use crate::player::PlaybackState;
use crate::tui::theme::{Icons, get_theme};
use crate::tui::widgets::{fmt_time, truncate_str};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, ps: &PlaybackState, state: &mut AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Player ", icons.music))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Track line
            Constraint::Length(1), // Progress
            Constraint::Length(1), // Controls + volume
            Constraint::Min(0),    // Toast / status
        ])
        .split(inner);

    render_track_line(frame, ps, state, rows[0]);
    render_progress_row(frame, ps, state, rows[1]);
    render_controls_row(frame, ps, state, rows[2]);
    render_status_row(frame, state, rows[3]);
}

fn render_track_line(frame: &mut Frame, ps: &PlaybackState, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let width = area.width.saturating_sub(4) as usize;

    let line = match &ps.current_track {
        Some(track) => {
            let label = format!("{} — {}", track.title, track.artist_or_unknown());
            let mut spans = vec![Span::styled(
                truncate_str(&label, width),
                Style::default()
                    .fg(theme.palette.fg_primary)
                    .add_modifier(Modifier::BOLD),
            )];
            if state.is_favorite(track.id) {
                spans.push(Span::styled(
                    format!(" {}", icons.favorite),
                    Style::default().fg(theme.palette.accent),
                ));
            }
            Line::from(spans)
        }
        None => Line::from(Span::styled(
            "Not playing",
            Style::default().fg(theme.palette.fg_secondary),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_progress_row(frame: &mut Frame, ps: &PlaybackState, state: &mut AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(6), // elapsed
            Constraint::Min(10),   // bar
            Constraint::Length(6), // duration
        ])
        .split(area);

    // The scrub target for pointer events.
    state.layout.progress_bar = cols[1];

    let ratio = if ps.duration > 0.0 {
        (ps.current_time / ps.duration).clamp(0.0, 1.0)
    } else {
        0.0
    };

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{:>5} ", fmt_time(ps.current_time)),
            Style::default().fg(theme.palette.fg_secondary),
        )),
        cols[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            progress_bar(cols[1].width as usize, ratio, icons),
            Style::default().fg(theme.palette.accent),
        )),
        cols[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {:>5}", fmt_time(ps.duration)),
            Style::default().fg(theme.palette.fg_secondary),
        )),
        cols[2],
    );
}

fn render_controls_row(frame: &mut Frame, ps: &PlaybackState, state: &mut AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(16),    // transport + mode flags
            Constraint::Length(2),  // volume icon
            Constraint::Length(12), // volume bar
            Constraint::Length(5),  // percent
        ])
        .split(area);

    state.layout.volume_bar = cols[2];

    let play_icon = if ps.is_playing { icons.pause } else { icons.play };
    let mode_style = |on: bool| {
        if on {
            Style::default().fg(theme.palette.accent)
        } else {
            Style::default().fg(theme.palette.fg_secondary)
        }
    };

    let controls = Line::from(vec![
        Span::styled(icons.prev, Style::default().fg(theme.palette.fg_secondary)),
        Span::raw("  "),
        Span::styled(play_icon, Style::default().fg(theme.palette.playing)),
        Span::raw("  "),
        Span::styled(icons.next, Style::default().fg(theme.palette.fg_secondary)),
        Span::raw("   "),
        Span::styled(icons.shuffle, mode_style(ps.shuffle)),
        Span::raw(" "),
        Span::styled(icons.repeat, mode_style(ps.repeat)),
    ]);
    frame.render_widget(Paragraph::new(controls), cols[0]);

    let vol_icon = if ps.volume == 0.0 {
        icons.volume_mute
    } else if ps.volume < 0.5 {
        icons.volume_low
    } else {
        icons.volume_high
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            vol_icon,
            Style::default().fg(theme.palette.fg_secondary),
        )),
        cols[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            progress_bar(cols[2].width as usize, ps.volume, icons),
            Style::default().fg(theme.palette.fg_primary),
        )),
        cols[2],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {:>3}%", (ps.volume * 100.0).round() as u32),
            Style::default().fg(theme.palette.fg_secondary),
        )),
        cols[3],
    );
}

fn render_status_row(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let width = area.width.saturating_sub(3) as usize;

    if let Some(toast) = &state.toast
        && !toast.is_expired()
    {
        let (prefix, color) = match toast.kind {
            ToastKind::Success => (icons.success, theme.palette.playing),
            ToastKind::Error => (icons.error, theme.palette.error),
        };
        let line = Line::from(vec![
            Span::styled(format!("{prefix} "), Style::default().fg(color)),
            Span::styled(truncate_str(&toast.message, width), Style::default().fg(color)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    if !state.status.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                truncate_str(&state.status, width),
                Style::default().fg(theme.palette.fg_secondary),
            )),
            area,
        );
    }
}

/// A `━━━●──` style bar; `ratio` in [0, 1].
fn progress_bar(width: usize, ratio: f64, icons: &Icons) -> String {
    if width < 3 {
        return String::new();
    }

    let filled = ((width - 1) as f64 * ratio.clamp(0.0, 1.0)).round() as usize;
    let empty = width.saturating_sub(filled + 1);

    let mut bar = String::with_capacity(width * 3);
    for _ in 0..filled {
        bar.push_str(icons.progress_full);
    }
    bar.push_str(icons.progress_head);
    for _ in 0..empty {
        bar.push_str(icons.progress_empty);
    }
    bar
}
