//! Help screen showing keybindings

use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect) {
    let theme = get_theme();

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left_content = vec![
        section_header("Navigation", &theme),
        keybind("j / Down", "Move down", &theme),
        keybind("k / Up", "Move up", &theme),
        keybind("g / G", "Go to top / bottom", &theme),
        keybind("Ctrl+d / u", "Page down / up", &theme),
        keybind("h / Left", "Previous screen", &theme),
        keybind("l / Right", "Next screen", &theme),
        keybind("Tab", "Next screen", &theme),
        keybind("1-7", "Go to screen", &theme),
        keybind("Enter", "Play track / open item", &theme),
        keybind("Esc", "Close opened item / quit", &theme),
        Line::default(),
        section_header("Playback", &theme),
        keybind("Space", "Play / pause", &theme),
        keybind("n / p", "Next / previous track", &theme),
        keybind("s", "Toggle shuffle", &theme),
        keybind("R", "Toggle repeat", &theme),
        keybind("[ / ]", "Seek 10s back / forward", &theme),
        keybind("+ / -", "Volume up / down", &theme),
        keybind("m", "Mute / unmute", &theme),
    ];

    let left_para = Paragraph::new(left_content).wrap(Wrap { trim: false });
    frame.render_widget(left_para, cols[0]);

    let right_content = vec![
        section_header("Mouse", &theme),
        keybind("Click / drag", "Scrub the progress bar", &theme),
        keybind("Click / drag", "Set volume on its bar", &theme),
        keybind("Click line", "Jump to a lyric line", &theme),
        keybind("Scroll", "Move list selection", &theme),
        Line::default(),
        section_header("Collections", &theme),
        keybind("/", "Search the catalog (Home)", &theme),
        keybind("f", "Toggle favorite", &theme),
        keybind("a", "Add track to open playlist", &theme),
        keybind("n", "New playlist (Playlists)", &theme),
        keybind("d", "Delete / remove (Playlists)", &theme),
        keybind("L", "Lyrics screen", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("q", "Quit", &theme),
        keybind("Ctrl+r / F5", "Refresh current screen", &theme),
        keybind("?", "This screen", &theme),
    ];

    let right_para = Paragraph::new(right_content).wrap(Wrap { trim: false });
    frame.render_widget(right_para, cols[1]);
}

fn section_header(title: &str, theme: &crate::tui::theme::Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &crate::tui::theme::Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:12}", key),
            Style::default()
                .fg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}
