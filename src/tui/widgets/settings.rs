//! Settings screen: where the client points, where its data lives, and the
//! couple of maintenance actions.

use crate::app::state::AppState;
use crate::config::Config;
use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, cfg: &Config, state: &AppState, area: Rect) {
    let theme = get_theme();

    let content = vec![
        section("Server", &theme),
        entry("URL", &cfg.server.url, &theme),
        entry(
            "Music folder",
            cfg.server.music_folder.as_deref().unwrap_or("(server default)"),
            &theme,
        ),
        Line::default(),
        section("Local data", &theme),
        entry("Data dir", &cfg.paths.data_dir.display().to_string(), &theme),
        entry("Lyrics cache", &format_size(state.cache_size_bytes), &theme),
        Line::default(),
        section("Actions", &theme),
        hint("c", "Clear the lyrics cache", &theme),
        hint("S", "Ask the server to rescan its library", &theme),
        Line::default(),
        Line::from(Span::styled(
            "Change the server with: nocturne config server-url <URL>",
            Style::default().fg(theme.palette.fg_secondary),
        )),
        Line::from(Span::styled(
            "Point it at music with: nocturne config music-folder <PATH>",
            Style::default().fg(theme.palette.fg_secondary),
        )),
    ];

    let para = Paragraph::new(content).wrap(Wrap { trim: false });
    frame.render_widget(para, area);
}

fn section(title: &str, theme: &crate::tui::theme::Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    ))
}

fn entry(key: &str, value: &str, theme: &crate::tui::theme::Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:14}", key),
            Style::default().fg(theme.palette.fg_secondary),
        ),
        Span::styled(
            value.to_string(),
            Style::default().fg(theme.palette.fg_primary),
        ),
    ])
}

fn hint(key: &str, desc: &str, theme: &crate::tui::theme::Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:14}", key),
            Style::default()
                .fg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            desc.to_string(),
            Style::default().fg(theme.palette.fg_primary),
        ),
    ])
}

fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}
