use crate::app::state::AppState;
use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

struct MenuItem {
    icon: &'static str,
    label: &'static str,
    is_separator: bool,
}

impl MenuItem {
    const fn item(icon: &'static str, label: &'static str) -> Self {
        Self {
            icon,
            label,
            is_separator: false,
        }
    }

    const fn separator() -> Self {
        Self {
            icon: "",
            label: "",
            is_separator: true,
        }
    }
}

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(" Menu ")
        .title_style(Style::default().fg(theme.palette.accent));

    let menu_items = [
        MenuItem::item(icons.home, "Home"),
        MenuItem::item(icons.library, "Library"),
        MenuItem::item(icons.favorite, "Favorites"),
        MenuItem::item(icons.playlist, "Playlists"),
        MenuItem::item(icons.lyrics, "Lyrics"),
        MenuItem::separator(),
        MenuItem::item(icons.settings, "Settings"),
        MenuItem::item(icons.help, "Help"),
    ];

    // Screen indices skip the separator row.
    let selection_to_menu: [usize; 7] = [0, 1, 2, 3, 4, 6, 7];
    let menu_to_selection: [Option<usize>; 8] = [
        Some(0),
        Some(1),
        Some(2),
        Some(3),
        Some(4),
        None,
        Some(5),
        Some(6),
    ];

    let items: Vec<ListItem> = menu_items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if item.is_separator {
                return ListItem::new(Line::from(""));
            }

            let is_selected = menu_to_selection[i] == Some(state.sidebar_selected);

            let style = if is_selected {
                Style::default()
                    .fg(theme.palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_primary)
            };

            let icon_style = if is_selected {
                Style::default().fg(theme.palette.accent)
            } else {
                Style::default().fg(theme.palette.fg_secondary)
            };

            let prefix = if is_selected {
                icons.selected
            } else {
                icons.unselected
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, icon_style),
                Span::raw(" "),
                Span::styled(item.icon, icon_style),
                Span::raw(" "),
                Span::styled(item.label, style),
            ]))
        })
        .collect();

    let list_idx = selection_to_menu[state.sidebar_selected.min(6)];

    let mut list_state = ListState::default();
    list_state.select(Some(list_idx));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(theme.palette.bg_primary)
                .bg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("");

    frame.render_stateful_widget(list, area, &mut list_state);
}
