//! Theme: palette, Nerd Font icons, borders.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub border: Color,
    pub playing: Color,
    pub error: Color,
}

impl Palette {
    /// Dark background, green accent.
    pub const NOCTURNE: Self = Self {
        bg_primary: Color::Rgb(18, 18, 18),      // #121212 near black
        fg_primary: Color::Rgb(255, 255, 255),   // #ffffff
        fg_secondary: Color::Rgb(179, 179, 179), // #b3b3b3 dimmed
        accent: Color::Rgb(30, 215, 96),         // #1ed760 green
        border: Color::Rgb(64, 64, 64),          // #404040
        playing: Color::Rgb(30, 215, 96),
        error: Color::Rgb(231, 76, 60),          // #e74c3c
    };
}

/// Icon set using Nerd Font glyphs
/// Requires a Nerd Font to be installed (https://www.nerdfonts.com)
#[derive(Debug, Clone)]
pub struct Icons {
    pub play: &'static str,
    pub pause: &'static str,
    pub next: &'static str,
    pub prev: &'static str,

    pub volume_mute: &'static str,
    pub volume_low: &'static str,
    pub volume_high: &'static str,

    pub repeat: &'static str,
    pub shuffle: &'static str,

    pub home: &'static str,
    pub library: &'static str,
    pub playlist: &'static str,
    pub lyrics: &'static str,
    pub settings: &'static str,
    pub help: &'static str,

    pub success: &'static str,
    pub error: &'static str,

    pub music: &'static str,
    pub album: &'static str,
    pub favorite: &'static str,

    pub selected: &'static str,
    pub unselected: &'static str,

    pub progress_full: &'static str,
    pub progress_empty: &'static str,
    pub progress_head: &'static str,
}

impl Icons {
    pub const fn nerd() -> Self {
        Self {
            play: "\u{f04b}",        // nf-fa-play
            pause: "\u{f04c}",       // nf-fa-pause
            next: "\u{f051}",        // nf-fa-step_forward
            prev: "\u{f048}",        // nf-fa-step_backward

            volume_mute: "\u{f026}", // nf-fa-volume_off
            volume_low: "\u{f027}",  // nf-fa-volume_down
            volume_high: "\u{f028}", // nf-fa-volume_up

            repeat: "\u{f456}",      // nf-md-repeat
            shuffle: "\u{f49d}",     // nf-md-shuffle

            home: "\u{f015}",        // nf-fa-home
            library: "\u{f001}",     // nf-fa-music
            playlist: "\u{f0cb}",    // nf-fa-list_ol
            lyrics: "\u{f15c}",      // nf-fa-file_text_o
            settings: "\u{f013}",    // nf-fa-cog
            help: "\u{f059}",        // nf-fa-question_circle

            success: "\u{f00c}",     // nf-fa-check
            error: "\u{f00d}",       // nf-fa-times

            music: "\u{f001}",       // nf-fa-music
            album: "\u{f51f}",       // nf-md-album
            favorite: "\u{f004}",    // nf-fa-heart

            selected: "\u{f054}",    // nf-fa-chevron_right
            unselected: " ",

            progress_full: "━",
            progress_empty: "─",
            progress_head: "●",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: Palette,
    pub icons: Icons,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            palette: Palette::NOCTURNE,
            icons: Icons::nerd(),
        }
    }

    pub fn border_set(&self) -> ratatui::symbols::border::Set<'static> {
        ratatui::symbols::border::ROUNDED
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

pub fn get_theme() -> Theme {
    Theme::new()
}

/// Loading spinner frames
pub struct LoadingSpinner;

impl LoadingSpinner {
    pub const BRAILLE: [&'static str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

    pub fn frame(tick: u64) -> &'static str {
        let idx = (tick / 4) as usize % Self::BRAILLE.len();
        Self::BRAILLE[idx]
    }
}
