//! Synchronized lyrics: LRC parsing and active-line resolution.

pub mod parser;
pub mod sync;

pub use parser::{LyricCue, parse_lrc};
pub use sync::active_cue;

/// Lyrics for the current track. Replaced wholesale on track change; the cue
/// sequence never mutates while a track is current.
#[derive(Debug, Clone, Default)]
pub struct Lyrics {
    pub cues: Vec<LyricCue>,
    pub plain: Option<String>,
}

impl Lyrics {
    pub fn from_parts(synced: Option<&str>, plain: Option<&str>) -> Self {
        Self {
            cues: synced.map(parse_lrc).unwrap_or_default(),
            plain: plain.filter(|p| !p.is_empty()).map(str::to_string),
        }
    }

    pub fn is_synced(&self) -> bool {
        !self.cues.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty() && self.plain.is_none()
    }
}
