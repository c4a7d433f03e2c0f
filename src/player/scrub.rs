//! Drag-to-value scrubbing over a horizontal bar.
//!
//! One session exists from pointer-down to pointer-up. While it lives, the
//! app routes every mouse drag/up event to it no matter where the pointer
//! wanders; `finish` consumes the session, so release happens exactly once.
//! The same primitive backs both the progress bar (fraction of the track
//! duration) and the volume bar (fraction is the volume).

use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrubTarget {
    Progress,
    Volume,
}

#[derive(Debug)]
pub struct ScrubSession {
    target: ScrubTarget,
    bounds: Rect,
}

impl ScrubSession {
    /// Start a session over `bounds` and resolve the initial fraction, so a
    /// plain click seeks without any drag.
    pub fn begin(target: ScrubTarget, bounds: Rect, column: u16) -> (Self, f64) {
        let session = Self { target, bounds };
        let fraction = session.fraction_at(column);
        (session, fraction)
    }

    pub fn target(&self) -> ScrubTarget {
        self.target
    }

    /// Fraction for a drag position. Pointers outside the bar clamp to its
    /// edges.
    pub fn update(&self, column: u16) -> f64 {
        self.fraction_at(column)
    }

    /// End the session with the final pointer position.
    pub fn finish(self, column: u16) -> f64 {
        self.fraction_at(column)
    }

    fn fraction_at(&self, column: u16) -> f64 {
        let span = self.bounds.width.saturating_sub(1);
        if span == 0 {
            return 0.0;
        }
        let offset = column.saturating_sub(self.bounds.x);
        (f64::from(offset) / f64::from(span)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar() -> Rect {
        Rect::new(10, 5, 21, 1)
    }

    #[test]
    fn left_edge_is_zero() {
        let (_, fraction) = ScrubSession::begin(ScrubTarget::Progress, bar(), 10);
        assert_eq!(fraction, 0.0);
    }

    #[test]
    fn right_edge_is_one() {
        let (session, _) = ScrubSession::begin(ScrubTarget::Progress, bar(), 10);
        assert_eq!(session.update(30), 1.0);
    }

    #[test]
    fn midpoint_is_half() {
        let (session, _) = ScrubSession::begin(ScrubTarget::Volume, bar(), 10);
        assert_eq!(session.update(20), 0.5);
    }

    #[test]
    fn positions_outside_the_bar_clamp() {
        let (session, _) = ScrubSession::begin(ScrubTarget::Progress, bar(), 10);
        assert_eq!(session.update(3), 0.0);
        assert_eq!(session.update(200), 1.0);
    }

    #[test]
    fn finish_resolves_the_final_fraction() {
        let (session, initial) = ScrubSession::begin(ScrubTarget::Progress, bar(), 15);
        assert_eq!(initial, 0.25);
        assert_eq!(session.finish(25), 0.75);
        // `session` is consumed here; a second report is a compile error.
    }

    #[test]
    fn degenerate_bar_yields_zero() {
        let (session, fraction) =
            ScrubSession::begin(ScrubTarget::Volume, Rect::new(4, 0, 1, 1), 4);
        assert_eq!(fraction, 0.0);
        assert_eq!(session.update(9), 0.0);
    }
}
