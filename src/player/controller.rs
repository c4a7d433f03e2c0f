//! Playback controller: the single owner of "what is playing and how far
//! along".
//!
//! Every operation mutates [`PlaybackState`] synchronously and returns the
//! [`SinkCommand`]s the app layer must dispatch to the audio sink. The sink
//! answers back over the player event channel; [`apply_sink_event`] folds
//! those answers into state. Nothing else mutates playback state.
//!
//! [`apply_sink_event`]: PlaybackController::apply_sink_event

use crate::api::models::Track;
use crate::app::events::PlayerEvent;
use crate::player::sequencer;

/// Command for the audio sink.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCommand {
    /// Point the sink at this track's stream and start playback.
    Load(Track),
    SetPause(bool),
    SeekAbsolute(f64),
    /// Volume in `[0, 1]`.
    SetVolume(f64),
}

/// Playback state as the UI observes it. Created once with no track and
/// defaults, then lives for the whole session.
#[derive(Debug, Clone)]
pub struct PlaybackState {
    pub current_track: Option<Track>,
    pub is_playing: bool,
    pub current_time: f64,
    pub duration: f64,
    pub volume: f64,
    pub shuffle: bool,
    pub repeat: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_track: None,
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume: 0.7,
            shuffle: false,
            repeat: false,
        }
    }
}

pub struct PlaybackController {
    state: PlaybackState,
}

impl PlaybackController {
    pub fn new(volume: f64) -> Self {
        Self {
            state: PlaybackState {
                volume: volume.clamp(0.0, 1.0),
                ..Default::default()
            },
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.state.current_track.as_ref()
    }

    pub fn is_current(&self, track_id: i64) -> bool {
        self.state
            .current_track
            .as_ref()
            .is_some_and(|t| t.id == track_id)
    }

    /// Tap-to-play: tapping the current track toggles pause instead of
    /// restarting it; any other track becomes current and starts playing.
    pub fn play(&mut self, track: Track) -> Vec<SinkCommand> {
        if self.is_current(track.id) {
            return self.toggle_play().into_iter().collect();
        }
        self.start(track)
    }

    pub fn toggle_play(&mut self) -> Option<SinkCommand> {
        self.state.current_track.as_ref()?;
        self.state.is_playing = !self.state.is_playing;
        Some(SinkCommand::SetPause(!self.state.is_playing))
    }

    /// Advance: repeat restarts the current track; shuffle picks uniformly
    /// at random; otherwise next in list order, wrapping to the first.
    pub fn next(&mut self, order: &[Track]) -> Vec<SinkCommand> {
        if self.state.current_track.is_none() {
            return Vec::new();
        }
        if self.state.repeat {
            self.state.current_time = 0.0;
            self.state.is_playing = true;
            return vec![SinkCommand::SeekAbsolute(0.0), SinkCommand::SetPause(false)];
        }
        let resolved = if self.state.shuffle {
            sequencer::random_pick(order).cloned()
        } else {
            sequencer::next_in_order(order, self.state.current_track.as_ref()).cloned()
        };
        match resolved {
            Some(track) => self.start(track),
            None => Vec::new(),
        }
    }

    /// More than three seconds in, "previous" means restart; otherwise the
    /// previous track in list order, wrapping to the last.
    pub fn prev(&mut self, order: &[Track]) -> Vec<SinkCommand> {
        if self.state.current_track.is_none() {
            return Vec::new();
        }
        if self.state.current_time > 3.0 {
            self.state.current_time = 0.0;
            return vec![SinkCommand::SeekAbsolute(0.0)];
        }
        match sequencer::prev_in_order(order, self.state.current_track.as_ref()).cloned() {
            Some(track) => self.start(track),
            None => Vec::new(),
        }
    }

    /// Seek to a fraction of the duration (scrubbing the progress bar).
    pub fn seek_fraction(&mut self, fraction: f64) -> Option<SinkCommand> {
        self.seek_to(fraction.clamp(0.0, 1.0) * self.state.duration)
    }

    /// Seek to an absolute position, clamped to `[0, duration]`. State is
    /// updated immediately; the sink confirms on its own time.
    pub fn seek_to(&mut self, seconds: f64) -> Option<SinkCommand> {
        self.state.current_track.as_ref()?;
        let clamped = seconds.clamp(0.0, self.state.duration.max(0.0));
        self.state.current_time = clamped;
        Some(SinkCommand::SeekAbsolute(clamped))
    }

    pub fn set_volume(&mut self, volume: f64) -> SinkCommand {
        self.state.volume = volume.clamp(0.0, 1.0);
        SinkCommand::SetVolume(self.state.volume)
    }

    /// Mute toggle: zero volume, or restore the default level.
    pub fn toggle_mute(&mut self) -> SinkCommand {
        let restored = if self.state.volume > 0.0 { 0.0 } else { 0.7 };
        self.set_volume(restored)
    }

    pub fn toggle_shuffle(&mut self) {
        self.state.shuffle = !self.state.shuffle;
    }

    pub fn toggle_repeat(&mut self) {
        self.state.repeat = !self.state.repeat;
    }

    /// Fold a sink event into state. Track end auto-advances; sink errors
    /// drop back to paused instead of lying about playback.
    pub fn apply_sink_event(&mut self, event: &PlayerEvent, order: &[Track]) -> Vec<SinkCommand> {
        match event {
            PlayerEvent::Started => {
                if self.state.current_track.is_some() {
                    self.state.is_playing = true;
                }
                Vec::new()
            }
            PlayerEvent::Paused => {
                self.state.is_playing = false;
                Vec::new()
            }
            PlayerEvent::Position { seconds } => {
                self.state.current_time = if self.state.duration > 0.0 {
                    seconds.clamp(0.0, self.state.duration)
                } else {
                    seconds.max(0.0)
                };
                Vec::new()
            }
            PlayerEvent::Duration { seconds } => {
                self.state.duration = seconds.max(0.0);
                // Stream metadata just loaded; re-apply the pending volume.
                vec![SinkCommand::SetVolume(self.state.volume)]
            }
            PlayerEvent::Ended => self.next(order),
            PlayerEvent::Error(_) => {
                self.state.is_playing = false;
                Vec::new()
            }
        }
    }

    /// Switch to `track` unconditionally and start playback. Loading a new
    /// stream supersedes whatever the sink was doing before.
    fn start(&mut self, track: Track) -> Vec<SinkCommand> {
        self.state.current_time = 0.0;
        self.state.duration = track.duration.unwrap_or(0.0);
        self.state.is_playing = true;
        self.state.current_track = Some(track.clone());
        vec![SinkCommand::Load(track)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: i64) -> Track {
        Track {
            id,
            title: format!("Track {id}"),
            artist: "Artist".into(),
            album: None,
            album_id: None,
            has_cover: false,
            duration: Some(200.0),
            added_at: None,
        }
    }

    fn order() -> Vec<Track> {
        vec![track(1), track(2), track(3)]
    }

    fn playing(track_id: i64) -> PlaybackController {
        let mut c = PlaybackController::new(0.7);
        c.play(track(track_id));
        c
    }

    #[test]
    fn play_loads_a_new_track() {
        let mut c = PlaybackController::new(0.7);
        let cmds = c.play(track(1));
        assert_eq!(cmds, vec![SinkCommand::Load(track(1))]);
        assert!(c.state().is_playing);
        assert_eq!(c.state().duration, 200.0);
    }

    #[test]
    fn play_same_track_toggles_pause() {
        let mut c = playing(1);
        let cmds = c.play(track(1));
        assert_eq!(cmds, vec![SinkCommand::SetPause(true)]);
        assert!(!c.state().is_playing);

        let cmds = c.play(track(1));
        assert_eq!(cmds, vec![SinkCommand::SetPause(false)]);
        assert!(c.state().is_playing);
    }

    #[test]
    fn toggle_play_is_a_noop_without_a_track() {
        let mut c = PlaybackController::new(0.7);
        assert!(c.toggle_play().is_none());
        assert!(!c.state().is_playing);
    }

    #[test]
    fn next_wraps_to_the_first_track() {
        let mut c = playing(3);
        let cmds = c.next(&order());
        assert_eq!(cmds, vec![SinkCommand::Load(track(1))]);
    }

    #[test]
    fn prev_wraps_to_the_last_track() {
        let mut c = playing(1);
        let cmds = c.prev(&order());
        assert_eq!(cmds, vec![SinkCommand::Load(track(3))]);
    }

    #[test]
    fn repeat_restarts_without_changing_track() {
        let mut c = playing(2);
        c.toggle_repeat();
        c.apply_sink_event(&PlayerEvent::Position { seconds: 120.0 }, &order());

        let cmds = c.next(&order());
        assert_eq!(
            cmds,
            vec![SinkCommand::SeekAbsolute(0.0), SinkCommand::SetPause(false)]
        );
        assert_eq!(c.current_track().unwrap().id, 2);
        assert_eq!(c.state().current_time, 0.0);
        assert!(c.state().is_playing);
    }

    #[test]
    fn prev_late_in_the_track_restarts_it() {
        let mut c = playing(2);
        c.apply_sink_event(&PlayerEvent::Position { seconds: 10.0 }, &order());

        let cmds = c.prev(&order());
        assert_eq!(cmds, vec![SinkCommand::SeekAbsolute(0.0)]);
        assert_eq!(c.current_track().unwrap().id, 2);
        assert_eq!(c.state().current_time, 0.0);
    }

    #[test]
    fn next_prev_without_a_track_do_nothing() {
        let mut c = PlaybackController::new(0.7);
        assert!(c.next(&order()).is_empty());
        assert!(c.prev(&order()).is_empty());
    }

    #[test]
    fn next_on_empty_order_does_nothing() {
        let mut c = playing(1);
        assert!(c.next(&[]).is_empty());
        assert_eq!(c.current_track().unwrap().id, 1);
    }

    #[test]
    fn shuffle_next_always_resolves_from_the_order() {
        let mut c = playing(1);
        c.toggle_shuffle();
        let cmds = c.next(&order());
        assert_eq!(cmds.len(), 1);
        match &cmds[0] {
            SinkCommand::Load(t) => assert!((1..=3).contains(&t.id)),
            other => panic!("expected Load, got {other:?}"),
        }
        assert!(c.state().is_playing);
    }

    #[test]
    fn seek_clamps_to_duration() {
        let mut c = playing(1);
        c.apply_sink_event(&PlayerEvent::Duration { seconds: 100.0 }, &order());

        assert_eq!(c.seek_to(250.0), Some(SinkCommand::SeekAbsolute(100.0)));
        assert_eq!(c.seek_to(-5.0), Some(SinkCommand::SeekAbsolute(0.0)));
        assert_eq!(
            c.seek_fraction(0.5),
            Some(SinkCommand::SeekAbsolute(50.0))
        );
        assert_eq!(c.state().current_time, 50.0);
    }

    #[test]
    fn volume_clamps_to_unit_range() {
        let mut c = PlaybackController::new(0.7);
        assert_eq!(c.set_volume(1.5), SinkCommand::SetVolume(1.0));
        assert_eq!(c.set_volume(-0.2), SinkCommand::SetVolume(0.0));
    }

    #[test]
    fn mute_toggles_between_zero_and_default() {
        let mut c = PlaybackController::new(0.4);
        assert_eq!(c.toggle_mute(), SinkCommand::SetVolume(0.0));
        assert_eq!(c.toggle_mute(), SinkCommand::SetVolume(0.7));
    }

    #[test]
    fn ended_advances_to_the_next_track() {
        let mut c = playing(1);
        let cmds = c.apply_sink_event(&PlayerEvent::Ended, &order());
        assert_eq!(cmds, vec![SinkCommand::Load(track(2))]);
    }

    #[test]
    fn sink_error_reverts_to_paused() {
        let mut c = playing(1);
        c.apply_sink_event(&PlayerEvent::Error("decode failed".into()), &order());
        assert!(!c.state().is_playing);
        assert_eq!(c.current_track().unwrap().id, 1);
    }

    #[test]
    fn duration_event_reapplies_volume() {
        let mut c = playing(1);
        c.set_volume(0.3);
        let cmds = c.apply_sink_event(&PlayerEvent::Duration { seconds: 180.0 }, &order());
        assert_eq!(cmds, vec![SinkCommand::SetVolume(0.3)]);
        assert_eq!(c.state().duration, 180.0);
    }

    #[test]
    fn position_clamps_into_the_track() {
        let mut c = playing(1);
        c.apply_sink_event(&PlayerEvent::Duration { seconds: 100.0 }, &order());
        c.apply_sink_event(&PlayerEvent::Position { seconds: 150.0 }, &order());
        assert_eq!(c.state().current_time, 100.0);
        c.apply_sink_event(&PlayerEvent::Position { seconds: -2.0 }, &order());
        assert_eq!(c.state().current_time, 0.0);
    }

    #[test]
    fn started_event_without_a_track_stays_idle() {
        let mut c = PlaybackController::new(0.7);
        c.apply_sink_event(&PlayerEvent::Started, &order());
        assert!(!c.state().is_playing);
    }
}
