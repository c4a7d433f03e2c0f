//! Playback: the controller that owns playback state, the pure track
//! sequencer, scrub sessions for the progress/volume bars, and the mpv sink.

pub mod controller;
pub mod mpv;
pub mod scrub;
pub mod sequencer;

pub use controller::{PlaybackController, PlaybackState, SinkCommand};
pub use scrub::{ScrubSession, ScrubTarget};
