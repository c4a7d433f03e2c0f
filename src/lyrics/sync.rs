//! Active-cue resolution against the playback clock.

use crate::lyrics::parser::LyricCue;

/// Index of the cue whose time window contains `current_time`: the cue at
/// `i` is active while `time[i] <= current_time < time[i+1]` (the last cue
/// stays active to the end). Before the first cue, nothing is active.
pub fn active_cue(cues: &[LyricCue], current_time: f64) -> Option<usize> {
    cues.iter().enumerate().find_map(|(i, cue)| {
        let within = current_time >= cue.time
            && cues.get(i + 1).is_none_or(|next| current_time < next.time);
        within.then_some(i)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cues(times: &[f64]) -> Vec<LyricCue> {
        times
            .iter()
            .map(|&time| LyricCue {
                time,
                text: format!("line at {time}"),
            })
            .collect()
    }

    #[test]
    fn picks_the_containing_window() {
        let cues = cues(&[0.0, 10.0, 20.0]);
        assert_eq!(active_cue(&cues, 15.0), Some(1));
    }

    #[test]
    fn last_cue_stays_active() {
        let cues = cues(&[0.0, 10.0, 20.0]);
        assert_eq!(active_cue(&cues, 25.0), Some(2));
    }

    #[test]
    fn nothing_active_before_the_first_cue() {
        let cues = cues(&[0.0, 10.0, 20.0]);
        assert_eq!(active_cue(&cues, -1.0), None);

        let late_start = super::super::parser::parse_lrc("[00:05.00]first");
        assert_eq!(active_cue(&late_start, 2.0), None);
    }

    #[test]
    fn boundary_belongs_to_the_starting_cue() {
        let cues = cues(&[0.0, 10.0]);
        assert_eq!(active_cue(&cues, 10.0), Some(1));
    }

    #[test]
    fn empty_sequence_has_no_active_cue() {
        assert_eq!(active_cue(&[], 5.0), None);
    }
}
