//! LRC format parser
//!
//! Parses synchronized lyrics of the form:
//! [00:12.34] Hello world
//! [00:15.003] Another line
//!
//! Lines without a timestamp (metadata tags like `[ti:...]` included) are
//! dropped. Cues are emitted in source line order and are NOT sorted by
//! time: an out-of-order source file produces an out-of-order cue sequence,
//! matching what the rest of the player expects to observe.

/// A single timestamped lyrics line.
#[derive(Debug, Clone, PartialEq)]
pub struct LyricCue {
    /// Seconds from the start of the track.
    pub time: f64,
    /// The lyrics text, trimmed. May be empty (instrumental gaps).
    pub text: String,
}

/// Parse an LRC blob into cues.
pub fn parse_lrc(raw: &str) -> Vec<LyricCue> {
    raw.lines().filter_map(parse_line).collect()
}

/// The first `[mm:ss.xx]` / `[mm:ss.xxx]` stamp anywhere in the line wins;
/// everything after its bracket is the text.
fn parse_line(line: &str) -> Option<LyricCue> {
    for (start, _) in line.char_indices().filter(|&(_, c)| c == '[') {
        let rest = &line[start + 1..];
        let end = rest.find(']')?;
        if let Some(time) = parse_timestamp(&rest[..end]) {
            return Some(LyricCue {
                time,
                text: rest[end + 1..].trim().to_string(),
            });
        }
    }
    None
}

fn parse_timestamp(stamp: &str) -> Option<f64> {
    let (minutes, rest) = stamp.split_once(':')?;
    let (seconds, fraction) = rest.split_once('.')?;
    if minutes.len() != 2 || seconds.len() != 2 || !matches!(fraction.len(), 2 | 3) {
        return None;
    }
    if ![minutes, seconds, fraction]
        .iter()
        .all(|part| part.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let minutes: f64 = minutes.parse().ok()?;
    let seconds: f64 = seconds.parse().ok()?;
    let frac: u32 = fraction.parse().ok()?;
    // Two-digit fractions are centiseconds: ".50" is 500ms, not 50ms.
    let millis = if fraction.len() == 2 { frac * 10 } else { frac };

    Some(minutes * 60.0 + seconds + f64::from(millis) / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_centisecond_fraction_right_padded() {
        let cues = parse_lrc("[01:02.50]Hello");
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].time, 62.5);
        assert_eq!(cues[0].text, "Hello");
    }

    #[test]
    fn parses_millisecond_fraction_and_empty_text() {
        let cues = parse_lrc("[00:00.000]");
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].time, 0.0);
        assert_eq!(cues[0].text, "");
    }

    #[test]
    fn drops_lines_without_a_timestamp() {
        let raw = "[ti:Some Title]\nplain text line\n[00:05.00]kept";
        let cues = parse_lrc(raw);
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "kept");
    }

    #[test]
    fn rejects_malformed_stamps() {
        assert!(parse_lrc("[0:05.00]short minute field").is_empty());
        assert!(parse_lrc("[00:05]no fraction").is_empty());
        assert!(parse_lrc("[00:05.1234]fraction too long").is_empty());
    }

    #[test]
    fn text_is_trimmed() {
        let cues = parse_lrc("[00:12.34]   spaced out   ");
        assert_eq!(cues[0].text, "spaced out");
    }

    #[test]
    fn keeps_source_order_even_when_unsorted() {
        let cues = parse_lrc("[00:20.00]late\n[00:10.00]early");
        let times: Vec<f64> = cues.iter().map(|c| c.time).collect();
        assert_eq!(times, vec![20.0, 10.0]);
    }
}
