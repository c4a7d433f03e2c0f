//! Track sequencing: pure resolution of next/previous against the ordered
//! catalog. Lookup is by track id; a current track that fell out of the list
//! (filtered away by a new search) falls back to the first track.

use crate::api::models::Track;
use rand::Rng;

/// Next track in list order, wrapping to the first after the last.
pub fn next_in_order<'a>(order: &'a [Track], current: Option<&Track>) -> Option<&'a Track> {
    let Some(idx) = current.and_then(|c| position(order, c)) else {
        return order.first();
    };
    order.get(idx + 1).or_else(|| order.first())
}

/// Previous track in list order, wrapping to the last before the first.
pub fn prev_in_order<'a>(order: &'a [Track], current: Option<&Track>) -> Option<&'a Track> {
    let Some(idx) = current.and_then(|c| position(order, c)) else {
        return order.first();
    };
    if idx == 0 {
        order.last()
    } else {
        order.get(idx - 1)
    }
}

/// Uniformly random pick for shuffle. May land on the current track again;
/// that repeat is accepted rather than deduplicated.
pub fn random_pick(order: &[Track]) -> Option<&Track> {
    if order.is_empty() {
        return None;
    }
    order.get(rand::rng().random_range(0..order.len()))
}

fn position(order: &[Track], current: &Track) -> Option<usize> {
    order.iter().position(|t| t.id == current.id)
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
            duration: Some(180.0),
            added_at: None,
        }
    }

    #[test]
    fn next_advances_and_wraps() {
        let order = vec![track(1), track(2), track(3)];
        assert_eq!(next_in_order(&order, Some(&track(1))).unwrap().id, 2);
        assert_eq!(next_in_order(&order, Some(&track(3))).unwrap().id, 1);
    }

    #[test]
    fn prev_retreats_and_wraps() {
        let order = vec![track(1), track(2), track(3)];
        assert_eq!(prev_in_order(&order, Some(&track(2))).unwrap().id, 1);
        assert_eq!(prev_in_order(&order, Some(&track(1))).unwrap().id, 3);
    }

    #[test]
    fn missing_current_falls_back_to_first() {
        let order = vec![track(1), track(2)];
        assert_eq!(next_in_order(&order, Some(&track(99))).unwrap().id, 1);
        assert_eq!(prev_in_order(&order, Some(&track(99))).unwrap().id, 1);
        assert_eq!(next_in_order(&order, None).unwrap().id, 1);
    }

    #[test]
    fn empty_order_resolves_to_none() {
        assert!(next_in_order(&[], Some(&track(1))).is_none());
        assert!(prev_in_order(&[], None).is_none());
        assert!(random_pick(&[]).is_none());
    }

    #[test]
    fn random_pick_stays_in_the_list() {
        let order = vec![track(1), track(2), track(3)];
        for _ in 0..20 {
            let picked = random_pick(&order).unwrap();
            assert!(order.iter().any(|t| t.id == picked.id));
        }
    }

    #[test]
    fn random_pick_on_single_track_returns_it() {
        let order = vec![track(7)];
        assert_eq!(random_pick(&order).unwrap().id, 7);
    }
}
