//! Catalog grouping: the server returns a flat track list; the UI wants
//! cover-bearing albums plus a pile of singles.

use crate::api::models::Track;
use std::collections::HashMap;

/// An album derived from the catalog. Never persisted; rebuilt whenever the
/// track list changes.
#[derive(Debug, Clone)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub albums: Vec<Album>,
    pub singles: Vec<Track>,
}

impl Catalog {
    /// Partition `tracks` in a single pass. A track joins an album only when
    /// it has both an `album_id` and cover art; everything else is a single.
    /// Albums keep first-seen order and take their metadata from the first
    /// contributing track; per-album track order is catalog order.
    pub fn group(tracks: &[Track]) -> Self {
        let mut albums: Vec<Album> = Vec::new();
        let mut index_by_id: HashMap<i64, usize> = HashMap::new();
        let mut singles = Vec::new();

        for track in tracks {
            match track.album_id {
                Some(album_id) if track.has_cover => {
                    let idx = *index_by_id.entry(album_id).or_insert_with(|| {
                        albums.push(Album {
                            id: album_id,
                            title: track.album.clone().unwrap_or_default(),
                            artist: track.artist_or_unknown().to_string(),
                            tracks: Vec::new(),
                        });
                        albums.len() - 1
                    });
                    albums[idx].tracks.push(track.clone());
                }
                _ => singles.push(track.clone()),
            }
        }

        Self { albums, singles }
    }

    /// The ordered list playback walks: album tracks first (album by album),
    /// then singles.
    pub fn play_order(&self) -> Vec<Track> {
        let mut order: Vec<Track> = self
            .albums
            .iter()
            .flat_map(|a| a.tracks.iter().cloned())
            .collect();
        order.extend(self.singles.iter().cloned());
        order
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: i64, album_id: Option<i64>, has_cover: bool) -> Track {
        Track {
            id,
            title: format!("Track {id}"),
            artist: "Artist".into(),
            album: album_id.map(|a| format!("Album {a}")),
            album_id,
            has_cover,
            duration: Some(180.0),
            added_at: None,
        }
    }

    #[test]
    fn groups_covered_album_tracks() {
        let tracks = vec![
            track(1, Some(10), true),
            track(2, Some(10), true),
            track(3, Some(20), true),
        ];
        let catalog = Catalog::group(&tracks);
        assert_eq!(catalog.albums.len(), 2);
        assert_eq!(catalog.albums[0].id, 10);
        assert_eq!(catalog.albums[0].tracks.len(), 2);
        assert_eq!(catalog.albums[1].id, 20);
        assert!(catalog.singles.is_empty());
    }

    #[test]
    fn no_album_id_is_always_a_single() {
        let tracks = vec![track(1, None, true), track(2, None, false)];
        let catalog = Catalog::group(&tracks);
        assert!(catalog.albums.is_empty());
        assert_eq!(catalog.singles.len(), 2);
    }

    #[test]
    fn missing_cover_is_a_single_even_with_album_id() {
        let tracks = vec![track(1, Some(10), false)];
        let catalog = Catalog::group(&tracks);
        assert!(catalog.albums.is_empty());
        assert_eq!(catalog.singles.len(), 1);
    }

    #[test]
    fn album_metadata_comes_from_first_seen_track() {
        let mut first = track(1, Some(10), true);
        first.album = Some("First Title".into());
        first.artist = "First Artist".into();
        let mut second = track(2, Some(10), true);
        second.album = Some("Renamed".into());

        let catalog = Catalog::group(&[first, second]);
        assert_eq!(catalog.albums[0].title, "First Title");
        assert_eq!(catalog.albums[0].artist, "First Artist");
    }

    #[test]
    fn unknown_artist_fallback() {
        let mut t = track(1, Some(10), true);
        t.artist = String::new();
        let catalog = Catalog::group(&[t]);
        assert_eq!(catalog.albums[0].artist, "Unknown Artist");
    }

    #[test]
    fn play_order_round_trips_the_track_set() {
        let tracks = vec![
            track(1, Some(10), true),
            track(2, None, false),
            track(3, Some(10), true),
            track(4, Some(20), false),
            track(5, Some(20), true),
        ];
        let catalog = Catalog::group(&tracks);
        let mut ids: Vec<i64> = catalog.play_order().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        // Albums first, singles after, both in first-seen order.
        let order: Vec<i64> = catalog.play_order().iter().map(|t| t.id).collect();
        assert_eq!(order, vec![1, 3, 5, 2, 4]);
    }
}
