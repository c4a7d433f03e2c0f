//! Local cache database. Holds fetched lyrics so revisiting a track does
//! not hit the server again; media itself is never cached.

use anyhow::Context;
use rusqlite::{Connection, params};
use std::path::Path;

pub struct Storage {
    conn: Connection,
}

impl Storage {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }

        let conn = Connection::open(path).with_context(|| format!("open {}", path.display()))?;
        let s = Self { conn };
        s.init_schema()?;
        Ok(s)
    }

    fn init_schema(&self) -> anyhow::Result<()> {
        self.conn
            .execute_batch(
                r#"
CREATE TABLE IF NOT EXISTS lyrics_cache (
  track_id INTEGER PRIMARY KEY,
  synced_lrc TEXT,
  plain TEXT,
  fetched_at INTEGER NOT NULL
);
"#,
            )
            .context("init schema")?;
        Ok(())
    }

    pub fn cache_lyrics(
        &self,
        track_id: i64,
        synced_lrc: Option<&str>,
        plain: Option<&str>,
        now_unix: i64,
    ) -> anyhow::Result<()> {
        self.conn
            .execute(
                r#"
INSERT INTO lyrics_cache(track_id, synced_lrc, plain, fetched_at)
VALUES(?1, ?2, ?3, ?4)
ON CONFLICT(track_id) DO UPDATE SET
  synced_lrc=excluded.synced_lrc,
  plain=excluded.plain,
  fetched_at=excluded.fetched_at
"#,
                params![track_id, synced_lrc, plain, now_unix],
            )
            .context("cache lyrics")?;
        Ok(())
    }

    /// Cached lyrics as `(synced_lrc, plain)`; `None` when never fetched.
    pub fn get_lyrics(&self, track_id: i64) -> anyhow::Result<Option<(Option<String>, Option<String>)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT synced_lrc, plain FROM lyrics_cache WHERE track_id=?1")?;
        let mut rows = stmt.query(params![track_id])?;
        if let Some(row) = rows.next()? {
            Ok(Some((row.get(0)?, row.get(1)?)))
        } else {
            Ok(None)
        }
    }

    pub fn clear_lyrics(&self) -> anyhow::Result<()> {
        self.conn
            .execute("DELETE FROM lyrics_cache", [])
            .context("clear lyrics cache")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lyrics_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(&dir.path().join("cache.sqlite3")).unwrap();

        assert!(storage.get_lyrics(1).unwrap().is_none());

        storage
            .cache_lyrics(1, Some("[00:01.00]hi"), None, 1000)
            .unwrap();
        let (synced, plain) = storage.get_lyrics(1).unwrap().unwrap();
        assert_eq!(synced.as_deref(), Some("[00:01.00]hi"));
        assert!(plain.is_none());

        // Refetch overwrites.
        storage.cache_lyrics(1, None, Some("plain text"), 2000).unwrap();
        let (synced, plain) = storage.get_lyrics(1).unwrap().unwrap();
        assert!(synced.is_none());
        assert_eq!(plain.as_deref(), Some("plain text"));
    }

    #[test]
    fn a_not_found_result_is_cached_too() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(&dir.path().join("cache.sqlite3")).unwrap();

        storage.cache_lyrics(7, None, None, 1000).unwrap();
        let (synced, plain) = storage.get_lyrics(7).unwrap().unwrap();
        assert!(synced.is_none() && plain.is_none());
    }

    #[test]
    fn clear_empties_the_cache() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(&dir.path().join("cache.sqlite3")).unwrap();
        storage.cache_lyrics(1, Some("[00:01.00]x"), None, 1).unwrap();
        storage.clear_lyrics().unwrap();
        assert!(storage.get_lyrics(1).unwrap().is_none());
    }
}
