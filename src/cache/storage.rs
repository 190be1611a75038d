//! SQLite-backed transient store
//!
//! Each key holds one serialized value with an expiry. Expired rows are never
//! returned and are deleted when a read finds them.

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::CacheError;

/// Schema version - increment to trigger nuke-and-rebuild
const SCHEMA_VERSION: i32 = 1;

type Result<T> = std::result::Result<T, CacheError>;

/// A live (unexpired) value read from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredValue {
    pub site_identifier: String,
    pub data: String,
    /// Epoch milliseconds
    pub expires_at: i64,
}

/// SQLite-backed transient storage
pub struct CacheStorage {
    conn: Connection,
    location: Option<PathBuf>,
}

impl CacheStorage {
    /// Open or create storage at the default XDG cache location
    pub fn open() -> Result<Self> {
        let cache_dir = Self::cache_dir()?;
        Self::open_at(&cache_dir)
    }

    /// Get the cache directory path (~/.cache/lever-jobs on Linux)
    pub fn cache_dir() -> Result<PathBuf> {
        let cache_base = dirs::cache_dir().ok_or(CacheError::NoHome)?;
        Ok(cache_base.join("lever-jobs"))
    }

    /// Open storage in a specific directory
    pub fn open_at(cache_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(cache_dir)
            .map_err(|e| CacheError::Io(format!("Failed to create cache dir: {}", e)))?;

        let db_path = cache_dir.join("transients.db");
        let conn = Connection::open(&db_path)?;

        let version: i32 = conn
            .pragma_query_value(None, "user_version", |r| r.get(0))
            .unwrap_or(0);

        if version != 0 && version != SCHEMA_VERSION {
            log::info!(
                "Cache schema version mismatch ({} != {}), rebuilding",
                version,
                SCHEMA_VERSION
            );
            drop(conn);
            std::fs::remove_file(&db_path)
                .map_err(|e| CacheError::Io(format!("Failed to remove cache DB: {}", e)))?;
            return Self::open_at(cache_dir);
        }

        Self::init(conn, Some(db_path))
    }

    /// Process-local storage that disappears with the connection
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?, None)
    }

    fn init(conn: Connection, location: Option<PathBuf>) -> Result<Self> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS transients (
                cache_key TEXT PRIMARY KEY NOT NULL,
                site_identifier TEXT NOT NULL,
                data TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                expires_at INTEGER NOT NULL,
                size_bytes INTEGER NOT NULL
            );
            "#,
        )?;

        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

        Ok(Self { conn, location })
    }

    /// Database file backing this store, if any
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    /// Get the value under `key` if it has not expired
    pub fn get(&self, key: &str) -> Result<Option<StoredValue>> {
        let now = Utc::now().timestamp_millis();

        let row = self
            .conn
            .query_row(
                "SELECT site_identifier, data, expires_at
                 FROM transients WHERE cache_key = ?1",
                params![key],
                |row| {
                    Ok(StoredValue {
                        site_identifier: row.get(0)?,
                        data: row.get(1)?,
                        expires_at: row.get(2)?,
                    })
                },
            )
            .optional()?;

        match row {
            Some(value) if value.expires_at > now => Ok(Some(value)),
            Some(_) => {
                log::debug!("Transient {} expired, deleting", key);
                self.delete_by_key(key)?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Store `data` under `key`, replacing any previous value
    pub fn put(&self, key: &str, site_identifier: &str, data: &str, ttl: Duration) -> Result<()> {
        let now = Utc::now().timestamp_millis();
        let expires = now.saturating_add(i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX));

        self.conn.execute(
            "INSERT OR REPLACE INTO transients
             (cache_key, site_identifier, data, created_at, expires_at, size_bytes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![key, site_identifier, data, now, expires, data.len() as i64],
        )?;
        Ok(())
    }

    /// Delete a specific entry by key
    pub fn delete_by_key(&self, key: &str) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM transients WHERE cache_key = ?1", [key])?;
        Ok(deleted > 0)
    }

    /// Clear all entries
    pub fn clear_all(&self) -> Result<ClearStats> {
        let removed = self.conn.execute("DELETE FROM transients", [])?;
        Ok(ClearStats {
            entries_removed: removed,
        })
    }

    /// Get store statistics
    pub fn stats(&self) -> Result<CacheStats> {
        let now = Utc::now().timestamp_millis();

        let total_entries: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM transients", [], |r| r.get(0))?;

        let valid_entries: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM transients WHERE expires_at > ?1",
            [now],
            |r| r.get(0),
        )?;

        let total_size: i64 = self.conn.query_row(
            "SELECT COALESCE(SUM(size_bytes), 0) FROM transients",
            [],
            |r| r.get(0),
        )?;

        let newest: Option<i64> = self
            .conn
            .query_row(
                "SELECT MAX(created_at) FROM transients WHERE expires_at > ?1",
                [now],
                |r| r.get(0),
            )
            .optional()?
            .flatten();

        let next_expiry: Option<i64> = self
            .conn
            .query_row(
                "SELECT MIN(expires_at) FROM transients WHERE expires_at > ?1",
                [now],
                |r| r.get(0),
            )
            .optional()?
            .flatten();

        Ok(CacheStats {
            total_entries: total_entries as usize,
            valid_entries: valid_entries as usize,
            expired_entries: (total_entries - valid_entries) as usize,
            total_size_bytes: total_size as usize,
            newest_entry: newest,
            next_expiry,
        })
    }
}

/// Statistics about a clear operation
#[derive(Debug)]
pub struct ClearStats {
    pub entries_removed: usize,
}

/// Statistics about store state; timestamps are epoch milliseconds
#[derive(Debug)]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    pub expired_entries: usize,
    pub total_size_bytes: usize,
    pub newest_entry: Option<i64>,
    pub next_expiry: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_storage() -> (CacheStorage, TempDir) {
        let dir = TempDir::new().unwrap();
        let storage = CacheStorage::open_at(dir.path()).unwrap();
        (storage, dir)
    }

    #[test]
    fn test_put_get() {
        let (storage, _dir) = test_storage();

        storage
            .put("lever_positions", "leverdemo", "[]", Duration::from_secs(60))
            .unwrap();

        let before = Utc::now().timestamp_millis();
        let value = storage.get("lever_positions").unwrap().unwrap();
        assert_eq!(value.site_identifier, "leverdemo");
        assert_eq!(value.data, "[]");
        assert!(value.expires_at > before + 59_000);
        assert!(value.expires_at <= before + 60_000);
    }

    #[test]
    fn test_put_replaces_existing() {
        let storage = CacheStorage::open_in_memory().unwrap();

        storage
            .put("k", "acme", "first", Duration::from_secs(60))
            .unwrap();
        storage
            .put("k", "globex", "second", Duration::from_secs(60))
            .unwrap();

        let value = storage.get("k").unwrap().unwrap();
        assert_eq!(value.site_identifier, "globex");
        assert_eq!(value.data, "second");
        assert_eq!(storage.stats().unwrap().total_entries, 1);
    }

    #[test]
    fn test_expiration_deletes_row() {
        let storage = CacheStorage::open_in_memory().unwrap();

        storage
            .put("k", "acme", "data", Duration::from_secs(0))
            .unwrap();

        assert_eq!(storage.get("k").unwrap(), None);
        assert_eq!(storage.stats().unwrap().total_entries, 0);
    }

    #[test]
    fn test_delete_by_key() {
        let storage = CacheStorage::open_in_memory().unwrap();

        storage
            .put("k", "acme", "data", Duration::from_secs(60))
            .unwrap();

        assert!(storage.delete_by_key("k").unwrap());
        assert!(!storage.delete_by_key("k").unwrap());
        assert!(storage.get("k").unwrap().is_none());
    }

    #[test]
    fn test_clear_all() {
        let (storage, _dir) = test_storage();

        storage
            .put("k1", "acme", "d1", Duration::from_secs(60))
            .unwrap();
        storage
            .put("k2", "acme", "d2", Duration::from_secs(60))
            .unwrap();

        let stats = storage.clear_all().unwrap();
        assert_eq!(stats.entries_removed, 2);

        assert!(storage.get("k1").unwrap().is_none());
        assert!(storage.get("k2").unwrap().is_none());
    }

    #[test]
    fn test_stats() {
        let storage = CacheStorage::open_in_memory().unwrap();

        storage
            .put("k1", "acme", "data1", Duration::from_secs(60))
            .unwrap();
        storage
            .put("k2", "acme", "data2", Duration::from_secs(0))
            .unwrap();

        let stats = storage.stats().unwrap();
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.valid_entries, 1);
        assert_eq!(stats.expired_entries, 1);
        assert_eq!(stats.total_size_bytes, 10);
        assert!(stats.newest_entry.is_some());
        assert!(stats.next_expiry.is_some());
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = TempDir::new().unwrap();

        {
            let storage = CacheStorage::open_at(dir.path()).unwrap();
            storage
                .put("k", "acme", "kept", Duration::from_secs(60))
                .unwrap();
            assert!(storage.location().is_some());
        }

        let storage = CacheStorage::open_at(dir.path()).unwrap();
        assert_eq!(storage.get("k").unwrap().unwrap().data, "kept");
    }
}
