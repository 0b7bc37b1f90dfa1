// ============================================================================
// FavoritesStore - Embedded persistence using redb
// ============================================================================
// Keeps the starred build ids as a JSON id array under a fixed key.
// Default path: ~/.buildhub/advisor.redb (override via BUILDHUB_DB_PATH)
// ============================================================================

use anyhow::{anyhow, Result};
use redb::{Database, TableDefinition};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use advisor_core::favorites::{self, FavoriteSet};

// Table definitions
const STATE: TableDefinition<&str, &[u8]> = TableDefinition::new("state");

/// Storage key of the favorites array inside the state table
const FAVORITES_KEY: &str = "favorites";

/// Embedded store for caller-side state
pub struct FavoritesStore {
    db: Database,
    path: PathBuf,
}

impl FavoritesStore {
    /// Open (or create) the store at the given path.
    /// If `path` is None, uses BUILDHUB_DB_PATH env var or ~/.buildhub/advisor.redb
    pub fn open(path: Option<&str>) -> Result<Self> {
        let db_path = if let Some(p) = path {
            PathBuf::from(p)
        } else if let Ok(env_path) = std::env::var("BUILDHUB_DB_PATH") {
            PathBuf::from(env_path)
        } else {
            let home =
                dirs::home_dir().ok_or_else(|| anyhow!("Cannot determine home directory"))?;
            let buildhub_dir = home.join(".buildhub");
            std::fs::create_dir_all(&buildhub_dir)
                .map_err(|e| anyhow!("Failed to create .buildhub directory: {}", e))?;
            buildhub_dir.join("advisor.redb")
        };

        info!("Opening favorites store at: {}", db_path.display());

        let db = Database::create(&db_path)
            .map_err(|e| anyhow!("Failed to open database: {}", e))?;

        // Ensure the table exists by doing a write transaction
        let write_txn = db
            .begin_write()
            .map_err(|e| anyhow!("Failed to begin write: {}", e))?;
        {
            let _ = write_txn
                .open_table(STATE)
                .map_err(|e| anyhow!("Failed to create state table: {}", e))?;
        }
        write_txn
            .commit()
            .map_err(|e| anyhow!("Failed to commit init: {}", e))?;

        Ok(Self { db, path: db_path })
    }

    /// Store file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the favorites set. A fresh store loads as the empty set.
    pub fn load(&self) -> Result<FavoriteSet> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| anyhow!("Failed to begin read: {}", e))?;
        let table = read_txn
            .open_table(STATE)
            .map_err(|e| anyhow!("Failed to open state table: {}", e))?;

        match table
            .get(FAVORITES_KEY)
            .map_err(|e| anyhow!("Failed to get favorites: {}", e))?
        {
            Some(value) => {
                let raw = std::str::from_utf8(value.value())
                    .map_err(|e| anyhow!("Favorites entry is not valid UTF-8: {}", e))?;
                favorites::from_json(raw)
                    .map_err(|e| anyhow!("Failed to parse favorites: {}", e))
            }
            None => Ok(FavoriteSet::new()),
        }
    }

    /// Persist the favorites set as a JSON array of ids
    pub fn save(&self, favorites_set: &FavoriteSet) -> Result<()> {
        let value = favorites::to_json(favorites_set)
            .map_err(|e| anyhow!("Failed to serialize favorites: {}", e))?;

        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| anyhow!("Failed to begin write: {}", e))?;
        {
            let mut table = write_txn
                .open_table(STATE)
                .map_err(|e| anyhow!("Failed to open state table: {}", e))?;
            table
                .insert(FAVORITES_KEY, value.as_bytes())
                .map_err(|e| anyhow!("Failed to insert favorites: {}", e))?;
        }
        write_txn
            .commit()
            .map_err(|e| anyhow!("Failed to commit: {}", e))?;

        debug!("Stored {} favorites", favorites_set.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_core::favorites::toggle;

    fn temp_store() -> (tempfile::TempDir, FavoritesStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("test.redb");
        let store =
            FavoritesStore::open(Some(path.to_str().expect("utf-8 path"))).expect("open store");
        (dir, store)
    }

    #[test]
    fn test_fresh_store_loads_empty() {
        let (_dir, store) = temp_store();
        assert!(store.load().expect("load").is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_dir, store) = temp_store();
        let set: FavoriteSet = [1, 3].into_iter().collect();
        store.save(&set).expect("save");
        assert_eq!(store.load().expect("load"), set);
    }

    #[test]
    fn test_persisted_layout_is_json_id_array() {
        let (_dir, store) = temp_store();
        let set: FavoriteSet = [3, 1].into_iter().collect();
        store.save(&set).expect("save");

        let read_txn = store.db.begin_read().expect("begin read");
        let table = read_txn.open_table(STATE).expect("open table");
        let value = table.get(FAVORITES_KEY).expect("get").expect("entry");
        assert_eq!(value.value(), b"[1,3]".as_slice());
    }

    #[test]
    fn test_toggle_round_trip_through_store() {
        let (_dir, store) = temp_store();
        let initial = store.load().expect("load");

        store.save(&toggle(&initial, 2)).expect("save");
        assert!(store.load().expect("load").contains(&2));

        let after = toggle(&store.load().expect("load"), 2);
        store.save(&after).expect("save");
        assert_eq!(store.load().expect("load"), initial);
    }

    #[test]
    fn test_reopen_keeps_data() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("test.redb");
        let path_str = path.to_str().expect("utf-8 path");

        let set: FavoriteSet = [7].into_iter().collect();
        {
            let store = FavoritesStore::open(Some(path_str)).expect("open store");
            store.save(&set).expect("save");
        }

        let reopened = FavoritesStore::open(Some(path_str)).expect("reopen store");
        assert_eq!(reopened.load().expect("load"), set);
    }
}
