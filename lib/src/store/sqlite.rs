use super::{PreferenceStore, Preferences};
use crate::error::Result;
use crate::models::PrefValue;
use rusqlite::{Connection, OptionalExtension};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Persistent preference store backed by a single SQLite table
///
/// Values are kept as compact JSON text so every [`PrefValue`] variant survives a
/// round trip through the database.
pub struct SqliteStore {
    conn: Connection,
    db_path: PathBuf,
}

impl SqliteStore {
    pub fn init_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn,
            db_path: PathBuf::from(":memory:"),
        };
        store.setup_tables()?;
        Ok(store)
    }

    pub fn init(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        let store = Self {
            conn,
            db_path: db_path.to_path_buf(),
        };
        store.setup_tables()?;
        Ok(store)
    }

    /// Get the database file path
    pub fn get_path(&self) -> &Path {
        &self.db_path
    }

    fn setup_tables(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE if not exists preferences (
                key text PRIMARY KEY,
                value text NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    fn encode_value(value: &PrefValue) -> Result<String> {
        Ok(Value::try_from(value)?.to_string())
    }

    fn decode_value(raw: &str) -> Result<PrefValue> {
        let json: Value = serde_json::from_str(raw)?;
        PrefValue::try_from(json)
    }
}

impl PreferenceStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<PrefValue>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;

        raw.as_deref().map(Self::decode_value).transpose()
    }

    fn set(&self, key: &str, value: PrefValue) -> Result<()> {
        let raw = Self::encode_value(&value)?;
        self.conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            (key, raw),
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM preferences WHERE key = ?1", [key])?;
        Ok(())
    }

    fn all(&self) -> Result<Preferences> {
        let mut stmt = self.conn.prepare("SELECT key, value FROM preferences")?;
        let rows = stmt.query_map([], |row| {
            let key: String = row.get(0)?;
            let raw: String = row.get(1)?;
            Ok((key, raw))
        })?;

        let mut preferences = Preferences::new();
        for row in rows {
            let (key, raw) = row?;
            match Self::decode_value(&raw) {
                Ok(value) => {
                    preferences.insert(key, value);
                }
                Err(e) => log::warn!("Skipping unreadable preference {:?}: {}", key, e),
            }
        }
        Ok(preferences)
    }

    fn set_many(&self, entries: &Preferences) -> Result<usize> {
        // Encode up front so an unencodable value aborts before anything is written
        let mut encoded = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            encoded.push((key.as_str(), Self::encode_value(value)?));
        }

        let tx = self.conn.unchecked_transaction()?;
        for (key, raw) in &encoded {
            tx.execute(
                "INSERT INTO preferences (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                (key, raw),
            )?;
        }
        tx.commit()?;
        Ok(encoded.len())
    }

    fn clear(&self) -> Result<usize> {
        let removed = self.conn.execute("DELETE FROM preferences", [])?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BrowserinoError;
    use rstest::rstest;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn setup_test_store() -> SqliteStore {
        SqliteStore::init_in_memory().unwrap()
    }

    #[rstest]
    #[case(PrefValue::Bool(false))]
    #[case(PrefValue::Int(i64::MIN))]
    #[case(PrefValue::Float(0.25))]
    #[case(PrefValue::Float(3.0))]
    #[case(PrefValue::from("dark"))]
    #[case(PrefValue::Sequence(vec![PrefValue::from("/Applications/Safari.app"), PrefValue::Int(2)]))]
    fn test_value_survives_storage(#[case] value: PrefValue) {
        let store = setup_test_store();
        store.set("key", value.clone()).unwrap();
        assert_eq!(store.get("key").unwrap(), Some(value));
    }

    #[test]
    fn test_too_deep_value_rejected() {
        let mut value = PrefValue::Int(1);
        for _ in 0..200 {
            value = PrefValue::Sequence(vec![value]);
        }
        let store = setup_test_store();
        store.set("kept", PrefValue::Bool(true)).unwrap();

        let result = store.set("deep", value);
        assert!(matches!(result, Err(BrowserinoError::EncodeFailure(_))));
        assert_eq!(store.get("deep").unwrap(), None);
        assert_eq!(store.all().unwrap().len(), 1);
    }

    #[test]
    fn test_get_missing() {
        let store = setup_test_store();
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let store = setup_test_store();
        store.set("theme", PrefValue::from("dark")).unwrap();
        store.set("theme", PrefValue::Int(1)).unwrap();
        assert_eq!(store.get("theme").unwrap(), Some(PrefValue::Int(1)));
        assert_eq!(store.all().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let store = setup_test_store();
        store.set("a", PrefValue::Int(1)).unwrap();
        store.set("b", PrefValue::Int(2)).unwrap();
        store.set("c", PrefValue::Int(3)).unwrap();

        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);

        assert_eq!(store.clear().unwrap(), 2);
        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn test_set_many_is_atomic_on_encode_failure() {
        let store = setup_test_store();
        store.set("keep", PrefValue::Bool(true)).unwrap();

        let mut entries = BTreeMap::new();
        entries.insert("a".to_string(), PrefValue::Int(1));
        entries.insert("z".to_string(), PrefValue::Float(f64::NAN));

        let result = store.set_many(&entries);
        assert!(matches!(result, Err(BrowserinoError::EncodeFailure(_))));

        let all = store.all().unwrap();
        assert_eq!(all.len(), 1);
        assert!(all.contains_key("keep"));
    }

    #[test]
    fn test_all_skips_unreadable_rows() {
        let store = setup_test_store();
        store.set("good", PrefValue::Int(1)).unwrap();
        store
            .conn
            .execute(
                "INSERT INTO preferences (key, value) VALUES ('bad', '{not json')",
                [],
            )
            .unwrap();

        let all = store.all().unwrap();
        assert_eq!(all.len(), 1);
        assert!(all.contains_key("good"));
    }

    #[test]
    fn test_persists_across_connections() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.db");

        {
            let store = SqliteStore::init(&path).unwrap();
            store.set("copy_closeAfterCopy", PrefValue::Bool(true)).unwrap();
            assert_eq!(store.get_path(), path.as_path());
        }

        let reopened = SqliteStore::init(&path).unwrap();
        assert_eq!(
            reopened.get("copy_closeAfterCopy").unwrap(),
            Some(PrefValue::Bool(true))
        );
    }
}
