//! Flat key-value preference store
//!
//! The application's preferences live in one process-wide store. Everything that reads or
//! writes it goes through [`PreferenceStore`] so that tests can substitute [`MemoryStore`]
//! for the persistent [`SqliteStore`].

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::models::PrefValue;
use std::collections::BTreeMap;

/// Snapshot of every key in a store
pub type Preferences = BTreeMap<String, PrefValue>;

pub trait PreferenceStore {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<PrefValue>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: PrefValue) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;

    /// Every key currently in the store
    fn all(&self) -> Result<Preferences>;

    /// Write several entries. Implementations that can should apply them atomically.
    fn set_many(&self, entries: &Preferences) -> Result<usize> {
        for (key, value) in entries {
            self.set(key, value.clone())?;
        }
        Ok(entries.len())
    }

    /// Remove every key, returning how many were removed
    fn clear(&self) -> Result<usize> {
        let keys: Vec<String> = self.all()?.into_keys().collect();
        for key in &keys {
            self.remove(key)?;
        }
        Ok(keys.len())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get(&self, key: &str) -> Result<Option<PrefValue>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: PrefValue) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn all(&self) -> Result<Preferences> {
        (**self).all()
    }

    fn set_many(&self, entries: &Preferences) -> Result<usize> {
        (**self).set_many(entries)
    }

    fn clear(&self) -> Result<usize> {
        (**self).clear()
    }
}
